//! Lost & Found 前端应用
//!
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `context`: API 客户端与刷新触发器
//! - `auth`: 会话查询
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod items_page;
    pub mod nav_bar;
    pub mod post_item;
}
mod context;

use crate::components::items_page::ItemsPage;
use crate::components::nav_bar::NavBar;
use crate::components::post_item::PostItemPage;
use crate::context::{BoardContext, api_config};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装
pub(crate) mod web {
    mod dialog;
    mod http;
    mod object_url;
    pub mod route;
    pub mod router;

    pub use dialog::alert;
    pub use http::FetchHttpClient;
    pub use object_url::ObjectUrl;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::PostItem => view! { <PostItemPage /> }.into_any(),
        AppRoute::Items => view! { <ItemsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="content not-found">
                <h2>"404"</h2>
                <p>"Page not found"</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 唯一的源地址配置，两个页面共用
    provide_context(BoardContext::new(api_config()));

    view! {
        <Router>
            <NavBar />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
