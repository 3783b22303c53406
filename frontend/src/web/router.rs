//! 站内导航
//!
//! 地址栏与当前页面信号保持同步：`Link` 点击写入 History，浏览器前进/后退经 popstate 回写信号。

use leptos::prelude::*;
use lostboard::log_info;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
}

/// 当前页面，放在 Context 中供 `Link` 与 `RouterOutlet` 共用
#[derive(Clone, Copy)]
pub struct RouterService {
    page: RwSignal<AppRoute>,
}

impl RouterService {
    fn from_location() -> Self {
        Self {
            page: RwSignal::new(AppRoute::from_path(&location_path())),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.page.read_only()
    }

    /// 已知页面写入规范路径 (`/items/` -> `/items`)，未知路径原样保留
    pub fn navigate(&self, path: &str) {
        let route = AppRoute::from_path(path);
        match route {
            AppRoute::NotFound => push_path(path),
            ref known => push_path(known.to_path()),
        }
        log_info!("[Router] {} -> {:?}", path, route);
        self.page.set(route);
    }

    fn follow_history(&self) {
        let page = self.page;
        let on_pop = Closure::<dyn Fn()>::new(move || {
            page.set(AppRoute::from_path(&location_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref());
        }
        // 监听器与应用同寿命
        on_pop.forget();
    }
}

fn use_router() -> RouterService {
    use_context::<RouterService>().expect("Link/RouterOutlet must be inside <Router>")
}

#[component]
pub fn Router(children: Children) -> impl IntoView {
    let router = RouterService::from_location();
    router.follow_history();
    provide_context(router);
    children()
}

/// 渲染当前页面
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}

/// 站内链接
///
/// 普通左键点击走 History API，不刷新页面；带修饰键的点击交给浏览器处理。
#[component]
pub fn Link(#[prop(into)] to: String, children: Children) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to on:click=on_click>
            {children()}
        </a>
    }
}
