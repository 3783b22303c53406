use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;

/// 顶部导航：标题与两个固定链接，不持有状态
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <h1>"Lost & Found"</h1>
            <div>
                {AppRoute::NAV
                    .into_iter()
                    .map(|route| {
                        view! {
                            <Link to=route.to_path() attr:class="nav-link">
                                {route.label()}
                            </Link>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
