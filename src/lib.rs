//! Lost & Found 看板客户端核心
//!
//! 与 DOM 无关的部分都放在这里，便于在宿主机上直接测试：
//! - `config`: API 源地址
//! - `request`: HTTP 抽象 (HttpClient trait)
//! - `api`: 看板接口封装
//! - `session` / `submission` / `listing`: 两个页面的业务逻辑
//! - `guard`: 过期请求守卫

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub use web_sys as __web_sys;

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => ($crate::__web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => ($crate::__web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod listing;
pub mod request;
pub mod session;
pub mod submission;

pub use api::BoardApi;
pub use config::ApiConfig;
pub use error::{BoardError, BoardErrorKind, BoardResult};
pub use guard::{RequestGuard, RequestTicket};
pub use listing::{LoadState, badge_class};
pub use request::{FormValue, HttpClient, HttpRequest, HttpResponse, MultipartForm};
pub use session::SessionState;
pub use submission::{ItemDraft, SubmitOutcome, ValidationError};
