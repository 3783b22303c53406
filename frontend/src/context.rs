//! 看板上下文
//!
//! 通过 Context 在页面间共享：唯一的 API 客户端 (含源地址配置)，以及列表刷新触发器。

use crate::web::FetchHttpClient;
use leptos::prelude::*;
use lostboard::config::API_URL_ENV;
use lostboard::{ApiConfig, BoardApi, log_info};

pub type Api = BoardApi<FetchHttpClient>;

/// 构建时注入的 API 源地址
pub fn api_config() -> ApiConfig {
    ApiConfig::from_build_env(option_env!("LOSTBOARD_API_URL"))
}

#[derive(Clone, Copy)]
pub struct BoardContext {
    api: StoredValue<Api>,
}

impl BoardContext {
    pub fn new(config: ApiConfig) -> Self {
        log_info!("[App] API origin ({}): {}", API_URL_ENV, config.base_url());
        Self {
            api: StoredValue::new(BoardApi::new(FetchHttpClient, config)),
        }
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    pub fn login_url(&self) -> String {
        self.api.with_value(|api| api.config().login_url())
    }
}

/// 从 Context 获取看板上下文
pub fn use_board() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
