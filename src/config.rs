use lostboard_shared::PATH_GOOGLE_LOGIN;

// =========================================================
// 运行配置 (Configuration)
// =========================================================

/// 构建时注入 API 源地址所用的环境变量名
pub const API_URL_ENV: &str = "LOSTBOARD_API_URL";

/// 未配置时使用本地开发服务器
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// API 源地址
///
/// 整个客户端只有这一个配置项，由应用根部创建后通过 Context 注入两个页面。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// 从构建时变量解析，空值视为未配置
    ///
    /// 调用方传入 `option_env!("LOSTBOARD_API_URL")`。
    pub fn from_build_env(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// OAuth 入口，作为普通链接使用，不经过 fetch
    pub fn login_url(&self) -> String {
        self.url(PATH_GOOGLE_LOGIN)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
