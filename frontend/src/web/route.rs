//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 发布物品 (默认路由)
    #[default]
    PostItem,
    /// 物品列表
    Items,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 导航栏中出现的路由，按显示顺序
    pub const NAV: [AppRoute; 2] = [AppRoute::PostItem, AppRoute::Items];

    /// 将 URL path 解析为路由枚举，忽略末尾的 `/`
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::PostItem,
            "/items" => Self::Items,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::PostItem => "/",
            Self::Items => "/items",
            Self::NotFound => "/404",
        }
    }

    /// 导航链接文字
    pub fn label(&self) -> &'static str {
        match self {
            Self::PostItem => "Post Item",
            Self::Items => "View Items",
            Self::NotFound => "Not Found",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
