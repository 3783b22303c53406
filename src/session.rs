use crate::api::BoardApi;
use crate::guard::RequestTicket;
use crate::log_info;
use crate::request::HttpClient;
use lostboard_shared::SessionUser;

/// 会话状态
///
/// 挂载时为 `Resolving`，会话查询完成后进入其余三种之一。
/// 只有 `Authenticated` 会渲染提交表单，其余状态都显示登录入口。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Resolving,
    Anonymous,
    Authenticated(SessionUser),
    /// 认证服务不可达或返回异常，界面表现为未登录
    Unavailable(String),
}

impl SessionState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// 是否渲染提交表单
    pub fn shows_form(&self) -> bool {
        self.user().is_some()
    }

    /// 是否渲染登录入口
    pub fn shows_login(&self) -> bool {
        !self.shows_form()
    }
}

/// 查询当前会话
///
/// 失败只写日志，不弹窗。票据过期时返回 `None`。
pub async fn resolve_session<C: HttpClient>(
    api: &BoardApi<C>,
    ticket: &RequestTicket,
) -> Option<SessionState> {
    let result = api.current_user().await;

    if !ticket.is_current() {
        return None;
    }

    Some(match result {
        Ok(Some(user)) => {
            log_info!("[Session] Signed in as {}", user.label().unwrap_or("<unnamed>"));
            SessionState::Authenticated(user)
        }
        Ok(None) => {
            log_info!("[Session] User not logged in");
            SessionState::Anonymous
        }
        Err(e) => {
            log_info!("[Session] User not logged in: {}", e);
            SessionState::Unavailable(e.message().to_string())
        }
    })
}
