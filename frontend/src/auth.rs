//! 认证模块
//!
//! 会话状态只保存在发布页实例的内存里：挂载时查询一次，卸载即丢弃，不做任何持久化。

use crate::context::use_board;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lostboard::RequestGuard;
use lostboard::session::{SessionState, resolve_session};

/// 挂载时查询会话
///
/// 不阻塞渲染：返回的信号先是 `Resolving`，查询完成后更新。
/// 页面卸载后到达的响应会被丢弃。
pub fn use_session() -> ReadSignal<SessionState> {
    let api = use_board().api();
    let (state, set_state) = signal(SessionState::Resolving);

    let guard = RequestGuard::new();
    let ticket = guard.begin();
    on_cleanup(move || guard.invalidate());

    spawn_local(async move {
        if let Some(resolved) = resolve_session(&api, &ticket).await {
            set_state.set(resolved);
        }
    });

    state
}
