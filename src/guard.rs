//! 过期请求守卫
//!
//! 每个页面实例持有一个 `RequestGuard`。发请求前领取一张 `RequestTicket`，
//! 响应回来时先检查票据是否仍然有效：页面已卸载，或者之后又发出了更新的请求，
//! 旧响应都直接丢弃，不再写入页面状态。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一个新请求，之前领取的票据全部失效
    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// 作废所有未完成的请求 (页面卸载时调用)
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Debug)]
pub struct RequestTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn invalidate_drops_every_outstanding_ticket() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn clones_share_the_same_generation() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.clone().invalidate();
        assert!(!ticket.is_current());
    }
}
