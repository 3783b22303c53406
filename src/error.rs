use std::fmt;

// =========================================================
// 错误类型枚举
// =========================================================

/// 客户端错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErrorKind {
    /// 请求构建失败 (Headers / FormData / Request 对象创建失败)
    RequestBuild,
    /// 网络层失败，请求没有拿到响应
    Network,
    /// 响应体无法解析为预期的 JSON
    Parse,
    /// 服务端返回非 2xx
    Status(u16),
}

impl BoardErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            BoardErrorKind::RequestBuild => "REQUEST_BUILD",
            BoardErrorKind::Network => "NETWORK",
            BoardErrorKind::Parse => "PARSE",
            BoardErrorKind::Status(_) => "HTTP_STATUS",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BoardError {
    pub kind: BoardErrorKind,
    pub message: String,
    /// 出错时所在的操作，外层在前
    spans: Vec<String>,
}

impl BoardError {
    pub fn new(kind: BoardErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            spans: Vec::new(),
        }
    }

    // --- Convenience constructors ---

    pub fn request_build(message: impl Into<String>) -> Self {
        Self::new(BoardErrorKind::RequestBuild, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BoardErrorKind::Network, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(BoardErrorKind::Parse, message)
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::new(BoardErrorKind::Status(code), message)
    }

    /// 添加操作追踪
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.insert(0, operation.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            BoardErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.error_code(), self.message)?;
        if let Some(code) = self.status_code() {
            write!(f, " (status {})", code)?;
        }
        if !self.spans.is_empty() {
            write!(f, " | trace: {}", self.spans.join(" -> "))?;
        }
        Ok(())
    }
}

impl std::error::Error for BoardError {}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::parse(e.to_string())
    }
}

pub type BoardResult<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_status_and_trace() {
        let err = BoardError::status(502, "bad gateway")
            .in_op("http.send")
            .in_op("items.list");
        assert_eq!(
            err.to_string(),
            "[HTTP_STATUS] bad gateway (status 502) | trace: items.list -> http.send"
        );
        assert_eq!(err.status_code(), Some(502));
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let err: BoardError = serde_json::from_str::<Vec<u8>>("not json").unwrap_err().into();
        assert_eq!(err.kind, BoardErrorKind::Parse);
        assert_eq!(err.status_code(), None);
    }
}
