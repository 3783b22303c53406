use crate::error::{BoardError, BoardResult};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub use lostboard_shared::protocol::{Credentials, HttpMethod};

#[cfg(test)]
use std::cell::RefCell;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// multipart 表单中的一个值
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue<B> {
    Text(String),
    /// 二进制内容，具体类型由客户端实现决定 (浏览器中是 `web_sys::File`)
    Blob(B),
}

/// 按顺序追加的 multipart 字段
pub type MultipartForm<B> = Vec<(String, FormValue<B>)>;

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest<B> {
    pub url: String,
    pub method: HttpMethod,
    pub credentials: Credentials,
    pub headers: HashMap<String, String>,
    pub form: Option<MultipartForm<B>>,
}

impl<B> HttpRequest<B> {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            credentials: Credentials::Omit,
            headers: HashMap::new(),
            form: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// multipart 的 Content-Type (含 boundary) 由浏览器生成，这里不设置
    pub fn with_multipart(mut self, parts: MultipartForm<B>) -> Self {
        self.form = Some(parts);
        self
    }

    /// multipart 字段名，按发送顺序
    pub fn multipart_fields(&self) -> Vec<&str> {
        self.form
            .iter()
            .flatten()
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> BoardResult<T> {
        serde_json::from_str(&self.body).map_err(BoardError::from)
    }
}

/// HTTP 客户端特性 (Trait)
/// 浏览器里的 File / Promise 都不是 Send，所以使用 (?Send)
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    /// multipart 中二进制字段的载体
    type Blob: Clone + 'static;

    async fn send(&self, req: HttpRequest<Self::Blob>) -> BoardResult<HttpResponse>;
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

/// 用文件名代替文件内容的测试客户端
#[cfg(test)]
pub struct MockHttpClient {
    // ("METHOD url", (Status, Response Body))
    responses: RefCell<HashMap<String, (u16, String)>>,
    // 这些地址直接返回网络错误
    unreachable: RefCell<Vec<String>>,
    pub requests: RefCell<Vec<HttpRequest<String>>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            unreachable: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method.as_str(), url)
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.mock_raw(method, url, status, &body.to_string());
    }

    pub fn mock_raw(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(Self::key(method, url), (status, body.to_string()));
    }

    pub fn mock_unreachable(&self, url: &str) {
        self.unreachable.borrow_mut().push(url.to_string());
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    type Blob = String;

    async fn send(&self, req: HttpRequest<String>) -> BoardResult<HttpResponse> {
        self.requests.borrow_mut().push(req.clone());

        if self.unreachable.borrow().contains(&req.url) {
            return Err(BoardError::network("Failed to fetch"));
        }

        let responses = self.responses.borrow();
        match responses.get(&Self::key(req.method, &req.url)) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_covers_the_2xx_range_only() {
        let res = |status| HttpResponse {
            status,
            body: String::new(),
        };
        assert!(res(200).ok());
        assert!(res(201).ok());
        assert!(!res(199).ok());
        assert!(!res(302).ok());
        assert!(!res(400).ok());
    }

    #[test]
    fn multipart_fields_keep_insertion_order() {
        let req: HttpRequest<String> = HttpRequest::new("http://x/items", HttpMethod::Post)
            .with_multipart(vec![
                ("b".into(), FormValue::Text("1".into())),
                ("a".into(), FormValue::Blob("a.png".into())),
            ]);
        assert_eq!(req.multipart_fields(), vec!["b", "a"]);
        assert!(req.headers.get("Content-Type").is_none());
    }

    #[test]
    fn requests_are_anonymous_unless_asked() {
        let req: HttpRequest<String> = HttpRequest::new("http://x/items", HttpMethod::Get);
        assert_eq!(req.credentials, Credentials::Omit);
        assert!(req.multipart_fields().is_empty());

        let req = req.with_credentials(Credentials::Include);
        assert_eq!(req.credentials, Credentials::Include);
    }
}
