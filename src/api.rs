use crate::config::ApiConfig;
use crate::error::{BoardError, BoardResult};
use crate::request::{HttpClient, HttpRequest, MultipartForm};
use lostboard_shared::protocol::{ApiRequest, CreateItemRequest, CurrentUserRequest, ListItemsRequest};
use lostboard_shared::{ApiMessage, Item, SessionUser};

// =========================================================
// 看板接口 (Board API)
// =========================================================

/// 看板 API 客户端
///
/// 只负责"请求 -> 响应 -> 类型"这一层；结果如何呈现给用户由各页面决定。
#[derive(Clone)]
pub struct BoardApi<C: HttpClient> {
    client: C,
    config: ApiConfig,
}

impl<C: HttpClient> BoardApi<C> {
    pub fn new(client: C, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 根据端点元数据构建请求：地址、方法、Cookie 策略
    fn request<R: ApiRequest>(&self) -> HttpRequest<C::Blob> {
        HttpRequest::new(&self.config.url(R::PATH), R::METHOD)
            .with_credentials(R::CREDENTIALS)
            .with_header("Accept", "application/json")
    }

    /// 查询当前会话对应的用户
    ///
    /// - `Ok(Some(user))`: 已登录
    /// - `Ok(None)`: 未登录 (包括 401/403，以及 `loggedIn` 为真但没有 user 对象)
    /// - `Err(_)`: 无法判断 (网络错误、其他非 2xx、响应无法解析)
    pub async fn current_user(&self) -> BoardResult<Option<SessionUser>> {
        let res = self
            .client
            .send(self.request::<CurrentUserRequest>())
            .await
            .map_err(|e| e.in_op("session.current_user"))?;

        if res.status == 401 || res.status == 403 {
            return Ok(None);
        }
        if !res.ok() {
            return Err(
                BoardError::status(res.status, "Session check failed").in_op("session.current_user")
            );
        }

        let body: <CurrentUserRequest as ApiRequest>::Response =
            res.json().map_err(|e| e.in_op("session.current_user"))?;
        Ok(body.into_user())
    }

    /// 获取全部物品
    pub async fn list_items(&self) -> BoardResult<Vec<Item>> {
        let res = self
            .client
            .send(self.request::<ListItemsRequest>())
            .await
            .map_err(|e| e.in_op("items.list"))?;

        if !res.ok() {
            return Err(BoardError::status(res.status, "Failed to load items").in_op("items.list"));
        }

        res.json::<<ListItemsRequest as ApiRequest>::Response>()
            .map_err(|e| e.in_op("items.list"))
    }

    /// 提交新物品
    ///
    /// 响应体必须是 JSON，否则按解析错误处理 (无论状态码)。
    /// 非 2xx 时读取服务端的 `{ message }` 作为错误信息；
    /// 成功时尽量把 JSON 解析为物品记录，结构不符也算成功。
    pub async fn create_item(&self, form: MultipartForm<C::Blob>) -> BoardResult<Option<Item>> {
        let req = self.request::<CreateItemRequest>().with_multipart(form);
        let res = self
            .client
            .send(req)
            .await
            .map_err(|e| e.in_op("items.create"))?;

        if !res.ok() {
            let body: ApiMessage = res.json().map_err(|e| e.in_op("items.create"))?;
            let message = body
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("Request failed with status {}", res.status));
            return Err(BoardError::status(res.status, message).in_op("items.create"));
        }

        let body: serde_json::Value = res.json().map_err(|e| e.in_op("items.create"))?;
        Ok(serde_json::from_value::<<CreateItemRequest as ApiRequest>::Response>(body).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardErrorKind;
    use crate::request::{Credentials, FormValue, HttpMethod, MockHttpClient};
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn api() -> BoardApi<MockHttpClient> {
        BoardApi::new(MockHttpClient::new(), ApiConfig::new(BASE))
    }

    #[tokio::test]
    async fn session_check_is_credentialed() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            "http://api.test/auth/current_user",
            200,
            json!({ "loggedIn": true, "user": { "displayName": "Ada" } }),
        );

        let user = api.current_user().await.unwrap().unwrap();
        assert_eq!(user.label(), Some("Ada"));

        let reqs = api.client().requests.borrow();
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].method, HttpMethod::Get);
        assert_eq!(reqs[0].credentials, Credentials::Include);
    }

    #[tokio::test]
    async fn unauthorized_session_is_anonymous_not_an_error() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            "http://api.test/auth/current_user",
            401,
            json!({ "message": "Not authenticated" }),
        );
        assert_eq!(api.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn server_error_on_session_check_is_an_error() {
        let api = api();
        api.client().mock_raw(
            HttpMethod::Get,
            "http://api.test/auth/current_user",
            500,
            "oops",
        );
        let err = api.current_user().await.unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::Status(500));
        assert_eq!(err.spans(), ["session.current_user"]);
    }

    #[tokio::test]
    async fn listing_is_anonymous() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Get, "http://api.test/items", 200, json!([]));

        assert!(api.list_items().await.unwrap().is_empty());
        let reqs = api.client().requests.borrow();
        assert_eq!(reqs[0].credentials, Credentials::Omit);
        assert!(reqs[0].form.is_none());
    }

    #[tokio::test]
    async fn listing_rejects_non_array_body() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            "http://api.test/items",
            200,
            json!({ "items": [] }),
        );
        let err = api.list_items().await.unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::Parse);
    }

    #[tokio::test]
    async fn create_failure_carries_server_message() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Post,
            "http://api.test/items",
            400,
            json!({ "message": "Image too large" }),
        );

        let form = vec![("image".to_string(), FormValue::Blob("big.png".to_string()))];
        let err = api.create_item(form).await.unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::Status(400));
        assert_eq!(err.message(), "Image too large");
    }

    #[tokio::test]
    async fn create_failure_without_message_names_the_status() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Post, "http://api.test/items", 422, json!({}));

        let err = api.create_item(Vec::new()).await.unwrap_err();
        assert_eq!(err.message(), "Request failed with status 422");
    }

    #[tokio::test]
    async fn create_failure_with_html_body_is_a_parse_error() {
        let api = api();
        api.client().mock_raw(
            HttpMethod::Post,
            "http://api.test/items",
            502,
            "<html>Bad Gateway</html>",
        );

        let err = api.create_item(Vec::new()).await.unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::Parse);
    }

    #[tokio::test]
    async fn create_success_with_non_json_body_is_a_parse_error() {
        for body in ["", "Created"] {
            let api = api();
            api.client()
                .mock_raw(HttpMethod::Post, "http://api.test/items", 201, body);
            let err = api.create_item(Vec::new()).await.unwrap_err();
            assert_eq!(err.kind, BoardErrorKind::Parse);
            assert_eq!(err.spans(), ["items.create"]);
        }
    }

    #[tokio::test]
    async fn create_success_tolerates_unexpected_json_shape() {
        let lenient = api();
        lenient.client().mock_response(
            HttpMethod::Post,
            "http://api.test/items",
            201,
            json!({ "ok": true }),
        );
        let item = lenient.create_item(Vec::new()).await.unwrap().unwrap();
        assert_eq!(item.id, "");

        let opaque = api();
        opaque.client().mock_response(
            HttpMethod::Post,
            "http://api.test/items",
            201,
            json!("created"),
        );
        assert_eq!(opaque.create_item(Vec::new()).await.unwrap(), None);
    }
}
