//! HTTP 请求封装模块
//!
//! 基于 `web_sys::fetch` 实现核心库的 `HttpClient`，multipart 请求体使用浏览器的 `FormData`。

use lostboard::request::{Credentials, FormValue, HttpClient, HttpRequest, HttpResponse};
use lostboard::{BoardError, BoardResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestCredentials, RequestInit, Response};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build_form(parts: &[(String, FormValue<File>)]) -> BoardResult<FormData> {
        let form = FormData::new()
            .map_err(|e| BoardError::request_build(format!("创建 FormData 失败: {:?}", e)))?;

        for (name, value) in parts {
            match value {
                FormValue::Text(text) => form.append_with_str(name, text),
                FormValue::Blob(file) => form.append_with_blob_and_filename(name, file, &file.name()),
            }
            .map_err(|e| BoardError::request_build(format!("追加字段 {} 失败: {:?}", name, e)))?;
        }

        Ok(form)
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    type Blob = File;

    async fn send(&self, req: HttpRequest<File>) -> BoardResult<HttpResponse> {
        let headers = Headers::new()
            .map_err(|e| BoardError::request_build(format!("创建 Headers 失败: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| BoardError::request_build(format!("设置 Header 失败: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_credentials(match req.credentials {
            Credentials::Include => RequestCredentials::Include,
            Credentials::Omit => RequestCredentials::Omit,
        });

        if let Some(parts) = &req.form {
            let form = Self::build_form(parts)?;
            opts.set_body(&form.into());
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| BoardError::request_build(format!("{:?}", e)))?;

        let window =
            web_sys::window().ok_or_else(|| BoardError::network("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| BoardError::network(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| BoardError::parse(format!("Response 类型转换失败: {:?}", e)))?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| BoardError::parse(format!("{:?}", e)))?;
        let body = JsFuture::from(promise)
            .await
            .map_err(|e| BoardError::network(format!("读取响应体失败: {:?}", e)))?
            .as_string()
            .ok_or_else(|| BoardError::parse("响应体无法转换为字符串"))?;

        Ok(HttpResponse { status, body })
    }
}
