//! Object URL 封装模块
//!
//! 封装 `URL.createObjectURL`。当 `ObjectUrl` 被 drop 时，自动调用 `revokeObjectURL` 释放浏览器持有的引用。

use web_sys::{Blob, Url};

/// 本地文件的临时预览地址
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// 为文件创建预览地址，浏览器拒绝时返回 None
    pub fn for_blob(blob: &Blob) -> Option<Self> {
        Url::create_object_url_with_blob(blob)
            .ok()
            .map(|url| Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}
