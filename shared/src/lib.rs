use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const PATH_CURRENT_USER: &str = "/auth/current_user";
pub const PATH_GOOGLE_LOGIN: &str = "/auth/google";
pub const PATH_ITEMS: &str = "/items";

/// multipart 表单字段名，顺序即发送顺序
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_IMAGE: &str = "image";

pub const STATUS_LOST: &str = "Lost";
pub const STATUS_FOUND: &str = "Found";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 物品状态，提交时只允许这两个值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ItemStatus {
    #[default]
    Lost,
    Found,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 2] = [ItemStatus::Lost, ItemStatus::Found];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Lost => STATUS_LOST,
            ItemStatus::Found => STATUS_FOUND,
        }
    }

    /// 从 `<select>` 的取值解析，未知值返回 None
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            STATUS_LOST => Some(ItemStatus::Lost),
            STATUS_FOUND => Some(ItemStatus::Found),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 列表接口返回的物品记录
///
/// `status` 保留服务端原始字符串：展示时只有字面量 `"Lost"` 算作丢失，
/// 其余任何值都按 "Found" 渲染。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawItem")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Item {
    pub fn is_lost(&self) -> bool {
        self.status == STATUS_LOST
    }
}

/// 服务端原样的物品文档
///
/// `_id` 与 `id` 可能同时出现 (虚拟字段)，也可能都没有；取值可以是字符串或数字。
#[derive(Deserialize)]
struct RawItem {
    #[serde(rename = "_id", default)]
    doc_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    status: Option<Value>,
    #[serde(rename = "imageUrl", default)]
    image_url: Option<Value>,
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        let text = |v: Option<Value>| v.as_ref().and_then(scalar_text).unwrap_or_default();
        Self {
            id: raw
                .doc_id
                .as_ref()
                .and_then(scalar_text)
                .or_else(|| raw.id.as_ref().and_then(scalar_text))
                .unwrap_or_default(),
            title: text(raw.title),
            description: text(raw.description),
            status: text(raw.status),
            image_url: text(raw.image_url),
        }
    }
}

/// 字符串原样返回，数字转成十进制文本，其余类型视为缺失
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 已登录用户
///
/// 用户对象的结构由认证服务决定，这里不做任何校验，整体原样保存；
/// 界面需要的字段按需读取，读不到就是 None。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SessionUser(pub Value);

impl SessionUser {
    fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get(key))
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.field(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// `_id` 优先，其次 `id`
    pub fn id(&self) -> Option<String> {
        self.field("_id")
            .and_then(scalar_text)
            .or_else(|| self.field("id").and_then(scalar_text))
    }

    pub fn display_name(&self) -> Option<&str> {
        self.text_field("displayName")
    }

    /// `email` 字段，或 Google profile 的 `emails[0].value`
    pub fn email(&self) -> Option<&str> {
        self.text_field("email").or_else(|| {
            self.field("emails")
                .and_then(Value::as_array)
                .and_then(|emails| emails.first())
                .and_then(|first| first.get("value"))
                .and_then(Value::as_str)
        })
    }

    /// 界面上显示的名字：优先显示名，其次邮箱
    pub fn label(&self) -> Option<&str> {
        self.display_name().or_else(|| self.email())
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}

/// `GET /auth/current_user` 的响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CurrentUser {
    #[serde(rename = "loggedIn", default)]
    pub logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

impl CurrentUser {
    /// `loggedIn` 为真但没有 user 对象 (或为 null) 时视为未登录
    pub fn into_user(self) -> Option<SessionUser> {
        if !self.logged_in {
            return None;
        }
        self.user.filter(|user| !user.0.is_null())
    }
}

/// 失败响应体 `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
