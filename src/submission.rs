use crate::api::BoardApi;
use crate::error::{BoardError, BoardErrorKind};
use crate::request::{FormValue, HttpClient, MultipartForm};
use crate::{log_error, log_info};
use lostboard_shared::{FIELD_DESCRIPTION, FIELD_IMAGE, FIELD_STATUS, FIELD_TITLE, Item, ItemStatus};

pub const MSG_MISSING_FIELDS: &str = "Please fill all fields and upload an image.";
pub const MSG_SUBMITTED: &str = "Item submitted successfully!";
pub const MSG_SUBMIT_FAILED: &str = "Error submitting item.";

// =========================================================
// 待提交物品 (Draft)
// =========================================================

/// 表单中尚未提交的物品
///
/// `B` 是图片文件的载体，浏览器中为 `web_sys::File`。
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft<B> {
    pub title: String,
    pub description: String,
    pub status: Option<ItemStatus>,
    pub image: Option<B>,
}

impl<B> Default for ItemDraft<B> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: Some(ItemStatus::default()),
            image: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingTitle,
    MissingDescription,
    MissingStatus,
    MissingImage,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field = match self {
            ValidationError::MissingTitle => FIELD_TITLE,
            ValidationError::MissingDescription => FIELD_DESCRIPTION,
            ValidationError::MissingStatus => FIELD_STATUS,
            ValidationError::MissingImage => FIELD_IMAGE,
        };
        write!(f, "missing field: {}", field)
    }
}

impl std::error::Error for ValidationError {}

impl<B: Clone> ItemDraft<B> {
    /// 四个字段都必须存在；文本只检查是否为空串，空白字符照常提交
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.status.is_none() {
            return Err(ValidationError::MissingStatus);
        }
        if self.image.is_none() {
            return Err(ValidationError::MissingImage);
        }
        Ok(())
    }

    /// 转换为 multipart 表单：title, description, status, image，不含其他字段
    pub fn to_form(&self) -> Result<MultipartForm<B>, ValidationError> {
        self.validate()?;
        let status = self.status.ok_or(ValidationError::MissingStatus)?;
        let image = self.image.clone().ok_or(ValidationError::MissingImage)?;

        Ok(vec![
            (FIELD_TITLE.to_string(), FormValue::Text(self.title.clone())),
            (
                FIELD_DESCRIPTION.to_string(),
                FormValue::Text(self.description.clone()),
            ),
            (
                FIELD_STATUS.to_string(),
                FormValue::Text(status.as_str().to_string()),
            ),
            (FIELD_IMAGE.to_string(), FormValue::Blob(image)),
        ])
    }
}

// =========================================================
// 提交结果 (Outcome)
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 校验失败，没有发出请求
    Invalid(ValidationError),
    /// 服务端已创建；响应体能解析时附带新记录
    Created(Option<Item>),
    /// 服务端拒绝，附带服务端给出的原因
    Rejected(String),
    /// 网络错误或响应无法解析
    Failed(BoardError),
}

impl SubmitOutcome {
    /// 需要弹给用户的提示文本
    pub fn alert_message(&self) -> &str {
        match self {
            SubmitOutcome::Invalid(_) => MSG_MISSING_FIELDS,
            SubmitOutcome::Created(_) => MSG_SUBMITTED,
            SubmitOutcome::Rejected(message) => message,
            SubmitOutcome::Failed(_) => MSG_SUBMIT_FAILED,
        }
    }

    /// 只有成功时清空表单，其余情况保留输入以便重试
    pub fn resets_form(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// 校验并提交
///
/// 校验不通过时不发出任何请求。
pub async fn submit_item<C: HttpClient>(
    api: &BoardApi<C>,
    draft: &ItemDraft<C::Blob>,
) -> SubmitOutcome {
    let form = match draft.to_form() {
        Ok(form) => form,
        Err(e) => return SubmitOutcome::Invalid(e),
    };

    match api.create_item(form).await {
        Ok(item) => {
            log_info!("[Submit] Item created: {:?}", item.as_ref().map(|i| &i.id));
            SubmitOutcome::Created(item)
        }
        Err(e) if matches!(e.kind, BoardErrorKind::Status(_)) => {
            log_info!("[Submit] Rejected by server: {}", e);
            SubmitOutcome::Rejected(e.message().to_string())
        }
        Err(e) => {
            log_error!("[Submit] {}", e);
            SubmitOutcome::Failed(e)
        }
    }
}
