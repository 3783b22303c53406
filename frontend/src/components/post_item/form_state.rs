//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到待提交物品的转换

use crate::web::ObjectUrl;
use leptos::prelude::*;
use lostboard::ItemDraft;
use lostboard_shared::ItemStatus;
use web_sys::File;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
/// `File` 不是 `Send`，所以图片使用本地存储的信号。
#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub status: RwSignal<ItemStatus>,
    pub image: RwSignal<Option<File>, LocalStorage>,
    /// 图片的本地预览地址，被替换或清空时自动释放
    pub preview: RwSignal<Option<ObjectUrl>>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            status: RwSignal::new(ItemStatus::default()),
            image: RwSignal::new_local(None),
            preview: RwSignal::new(None),
        }
    }

    /// 选中图片：只取第一个文件，同时生成预览
    pub fn select_image(&self, file: File) {
        self.preview.set(ObjectUrl::for_blob(&file));
        self.image.set(Some(file));
    }

    /// `<select>` 的受控取值
    pub fn status_value(&self) -> &'static str {
        self.status.get().as_str()
    }

    /// 预览地址 (用于 `<img src>`)
    pub fn preview_src(&self) -> Option<String> {
        self.preview
            .with(|preview| preview.as_ref().map(|url| url.as_str().to_string()))
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.status.set(ItemStatus::default());
        self.image.set(None);
        self.preview.set(None);
    }

    /// 将表单状态转换为待提交物品
    pub fn to_draft(&self) -> ItemDraft<File> {
        ItemDraft {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            status: Some(self.status.get_untracked()),
            image: self.image.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
