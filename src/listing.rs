use crate::api::BoardApi;
use crate::guard::RequestTicket;
use crate::request::HttpClient;
use crate::{log_error, log_info};
use lostboard_shared::{Item, STATUS_LOST};

pub const BADGE_LOST: &str = "status-badge lost";
pub const BADGE_FOUND: &str = "status-badge found";

/// 页面数据加载状态
///
/// `Idle -> Loading -> Loaded | Failed`，失败与"空列表"是两个不同的状态。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// 状态徽章的 CSS class
///
/// 只有字面量 `"Lost"` 使用 lost 样式，其他任何值 (包括未知值) 都按 found 展示。
pub fn badge_class(status: &str) -> &'static str {
    if status == STATUS_LOST { BADGE_LOST } else { BADGE_FOUND }
}

/// 单张卡片需要的全部展示数据
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub status: String,
    pub badge_class: &'static str,
}

impl From<Item> for ItemCard {
    fn from(item: Item) -> Self {
        let badge_class = badge_class(&item.status);
        Self {
            key: item.id,
            title: item.title,
            description: item.description,
            image_url: item.image_url,
            status: item.status,
            badge_class,
        }
    }
}

/// 拉取物品列表
///
/// 票据过期时返回 `None`，调用方不应再更新状态。
pub async fn load_items<C: HttpClient>(
    api: &BoardApi<C>,
    ticket: &RequestTicket,
) -> Option<LoadState<Vec<ItemCard>>> {
    let result = api.list_items().await;

    if !ticket.is_current() {
        log_info!("[Items] Discarding stale listing response");
        return None;
    }

    Some(match result {
        Ok(items) => {
            log_info!("[Items] Loaded {} items", items.len());
            LoadState::Loaded(items.into_iter().map(ItemCard::from).collect())
        }
        Err(e) => {
            log_error!("[Items] Error fetching items: {}", e);
            LoadState::Failed(e.message().to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::guard::RequestGuard;
    use crate::request::{HttpMethod, MockHttpClient};
    use serde_json::json;

    const ITEMS_URL: &str = "http://api.test/items";

    fn api() -> BoardApi<MockHttpClient> {
        BoardApi::new(MockHttpClient::new(), ApiConfig::new("http://api.test"))
    }

    #[test]
    fn badge_depends_on_exact_lost_literal() {
        assert_eq!(badge_class("Lost"), BADGE_LOST);
        assert_eq!(badge_class("Found"), BADGE_FOUND);
        assert_eq!(badge_class("Unknown"), BADGE_FOUND);
        assert_eq!(badge_class("lost"), BADGE_FOUND);
        assert_eq!(badge_class(""), BADGE_FOUND);
    }

    #[tokio::test]
    async fn wallet_renders_as_one_lost_card() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            ITEMS_URL,
            200,
            json!([{
                "id": "1",
                "title": "Wallet",
                "description": "Black leather",
                "status": "Lost",
                "imageUrl": "http://x/1.jpg"
            }]),
        );

        let guard = RequestGuard::new();
        let state = load_items(&api, &guard.begin()).await.unwrap();
        let cards = state.loaded().unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(
            cards[0],
            ItemCard {
                key: "1".into(),
                title: "Wallet".into(),
                description: "Black leather".into(),
                image_url: "http://x/1.jpg".into(),
                status: "Lost".into(),
                badge_class: BADGE_LOST,
            }
        );
    }

    #[tokio::test]
    async fn mixed_statuses_only_mark_exact_lost() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            ITEMS_URL,
            200,
            json!([
                { "_id": "a", "title": "A", "description": "", "status": "Lost", "imageUrl": "" },
                { "_id": "b", "title": "B", "description": "", "status": "Found", "imageUrl": "" },
                { "_id": "c", "title": "C", "description": "", "status": "Unknown", "imageUrl": "" }
            ]),
        );

        let state = load_items(&api, &RequestGuard::new().begin()).await.unwrap();
        let classes: Vec<_> = state.loaded().unwrap().iter().map(|c| c.badge_class).collect();
        assert_eq!(classes, vec![BADGE_LOST, BADGE_FOUND, BADGE_FOUND]);
    }

    #[tokio::test]
    async fn empty_collection_is_loaded_not_loading() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Get, ITEMS_URL, 200, json!([]));

        let state = load_items(&api, &RequestGuard::new().begin()).await.unwrap();
        assert!(!state.is_loading());
        assert_eq!(state.loaded().map(Vec::len), Some(0));
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn network_failure_is_distinct_from_empty() {
        let api = api();
        api.client().mock_unreachable(ITEMS_URL);

        let state = load_items(&api, &RequestGuard::new().begin()).await.unwrap();
        assert!(state.loaded().is_none());
        assert!(state.error().is_some());
        assert_eq!(api.client().request_count(), 1);
    }

    #[tokio::test]
    async fn documents_with_virtual_id_still_render() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            ITEMS_URL,
            200,
            json!([
                { "_id": "665f", "id": "665f", "title": "Wallet", "status": "Lost", "imageUrl": "" },
                { "title": "Umbrella", "status": "Found" }
            ]),
        );

        let state = load_items(&api, &RequestGuard::new().begin()).await.unwrap();
        let cards = state.loaded().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].key, "665f");
        assert_eq!(cards[1].title, "Umbrella");
    }

    #[tokio::test]
    async fn every_mount_fetches_the_current_collection() {
        let api = api();
        let guard = RequestGuard::new();
        api.client()
            .mock_response(HttpMethod::Get, ITEMS_URL, 200, json!([]));
        let first = load_items(&api, &guard.begin()).await.unwrap();
        assert_eq!(first.loaded().map(Vec::len), Some(0));

        // 发布成功后再次进入列表页
        api.client().mock_response(
            HttpMethod::Get,
            ITEMS_URL,
            200,
            json!([{ "_id": "new", "title": "Keys", "status": "Found" }]),
        );
        let second = load_items(&api, &guard.begin()).await.unwrap();
        assert_eq!(second.loaded().map(Vec::len), Some(1));
        assert_eq!(api.client().request_count(), 2);
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Get, ITEMS_URL, 200, json!([]));

        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.invalidate();

        assert_eq!(load_items(&api, &ticket).await, None);
    }
}
