use crate::context::use_board;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lostboard::listing::{ItemCard, load_items};
use lostboard::{LoadState, RequestGuard};

#[component]
pub fn ItemsPage() -> impl IntoView {
    let board = use_board();
    let (state, set_state) = signal(LoadState::<Vec<ItemCard>>::Loading);

    // 每次进入列表页都重新拉取，发布后的新物品自然出现
    let guard = RequestGuard::new();
    let ticket = guard.begin();
    on_cleanup(move || guard.invalidate());

    let api = board.api();
    spawn_local(async move {
        if let Some(next) = load_items(&api, &ticket).await {
            set_state.set(next);
        }
    });

    move || match state.get() {
        LoadState::Idle | LoadState::Loading => view! {
            <h2 style="text-align: center;">"Loading items..."</h2>
        }
        .into_any(),
        LoadState::Failed(reason) => view! {
            <div class="items-container">
                <h1 class="page-title">"All Lost & Found Items"</h1>
                <p class="load-error" role="alert">"Could not load items: " {reason}</p>
            </div>
        }
        .into_any(),
        LoadState::Loaded(cards) => view! {
            <div class="items-container">
                <h1 class="page-title">"All Lost & Found Items"</h1>
                <div class="items-grid">
                    {cards.into_iter().map(|card| view! { <ItemCardView card=card /> }).collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ItemCardView(card: ItemCard) -> impl IntoView {
    view! {
        <div class="item-card" data-id=card.key>
            <img src=card.image_url alt=card.title.clone() class="item-image" />
            <div class="item-details">
                <h3>{card.title}</h3>
                <p>{card.description}</p>
                <span class=card.badge_class>{card.status}</span>
            </div>
        </div>
    }
}
