//! 物品发布表单组件
//!
//! 负责字段输入、图片选择与预览，以及提交后的提示与重置。

use leptos::prelude::*;
use leptos::task::spawn_local;
use lostboard::RequestGuard;
use lostboard::submission::submit_item;
use lostboard_shared::ItemStatus;
use web_sys::HtmlInputElement;

use super::form_state::FormState;
use crate::context::use_board;
use crate::web::alert;

#[component]
pub fn ItemForm() -> impl IntoView {
    let board = use_board();
    let state = FormState::new();
    let (submitting, set_submitting) = signal(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.invalidate()
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let draft = state.to_draft();
        let api = board.api();
        let ticket = guard.begin();
        set_submitting.set(true);

        spawn_local(async move {
            let outcome = submit_item(&api, &draft).await;
            if !ticket.is_current() {
                return;
            }

            alert(outcome.alert_message());
            if outcome.resets_form() {
                state.reset();
                // 文件选择框的值无法通过信号清空
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
            set_submitting.set(false);
        });
    };

    let on_image_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            state.select_image(file);
        }
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <label>
                "Title:"
                <input
                    type="text"
                    prop:value=move || state.title.get()
                    on:input=move |ev| state.title.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Description:"
                <textarea
                    prop:value=move || state.description.get()
                    on:input=move |ev| state.description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label>
                "Status:"
                // 受控 select：重置后显示值跟随信号
                <select
                    prop:value=move || state.status_value()
                    on:change=move |ev| {
                        if let Some(status) = ItemStatus::from_value(&event_target_value(&ev)) {
                            state.status.set(status);
                        }
                    }
                >
                    {ItemStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label>
                "Upload Image:"
                <input type="file" accept="image/*" node_ref=file_input on:change=on_image_change />
            </label>

            <Show when=move || state.preview.with(Option::is_some)>
                <img
                    class="image-preview"
                    src=move || state.preview_src()
                    alt="Preview"
                    style="width: 150px; margin-top: 10px; border-radius: 10px;"
                />
            </Show>

            <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit Item" }}
            </button>
        </form>
    }
}
