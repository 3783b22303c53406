mod form_state;
mod item_form;

use crate::auth::use_session;
use crate::context::use_board;
use item_form::ItemForm;
use leptos::prelude::*;
use lostboard::SessionState;

#[component]
pub fn PostItemPage() -> impl IntoView {
    let board = use_board();
    let session = use_session();
    let login_url = board.login_url();

    let signed_in_as = move || {
        session.with(|s| s.user().and_then(|u| u.label()).map(str::to_string))
    };

    view! {
        <div class="content">
            <h2>"Welcome to the Lost & Found Platform"</h2>
            <p>
                "Post your lost or found items here. Make sure to provide clear "
                "descriptions and upload an image to help others identify the item."
            </p>

            <Show
                when=move || session.with(SessionState::shows_form)
                fallback=move || {
                    let login_url = login_url.clone();
                    view! {
                        <Show when=move || matches!(session.get(), SessionState::Unavailable(_))>
                            <p class="session-notice">"Could not reach the sign-in service."</p>
                        </Show>
                        <a href=login_url>
                            <button class="login-btn">"Login with Google"</button>
                        </a>
                    }
                }
            >
                {move || signed_in_as().map(|name| view! { <p class="signed-in">"Signed in as " {name}</p> })}
                <ItemForm />
            </Show>
        </div>
    }
}
