//! Votes Form Component
//!
//! Numeric input to add votes to the selected character, plus a reset button.
//! Invalid input or a missing selection never issues a request; the displayed
//! count always comes from the server-returned record.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::store::{
    next_votes, parse_vote_amount, selected_character, store_replace_character, use_app_store,
};

/// Vote submit + reset form
#[component]
pub fn VotesForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (amount, set_amount) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = selected_character(&store) else {
            return;
        };
        let raw = amount.get();
        let Some(total) = parse_vote_amount(&raw).and_then(|delta| next_votes(current.votes, delta))
        else {
            set_amount.set(String::new());
            return;
        };

        spawn_local(async move {
            match api::patch_votes(current.id, total).await {
                Ok(updated) => {
                    store_replace_character(&store, updated);
                    set_amount.set(String::new());
                }
                Err(err) => ctx.set_status(format!("Error updating votes: {err}")),
            }
        });
    };

    let on_reset = move |_| {
        let Some(current) = selected_character(&store) else {
            return;
        };
        spawn_local(async move {
            match api::patch_votes(current.id, 0).await {
                Ok(updated) => store_replace_character(&store, updated),
                Err(err) => ctx.set_status(format!("Error resetting votes: {err}")),
            }
        });
    };

    view! {
        <form class="votes-form" on:submit=on_submit>
            <input
                type="number"
                placeholder="Enter votes..."
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <button type="submit">"Vote"</button>
            <button type="button" class="reset-btn" on:click=on_reset>"Reset votes"</button>
        </form>
    }
}
