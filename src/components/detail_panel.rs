//! Detail Panel Component
//!
//! Shows the selected character's name, image and vote count, or a
//! placeholder when nothing is selected / the initial load failed.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{selected_character, use_app_store};

/// Detail panel component
#[component]
pub fn DetailPanel(
    /// Placeholder text when the character list failed to load
    load_error: ReadSignal<Option<String>>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let selected = Memo::new(move |_| selected_character(&store));

    view! {
        <section class="detail-panel">
            {move || match selected.get() {
                Some(c) => view! {
                    <h2 class="name-display">{c.name.clone()}</h2>
                    <img class="detail-image" src=c.image.clone() alt=c.name.clone() />
                    <p class="vote-count">{c.votes} " votes"</p>
                }.into_any(),
                None => view! {
                    <p class="placeholder">
                        {move || load_error.get().unwrap_or_else(|| "No character selected".to_string())}
                    </p>
                    {move || load_error.get().map(|_| view! {
                        <button class="retry-btn" on:click=move |_| ctx.reload()>
                            "Retry"
                        </button>
                    })}
                }.into_any(),
            }}
        </section>
    }
}
