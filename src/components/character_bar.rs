//! Character Bar Component
//!
//! Clickable list of character names; clicking selects the character.

use leptos::prelude::*;

use crate::store::{store_select_character, use_app_store, AppStateStoreFields};

/// Character bar component
#[component]
pub fn CharacterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="character-bar">
            <For
                each=move || store.characters().get()
                key=|c| c.id
                children=move |c| {
                    let id = c.id;
                    let is_active = move || store.selected().get() == Some(id);
                    let entry_class = move || {
                        if is_active() { "bar-entry active" } else { "bar-entry" }
                    };

                    view! {
                        <button
                            class=entry_class
                            on:click=move |_| store_select_character(&store, id)
                        >
                            {c.name.clone()}
                        </button>
                    }
                }
            />
        </nav>
    }
}
