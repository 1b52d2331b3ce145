//! Character Card Components
//!
//! Grid of cards with a like counter and a remove button. Likes and removal
//! are display-local only and never touch the server.

use leptos::prelude::*;

use crate::models::Character;
use crate::store::{
    store_remove_character, store_select_character, use_app_store, AppStateStoreFields,
};

/// Single character card
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let store = use_app_store();
    let id = character.id;

    // Display-local like counter, reset on re-render
    let (likes, set_likes) = signal(0u32);

    view! {
        <div class="character-card">
            <img
                src=character.image.clone()
                alt=character.name.clone()
                on:click=move |_| store_select_character(&store, id)
            />
            <h3>{character.name.clone()}</h3>
            <div class="card-actions">
                <button class="like-btn" on:click=move |_| set_likes.update(|n| *n += 1)>
                    {move || format!("♥ {}", likes.get())}
                </button>
                <button class="remove-btn" on:click=move |_| store_remove_character(&store, id)>
                    "×"
                </button>
            </div>
        </div>
    }
}

/// Grid of all loaded characters
#[component]
pub fn CharacterGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="character-grid">
            <For
                each=move || store.characters().get()
                key=|c| c.id
                children=move |c| view! { <CharacterCard character=c /> }
            />
        </div>
    }
}
