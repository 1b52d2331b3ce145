//! New Character Form Component
//!
//! Form for creating new characters. Empty name or image URL is rejected
//! client-side with no request; on success the new character is appended and
//! becomes the selection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::store::{
    store_add_character, use_app_store, validate_new_character, AppStateStoreFields,
};

/// Form for creating new characters
#[component]
pub fn NewCharacterForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (image, set_image) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some((name, image)) = validate_new_character(&name.get(), &image.get()) else {
            return;
        };

        spawn_local(async move {
            match api::create(&name, &image).await {
                Ok(created) => {
                    let id = created.id;
                    store_add_character(&store, created);
                    store.selected().set(Some(id));
                    set_name.set(String::new());
                    set_image.set(String::new());
                }
                Err(err) => ctx.set_status(format!("Error adding character: {err}")),
            }
        });
    };

    view! {
        <form class="character-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Image URL"
                prop:value=move || image.get()
                on:input=move |ev| set_image.set(event_target_value(&ev))
            />
            <button type="submit">"Add character"</button>
        </form>
    }
}
