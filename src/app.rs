//! CharBar Frontend App
//!
//! Main application component: owns the store and app context, loads the
//! character list on mount (and on reload), and lays out the components.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CharacterBar, CharacterGrid, DetailPanel, NewCharacterForm, VotesForm};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = AppStore::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (status, set_status) = signal::<Option<String>>(None);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (status, set_status));
    provide_context(ctx);

    // Load characters on mount and whenever the trigger bumps
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match api::list().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} characters, trigger={}", loaded.len(), trigger)
                            .into(),
                    );
                    // First fetched character is selected by default
                    let first = loaded.first().map(|c| c.id);
                    store.characters().set(loaded);
                    store.selected().set(first);
                    set_load_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Load failed: {err}").into());
                    // Status line too, in case a character is already displayed
                    ctx.set_status(format!("Error loading characters: {err}"));
                    set_load_error.set(Some("Error loading characters".to_string()));
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <h1>"CharBar"</h1>

            {move || ctx.status.get().map(|msg| view! {
                <div class="status-line">{msg}</div>
            })}

            <CharacterBar />

            <main class="main-content">
                <DetailPanel load_error=load_error />
                <VotesForm />
                <NewCharacterForm />
            </main>

            <CharacterGrid />

            <p class="character-count">
                {move || format!("{} characters", store.characters().get().len())}
            </p>
        </div>
    }
}
