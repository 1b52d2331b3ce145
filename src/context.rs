//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a status message stays visible
const STATUS_MS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the character list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the character list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Status line text (errors, mostly) - read
    pub status: ReadSignal<Option<String>>,
    /// Status line text - write
    set_status: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        status: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            status: status.0,
            set_status: status.1,
        }
    }

    /// Trigger a refetch of the character list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a status message, cleared again after a few seconds
    pub fn set_status(&self, msg: impl Into<String>) {
        let msg = msg.into();
        let set_status = self.set_status;
        set_status.set(Some(msg.clone()));
        spawn_local(async move {
            TimeoutFuture::new(STATUS_MS).await;
            // Only clear if no newer message replaced this one
            set_status.update(|cur| {
                if cur.as_deref() == Some(&msg) {
                    *cur = None;
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_bumps_trigger() {
        let trigger = signal(0u32);
        let status = signal::<Option<String>>(None);
        let ctx = AppContext::new(trigger, status);

        ctx.reload();
        ctx.reload();
        assert_eq!(ctx.reload_trigger.get_untracked(), 2);
    }
}
