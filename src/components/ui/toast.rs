//! Toast notifications. `Toasts` is the browser-side `Notifier`: workflows push
//! messages into it and each toast dismisses itself after a few seconds or on
//! click.

use super::alert::alert_class;
use crate::features::effects::{NoticeKind, Notifier};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Toast {
    id: u64,
    kind: NoticeKind,
    message: String,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// No-op once the provider is gone.
    fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|toast| toast.id != id));
    }
}

impl Notifier for Toasts {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let Some(id) = self.next_id.try_update_value(|next| {
            *next += 1;
            *next
        }) else {
            return;
        };
        self.items.try_update(|items| {
            items.push(Toast {
                id,
                kind,
                message: message.to_string(),
            });
        });

        let toasts = *self;
        Timeout::new(TOAST_TTL_MS, move || toasts.dismiss(id)).forget();
    }
}

/// Provides the toast context and renders the toast stack above the page.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        {children()}
        <div
            class="pointer-events-none fixed right-4 top-4 z-50 flex w-80 max-w-[calc(100vw-2rem)] flex-col gap-2"
            aria-live="polite"
        >
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <button
                            type="button"
                            class=format!("pointer-events-auto text-left shadow-lg {}", alert_class(toast.kind))
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </button>
                    }
                }
            />
        </div>
    }
}

/// Returns the toast context or a detached one that renders nowhere.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}
