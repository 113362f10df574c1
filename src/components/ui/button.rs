use super::Spinner;
use leptos::prelude::*;

/// Primary action button. While `pending` is set it shows a small spinner and
/// stays disabled.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] pending: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let inactive = move || disabled.get() || pending.get();

    view! {
        <button
            type=button_type
            class="inline-flex w-full items-center justify-center gap-2 rounded-lg bg-blue-700 px-5 py-2.5 text-center text-sm font-medium text-white hover:bg-blue-800 focus:outline-none focus:ring-4 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            class:cursor-not-allowed=inactive
            class:opacity-60=inactive
            disabled=inactive
            aria-busy=move || pending.get().to_string()
        >
            <Show when=move || pending.get()>
                <Spinner small=true />
            </Show>
            {children()}
        </button>
    }
}
