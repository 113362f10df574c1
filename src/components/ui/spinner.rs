use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let size = if small {
        "h-4 w-4 border-2 border-white/40 border-t-white"
    } else {
        "h-7 w-7 border-4 border-blue-200 border-t-blue-600"
    };

    view! {
        <div
            class=format!("inline-block animate-spin rounded-full {size}")
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
