//! Alert banners for inline and toast messages. Messages must be safe to render
//! and should never include secrets.

use crate::features::effects::NoticeKind;
use leptos::prelude::*;

pub(crate) fn alert_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
        }
        NoticeKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
        }
        NoticeKind::Info => {
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: NoticeKind, message: String) -> impl IntoView {
    let role = if kind == NoticeKind::Error { "alert" } else { "status" };

    view! { <div class=alert_class(kind) role=role>{message}</div> }
}
