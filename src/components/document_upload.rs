//! Proof document picker with upload progress and preview. It owns the upload
//! sub-controller state and reports the stored URL (or `None`) to the parent
//! through `on_change`.

use crate::{
    components::{Spinner, use_toasts},
    features::upload::{
        client,
        state::DocumentUpload,
        types::{ACCEPTED_TYPES, PreviewKind, UploadResult, UploadedDocument, check_file},
    },
};
use leptos::{ev::Event, prelude::*, task::spawn_local};
use web_sys::HtmlInputElement;

#[component]
pub fn DocumentUploader(#[prop(into)] on_change: Callback<Option<String>>) -> impl IntoView {
    let toasts = use_toasts();
    let upload = RwSignal::new(DocumentUpload::new());
    let report = move |result: Option<UploadResult>| {
        if let Some(result) = result {
            on_change.run(result.url);
        }
    };

    let on_pick = move |event: Event| {
        let input = event_target::<HtmlInputElement>(&event);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Lets the same file be picked again after a failure.
        input.set_value("");

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size() as u64;
        if let Err(rejection) = check_file(&file.type_(), size) {
            report(upload.try_update(|state| state.reject(rejection, &toasts)));
            return;
        }

        upload.update(DocumentUpload::begin);
        spawn_local(async move {
            let result = match client::upload_document(&file).await {
                Ok(response) => upload.try_update(|state| state.complete(response, &toasts)),
                Err(err) => upload.try_update(|state| state.fail(&err, &toasts)),
            };
            report(result);
        });
    };

    let on_remove = move |_| report(upload.try_update(DocumentUpload::remove));
    let document = move || upload.with(|state| state.document().cloned());

    view! {
        <div class="rounded-xl border border-dashed border-slate-300 p-4">
            <p class="text-sm font-medium text-slate-700">"Proof document"</p>
            <p class="mt-1 text-xs text-slate-500">
                "Upload your marksheet, transcript, or degree certificate (image or PDF, up to 4 MB)."
            </p>
            <Show
                when=move || document().is_some()
                fallback=move || {
                    view! {
                        <label class="mt-3 flex items-center gap-3 text-sm text-slate-600">
                            <input
                                type="file"
                                accept=ACCEPTED_TYPES
                                class="block w-full text-sm file:mr-3 file:rounded-lg file:border-0 file:bg-blue-50 file:px-4 file:py-2 file:text-blue-700"
                                disabled=move || upload.with(DocumentUpload::is_loading)
                                on:change=on_pick
                            />
                            <Show when=move || upload.with(DocumentUpload::is_loading)>
                                <Spinner />
                            </Show>
                        </label>
                    }
                }
            >
                {move || document().map(|document| view! { <DocumentPreview document=document /> })}
                <button
                    type="button"
                    class="mt-3 text-sm font-medium text-red-600 hover:underline"
                    on:click=on_remove
                >
                    "Remove document"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn DocumentPreview(document: UploadedDocument) -> impl IntoView {
    let name = document.name.clone().unwrap_or_else(|| "Proof document".to_string());
    let url = document.url.clone();

    match document.preview() {
        PreviewKind::Image => view! {
            <img src=url alt=name class="mt-3 max-h-64 rounded-lg border border-slate-200 object-contain" />
        }
        .into_any(),
        PreviewKind::Pdf => view! {
            <div class="mt-3 space-y-2">
                <iframe src=url.clone() title=name class="h-64 w-full rounded-lg border border-slate-200"></iframe>
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-sm font-medium text-blue-700 hover:underline"
                >
                    "Open full document"
                </a>
            </div>
        }
        .into_any(),
        PreviewKind::Link => view! {
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="mt-3 inline-block text-sm font-medium text-blue-700 hover:underline"
            >
                {format!("View document ({name})")}
            </a>
        }
        .into_any(),
    }
}
