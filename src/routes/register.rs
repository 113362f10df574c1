//! Registration route. Every edit re-validates the profile, the submit control
//! stays disabled until the proof document is uploaded, and a successful
//! registration sends the user to the sign-in page.
//!
//! Flow Overview: upload the proof document, fill the profile, submit once;
//! the draft clears its submitting flag whatever the outcome.

use crate::{
    app_lib::paths,
    components::{AppShell, Button, DocumentUploader, SelectField, TextField, use_toasts},
    features::registration::{
        client::HttpRegistrar,
        types::{Branch, FieldInput, RegistrationField},
        workflow::{RegistrationDraft, register_profile},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();
    let draft = RwSignal::new(RegistrationDraft::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let Some(begin) = draft.try_update(RegistrationDraft::begin_submit) else {
            return;
        };
        let profile = match begin {
            Ok(profile) => profile,
            Err(blocked) => {
                blocked.report(&toasts);
                return;
            }
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let navigator = move |path: &str| navigate(path, Default::default());
            let outcome = register_profile(&profile, &HttpRegistrar, &toasts, &navigator).await;
            draft.try_update(|draft| draft.finish(&outcome));
        });
    };

    let fields = RegistrationField::ALL
        .into_iter()
        .map(|field| view! { <ProfileField field=field draft=draft /> })
        .collect_view();

    view! {
        <AppShell>
            <form class="mx-auto w-full max-w-2xl space-y-6" on:submit=on_submit novalidate>
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-slate-900">"Join the alumni directory"</h1>
                    <p class="text-sm text-slate-500">
                        "Upload a proof document first; registration unlocks once it is stored."
                    </p>
                </div>

                <DocumentUploader on_change=move |url: Option<String>| {
                    draft.update(|draft| draft.set_proof_url(url));
                } />

                <div class="grid gap-4 sm:grid-cols-2">{fields}</div>

                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || draft.with(|draft| !draft.can_submit()))
                    pending=Signal::derive(move || draft.with(RegistrationDraft::is_submitting))
                >
                    "Register"
                </Button>
                <p class="text-sm text-slate-500">
                    "Already registered? "
                    <A href=paths::LOGIN {..} class="font-medium text-blue-700 hover:underline">
                        "Sign in"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}

/// One profile input bound to the draft.
#[component]
fn ProfileField(field: RegistrationField, draft: RwSignal<RegistrationDraft>) -> impl IntoView {
    let value = Signal::derive(move || draft.with(|draft| draft.value(field).to_string()));
    let error =
        Signal::derive(move || draft.with(|draft| draft.error_for(field).map(ToString::to_string)));
    let on_edit = move |value: String| draft.update(|draft| draft.set_field(field, value));

    match field.input() {
        FieldInput::BranchSelect => {
            let options = Branch::ALL
                .into_iter()
                .map(|branch| (branch.code(), branch.label()))
                .collect::<Vec<_>>();
            view! {
                <SelectField
                    id=field.id()
                    label=field.label()
                    options=options
                    value=value
                    error=error
                    on_change=on_edit
                />
            }
            .into_any()
        }
        input => view! {
            <TextField
                id=field.id()
                label=field.label()
                input_type=html_input_type(input)
                autocomplete=field.autocomplete()
                placeholder=field.placeholder()
                value=value
                error=error
                on_input=on_edit
            />
        }
        .into_any(),
    }
}

fn html_input_type(input: FieldInput) -> &'static str {
    match input {
        FieldInput::Email => "email",
        FieldInput::Tel => "tel",
        FieldInput::Number => "number",
        FieldInput::Password => "password",
        FieldInput::Text | FieldInput::BranchSelect => "text",
    }
}
