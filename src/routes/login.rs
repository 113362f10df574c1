//! Sign-in route. Field errors render inline; provider rejections and transport
//! failures surface as toasts from the sign-in workflow.

use crate::{
    app_lib::paths,
    components::{AppShell, Button, TextField, use_toasts},
    features::{
        auth::{
            client::HttpAuthenticator,
            login::{LoginOutcome, submit_login},
            state::use_auth,
            types::{LoginField, LoginForm},
        },
        forms::FieldErrors,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::<LoginField>::new());

    let login_action = Action::new_local(move |input: &LoginForm| {
        let input = input.clone();
        let navigate = navigate.clone();
        async move {
            let navigator = move |path: &str| navigate(path, Default::default());
            submit_login(&input, &HttpAuthenticator, &auth, &toasts, &navigator).await
        }
    });

    Effect::new(move |_| {
        if let Some(LoginOutcome::Invalid(field_errors)) = login_action.value().get() {
            errors.set(field_errors);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        errors.set(FieldErrors::new());
        login_action.dispatch(form.get_untracked());
    };

    let error_for = move |field: LoginField| {
        Signal::derive(move || errors.with(|errors| errors.get(field).map(ToString::to_string)))
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto space-y-4" on:submit=on_submit novalidate>
                <h1 class="text-2xl font-semibold text-slate-900">"Alumni sign in"</h1>
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@college.edu"
                    value=Signal::derive(move || form.with(|form| form.email.clone()))
                    error=error_for(LoginField::Email)
                    on_input=move |value: String| form.update(|form| form.email = value)
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=Signal::derive(move || form.with(|form| form.password.clone()))
                    error=error_for(LoginField::Password)
                    on_input=move |value: String| form.update(|form| form.password = value)
                />
                <Button button_type="submit" pending=login_action.pending()>
                    "Sign in"
                </Button>
                <p class="text-sm text-slate-500">
                    "New here? "
                    <A href=paths::REGISTER {..} class="font-medium text-blue-700 hover:underline">
                        "Register as an alumnus"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
