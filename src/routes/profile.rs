//! Post-sign-in destination showing the in-memory session.

use crate::{
    components::{Alert, AppShell},
    features::{
        auth::{RequireAuth, state::use_auth},
        effects::NoticeKind,
    },
};
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let email = move || {
        auth.session
            .with(|session| session.as_ref().map(|session| session.email.clone()))
            .unwrap_or_default()
    };
    let role = move || {
        auth.session
            .with(|session| session.as_ref().map(|session| session.role.as_str()))
            .unwrap_or_default()
    };

    view! {
        <AppShell>
            <RequireAuth>
                <div class="mx-auto max-w-md space-y-4 rounded-2xl border border-slate-200 bg-white p-6">
                    <h1 class="text-2xl font-semibold text-slate-900">"Your profile"</h1>
                    <dl class="space-y-2 text-sm">
                        <div class="flex justify-between">
                            <dt class="text-slate-500">"Email"</dt>
                            <dd class="font-medium text-slate-900">{email}</dd>
                        </div>
                        <div class="flex justify-between">
                            <dt class="text-slate-500">"Role"</dt>
                            <dd class="font-medium capitalize text-slate-900">{role}</dd>
                        </div>
                    </dl>
                    <Alert
                        kind=NoticeKind::Info
                        message="Directory listings appear once the alumni office verifies your proof document.".to_string()
                    />
                </div>
            </RequireAuth>
        </AppShell>
    }
}
