//! Landing page with entry points to sign in or register.

use crate::{app_lib::paths, components::AppShell, features::auth::state::use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <section class="mx-auto max-w-2xl space-y-6 py-10 text-center">
                <h1 class="text-3xl font-semibold text-slate-900">"College Alumni Directory"</h1>
                <p class="text-slate-500">
                    "Reconnect with classmates, find mentors, and keep your professional details current."
                </p>
                <div class="flex flex-col items-center justify-center gap-3 sm:flex-row">
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=|| {
                            view! {
                                <A
                                    href=paths::REGISTER
                                    {..}
                                    class="rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800"
                                >
                                    "Register"
                                </A>
                                <A
                                    href=paths::LOGIN
                                    {..}
                                    class="rounded-lg border border-slate-200 px-5 py-2.5 text-sm font-medium text-slate-900 hover:bg-slate-100"
                                >
                                    "Sign in"
                                </A>
                            }
                        }
                    >
                        <A
                            href=paths::PROFILE
                            {..}
                            class="rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800"
                        >
                            "Go to your profile"
                        </A>
                    </Show>
                </div>
            </section>
        </AppShell>
    }
}
