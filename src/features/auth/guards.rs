use crate::{app_lib::paths, features::auth::state::use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders children for signed-in users and a sign-in prompt otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    // UX-only guard; real access control must live on the API.
    view! {
        <Show
            when=move || auth.is_authenticated.get()
            fallback=|| {
                view! {
                    <div class="mx-auto max-w-md rounded-2xl border border-slate-200 bg-white p-6 text-center">
                        <p class="text-sm text-slate-600">"You need to sign in to view this page."</p>
                        <A
                            href=paths::LOGIN
                            {..}
                            class="mt-4 inline-flex items-center rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800"
                        >
                            "Sign in"
                        </A>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
