//! Shared layout wrapper with navigation, content container, and footer. It
//! centralizes header markup and the mobile menu toggle so routes can focus on
//! their forms. Navigation remains client-side; the backend must enforce
//! access control.

use crate::{
    app_lib::{GIT_COMMIT_HASH, paths},
    features::auth::state::use_auth,
};
use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::{components::A, hooks::use_location};

const NAV_LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let close_menu = move |_: MouseEvent| set_menu_open.set(false);
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_login = move || location.pathname.get() == paths::LOGIN;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=close_menu
                    >
                        <span class="material-symbols-outlined text-blue-700">"school"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Alumni Directory"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <Show
                                                when=on_login
                                                fallback=move || {
                                                    view! {
                                                        <A href=paths::LOGIN {..} class=NAV_LINK_CLASS on:click=close_menu>
                                                            "Sign In"
                                                        </A>
                                                    }
                                                }
                                            >
                                                <A href=paths::REGISTER {..} class=NAV_LINK_CLASS on:click=close_menu>
                                                    "Register"
                                                </A>
                                            </Show>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A href=paths::PROFILE {..} class=NAV_LINK_CLASS on:click=close_menu>
                                        "Profile"
                                    </A>
                                </li>
                                <li>
                                    <button
                                        type="button"
                                        class=NAV_LINK_CLASS
                                        on:click=move |_| {
                                            auth.clear_session();
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="border-t border-gray-200 py-4 text-center text-xs text-gray-400">
                {format!("Build {GIT_COMMIT_HASH}")}
            </footer>
        </div>
    }
}
