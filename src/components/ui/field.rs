//! Labelled form controls with an inline validation message.

use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full rounded-xl border bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

fn border_class(has_error: bool) -> String {
    let border = if has_error { "border-red-400" } else { "border-slate-200" };
    format!("{INPUT_CLASS} {border}")
}

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();

    view! {
        <div>
            <label class="block mb-2 text-sm font-medium text-slate-700" for=id>
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=move || border_class(error.with(Option::is_some))
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder.unwrap_or("")
                aria-invalid=move || error.with(Option::is_some).to_string()
                aria-describedby=described_by
                prop:value=move || value.get()
                on:input=move |event| on_input.run(event_target_value(&event))
            />
            <FieldError id=error_id error=error />
        </div>
    }
}

#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    /// `(value, label)` pairs.
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();

    view! {
        <div>
            <label class="block mb-2 text-sm font-medium text-slate-700" for=id>
                {label}
            </label>
            <select
                id=id
                name=id
                class=move || border_class(error.with(Option::is_some))
                aria-invalid=move || error.with(Option::is_some).to_string()
                aria-describedby=described_by
                prop:value=move || value.get()
                on:change=move |event| on_change.run(event_target_value(&event))
            >
                <option value="">"Select…"</option>
                {options
                    .into_iter()
                    .map(|(code, text)| view! { <option value=code>{text}</option> })
                    .collect_view()}
            </select>
            <FieldError id=error_id error=error />
        </div>
    }
}

#[component]
fn FieldError(id: String, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <p id=id class="mt-1 min-h-[1rem] text-xs text-red-600">
            {move || error.get().unwrap_or_default()}
        </p>
    }
}
