use super::messages::InlineErrorMessage;
use crate::pages::reset_password::utils::email_feedback;
use leptos::*;

const INPUT_CLASS: &str = "border border-form-control-border bg-form-control-bg p-2 rounded w-full text-form-control-text text-base focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
pub fn EmailField(value: RwSignal<String>) -> impl IntoView {
    let feedback = Signal::derive(move || email_feedback(&value.get()));

    view! {
        <div class="relative">
            <label for="email" class="block text-fg font-semibold text-sm mb-1">
                "Correo electrónico"
            </label>
            <input
                id="email"
                name="email"
                type="email"
                required
                autocomplete="email"
                class=INPUT_CLASS
                placeholder="tu@email.com"
                prop:value=value
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
            <InlineErrorMessage message=feedback />
        </div>
    }
}

/// Password input with a show/hide toggle driven by `visible`.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    visible: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <label for=id class="block text-fg font-semibold text-sm mb-1">
                {label}
            </label>
            <input
                id=id
                name=id
                type=move || if visible.get() { "text" } else { "password" }
                required
                autocomplete="new-password"
                class=format!("{} pr-10", INPUT_CLASS)
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
            <button
                type="button"
                class="absolute right-3 top-9 cursor-pointer text-fg-muted"
                aria-label=move || {
                    if visible.get() { "Ocultar contraseña" } else { "Mostrar contraseña" }
                }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "🔓" } else { "🔒" }}
            </button>
        </div>
    }
}
