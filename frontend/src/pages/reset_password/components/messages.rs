use leptos::*;

#[component]
pub fn InlineErrorMessage(message: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|msg| view! { <p class="text-sm text-status-error-text">{msg}</p> })
    }
}

/// Outcome of the last submit attempt, or nothing before the first one.
#[component]
pub fn StatusMessage(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty() fallback=|| ()>
            <p class="mt-4 text-sm text-fg" role="status">
                {move || message.get()}
            </p>
        </Show>
    }
}
