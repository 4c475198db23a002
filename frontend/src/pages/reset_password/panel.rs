use super::{
    components::{
        fields::{EmailField, PasswordField},
        messages::{InlineErrorMessage, StatusMessage},
        rules::PasswordRuleList,
    },
    utils::mismatch_feedback,
    view_model::{use_reset_password_view_model, ResetPasswordViewModel},
};
use leptos::*;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    view! { <ResetPasswordForm vm=vm /> }
}

#[component]
pub fn ResetPasswordForm(vm: ResetPasswordViewModel) -> impl IntoView {
    let form = vm.form;
    let validation = vm.validation;
    let submitting = vm.submitting;
    let mismatch =
        Signal::derive(move || mismatch_feedback(&form.new_password.get(), &form.confirm_password.get()));

    view! {
        <main class="flex min-h-screen flex-col items-center justify-center p-6 bg-surface">
            <div class="bg-surface-elevated p-6 rounded-lg shadow-lg max-w-md w-full text-center">
                <h1 class="text-2xl font-bold mb-2 text-action-primary-bg">
                    "Restablecer contraseña"
                </h1>
                <p class="mb-4 text-fg-muted">"Crea una nueva contraseña segura."</p>

                <form
                    class="flex flex-col gap-4 text-left"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <EmailField value=form.email />
                    <PasswordField
                        id="new_password"
                        label="Nueva contraseña"
                        placeholder="Nueva Contraseña"
                        value=form.new_password
                        visible=form.password_visible
                    />
                    <PasswordField
                        id="confirm_password"
                        label="Confirmar contraseña"
                        placeholder="Confirmar Contraseña"
                        value=form.confirm_password
                        visible=form.confirm_visible
                    />

                    <PasswordRuleList validation=validation />
                    <InlineErrorMessage message=mismatch />

                    <button
                        type="submit"
                        disabled=move || !validation.get().can_submit
                        class=move || {
                            if validation.get().can_submit {
                                "py-2 px-4 rounded font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                            } else {
                                "py-2 px-4 rounded font-semibold text-action-primary-text bg-action-disabled-bg cursor-not-allowed"
                            }
                        }
                    >
                        {move || if submitting.get() { "Actualizando..." } else { "Cambiar contraseña" }}
                    </button>
                </form>

                <StatusMessage message=form.message />
            </div>
        </main>
    }
}
