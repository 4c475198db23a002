use super::{
    repository::ResetPasswordRepository,
    utils::{FormState, ValidationResult, ACCESS_TOKEN_PARAM, IN_PROGRESS_MESSAGE},
};
use crate::api::{ApiClient, ResetError, ResetPasswordRequest};
use leptos::*;
use leptos_router::use_query_map;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ResetFormState {
    pub token: RwSignal<String>,
    pub email: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub password_visible: RwSignal<bool>,
    pub confirm_visible: RwSignal<bool>,
    pub message: RwSignal<String>,
}

impl ResetFormState {
    fn new(token: String) -> Self {
        Self {
            token: create_rw_signal(token),
            email: create_rw_signal(String::new()),
            new_password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            password_visible: create_rw_signal(false),
            confirm_visible: create_rw_signal(false),
            message: create_rw_signal(String::new()),
        }
    }

    /// Tracked read of every field, so callers re-run whenever any of them changes.
    pub fn snapshot(&self, submitting: bool) -> FormState {
        FormState {
            token: self.token.get(),
            email: self.email.get(),
            new_password: self.new_password.get(),
            confirm_password: self.confirm_password.get(),
            password_visible: self.password_visible.get(),
            confirm_visible: self.confirm_visible.get(),
            submitting,
            message: self.message.get(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub form: ResetFormState,
    pub submitting: ReadSignal<bool>,
    pub validation: Signal<ValidationResult>,
    pub submit_action: Action<ResetPasswordRequest, Result<String, ResetError>>,
}

impl ResetPasswordViewModel {
    /// Handles a click on the submit button. Closed gate means nothing happens;
    /// a missing token is reported without touching the network.
    pub fn submit(&self) {
        if !self.validation.get_untracked().can_submit {
            return;
        }
        let token = self.form.token.get_untracked();
        if let Err(err) = require_token(&token) {
            log::warn!("password reset refused: {}", err.code());
            self.form.message.set(err.to_string());
            return;
        }
        self.form.message.set(IN_PROGRESS_MESSAGE.to_string());
        self.submit_action.dispatch(ResetPasswordRequest {
            email: self.form.email.get_untracked(),
            token,
            new_password: self.form.new_password.get_untracked(),
        });
    }
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let query = use_query_map();
    // Read once on mount; later URL changes do not replace the token.
    let token = query
        .with_untracked(|params| params.get(ACCESS_TOKEN_PARAM).cloned())
        .unwrap_or_default();
    build_view_model(api, token)
}

pub(super) fn build_view_model(api: ApiClient, token: String) -> ResetPasswordViewModel {
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));
    let form = ResetFormState::new(token);
    let message = form.message;

    let submit_action = create_action(move |request: &ResetPasswordRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move {
            let outcome = submit_reset(&repo, request).await;
            if let Err(err) = &outcome {
                log::warn!("password reset failed: {}", err.code());
            }
            message.set(outcome_message(&outcome));
            outcome
        }
    });

    let submitting = submit_action.pending();
    let validation = Signal::derive(move || form.snapshot(submitting.get()).validate());

    ResetPasswordViewModel {
        form,
        submitting,
        validation,
        submit_action,
    }
}

fn require_token(token: &str) -> Result<(), ResetError> {
    if token.is_empty() {
        Err(ResetError::MissingToken)
    } else {
        Ok(())
    }
}

/// One reset attempt: the success message from the server (or its default),
/// or the reason it failed.
pub(super) async fn submit_reset(
    repo: &ResetPasswordRepository,
    request: ResetPasswordRequest,
) -> Result<String, ResetError> {
    require_token(&request.token)?;
    let response = repo.reset_password(&request).await?;
    Ok(response.into_message())
}

pub(super) fn outcome_message(outcome: &Result<String, ResetError>) -> String {
    match outcome {
        Ok(message) => message.clone(),
        Err(err) => err.to_string(),
    }
}
