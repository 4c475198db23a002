use crate::pages::reset_password::utils::ValidationResult;
use leptos::*;

#[component]
pub fn PasswordRuleList(validation: Signal<ValidationResult>) -> impl IntoView {
    view! {
        <ul class="text-sm text-left mt-2 space-y-1">
            {move || {
                validation
                    .get()
                    .rules()
                    .into_iter()
                    .map(|(rule, passed)| {
                        let class = if passed {
                            "text-status-success-text"
                        } else {
                            "text-status-error-text"
                        };
                        view! {
                            <li class=class data-passed=passed.to_string()>
                                {format!("• {}", rule.label())}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::reset_password::utils::FormState;
    use crate::test_support::ssr::render_to_string;

    fn render_for(password: &str) -> String {
        let form = FormState {
            new_password: password.to_string(),
            ..FormState::default()
        };
        let result = form.validate();
        render_to_string(move || {
            view! { <PasswordRuleList validation=Signal::derive(move || result) /> }
        })
    }

    #[test]
    fn all_rules_pass_for_strong_password() {
        let html = render_for("Abcdefg_1357");
        assert_eq!(html.matches("data-passed=\"true\"").count(), 6);
        assert!(html.contains("Mínimo 12 caracteres"));
        assert!(html.contains("No números consecutivos"));
    }

    #[test]
    fn failing_rules_are_marked() {
        let html = render_for("abc12");
        // only the max-length and lowercase rules hold
        assert_eq!(html.matches("data-passed=\"true\"").count(), 2);
        assert_eq!(html.matches("data-passed=\"false\"").count(), 4);
    }
}
