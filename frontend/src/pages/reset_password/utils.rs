use regex::Regex;
use std::sync::OnceLock;

pub const ACCESS_TOKEN_PARAM: &str = "access_token";
pub const MIN_PASSWORD_LEN: usize = 12;
pub const MAX_PASSWORD_LEN: usize = 15;
pub const SPECIAL_SYMBOLS: [char; 5] = ['_', '$', '#', '%', '&'];

pub const INVALID_EMAIL_MESSAGE: &str = "Formato de correo inválido";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Las contraseñas no coinciden.";
pub const IN_PROGRESS_MESSAGE: &str = "🔄 Actualizando contraseña...";

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

/// True when some adjacent pair reads `d` then `d + 1`, e.g. "23" or "78".
pub fn has_sequential_digits(password: &str) -> bool {
    let digits: Vec<Option<u32>> = password.chars().map(|c| c.to_digit(10)).collect();
    digits
        .windows(2)
        .any(|pair| matches!(pair, [Some(a), Some(b)] if *b == a + 1))
}

/// Snapshot of everything the reset form holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub token: String,
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
    pub password_visible: bool,
    pub confirm_visible: bool,
    pub submitting: bool,
    pub message: String,
}

impl FormState {
    pub fn validate(&self) -> ValidationResult {
        ValidationResult::derive(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub email_valid: bool,
    pub length_ok: bool,
    pub max_length_ok: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_special: bool,
    pub no_sequential_digits: bool,
    pub passwords_match: bool,
    pub can_submit: bool,
}

impl ValidationResult {
    pub fn derive(form: &FormState) -> Self {
        let password = form.new_password.as_str();
        let len = password.chars().count();
        let mut result = Self {
            email_valid: is_valid_email(&form.email),
            length_ok: len >= MIN_PASSWORD_LEN,
            max_length_ok: len <= MAX_PASSWORD_LEN,
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_special: password.chars().any(|c| SPECIAL_SYMBOLS.contains(&c)),
            no_sequential_digits: !has_sequential_digits(password),
            passwords_match: form.new_password == form.confirm_password,
            can_submit: false,
        };
        result.can_submit = result.email_valid
            && result.strength_ok()
            && result.passwords_match
            && !password.is_empty()
            && !form.submitting;
        result
    }

    /// The strength check: all six password rules at once.
    pub fn strength_ok(&self) -> bool {
        self.rules().iter().all(|(_, passed)| *passed)
    }

    pub fn rules(&self) -> [(PasswordRule, bool); 6] {
        [
            (PasswordRule::MinLength, self.length_ok),
            (PasswordRule::MaxLength, self.max_length_ok),
            (PasswordRule::Uppercase, self.has_upper),
            (PasswordRule::Lowercase, self.has_lower),
            (PasswordRule::Symbol, self.has_special),
            (PasswordRule::NoSequentialDigits, self.no_sequential_digits),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    MaxLength,
    Uppercase,
    Lowercase,
    Symbol,
    NoSequentialDigits,
}

impl PasswordRule {
    pub fn label(self) -> &'static str {
        match self {
            PasswordRule::MinLength => "Mínimo 12 caracteres",
            PasswordRule::MaxLength => "Máximo 15 caracteres",
            PasswordRule::Uppercase => "Al menos una mayúscula",
            PasswordRule::Lowercase => "Al menos una minúscula",
            PasswordRule::Symbol => "Al menos un símbolo (_ $ # % &)",
            PasswordRule::NoSequentialDigits => "No números consecutivos",
        }
    }
}

/// Inline email feedback; nothing is shown until the user has typed something.
pub fn email_feedback(email: &str) -> Option<&'static str> {
    if email.is_empty() || is_valid_email(email) {
        None
    } else {
        Some(INVALID_EMAIL_MESSAGE)
    }
}

pub fn mismatch_feedback(new_password: &str, confirm_password: &str) -> Option<&'static str> {
    if !confirm_password.is_empty() && new_password != confirm_password {
        Some(PASSWORD_MISMATCH_MESSAGE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    const STRONG: &str = "Abcdefg_1357";

    fn filled(email: &str, password: &str, confirm: &str) -> FormState {
        FormState {
            token: "tok".into(),
            email: email.into(),
            new_password: password.into(),
            confirm_password: confirm.into(),
            ..FormState::default()
        }
    }

    fn strength(password: &str) -> bool {
        filled("", password, "").validate().strength_ok()
    }

    #[wasm_bindgen_test]
    fn email_pattern_accepts_and_rejects() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  user@example.com  "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[wasm_bindgen_test]
    fn sequential_digit_scan() {
        assert!(has_sequential_digits("1234"));
        assert!(has_sequential_digits("ab78cd"));
        assert!(!has_sequential_digits("1357"));
        assert!(!has_sequential_digits("21"));
        assert!(!has_sequential_digits("55"));
        assert!(!has_sequential_digits("9a0"));
        assert!(!has_sequential_digits("90"));
        assert!(!has_sequential_digits("1a2"));
        assert!(!has_sequential_digits(""));
    }

    #[wasm_bindgen_test]
    fn strong_password_passes_every_rule() {
        let result = filled("user@example.com", STRONG, STRONG).validate();
        assert!(result.rules().iter().all(|(_, ok)| *ok));
        assert!(result.strength_ok());
    }

    #[wasm_bindgen_test]
    fn removing_any_single_property_fails_strength() {
        assert!(strength("Abcdefg_1357"));
        assert!(strength("Abcdefgh_13579"));
        // too short / too long
        assert!(!strength("Abcdefg_135"));
        assert!(!strength("Abcdefghijk_13579"));
        // no upper / no lower
        assert!(!strength("abcdefg_1357"));
        assert!(!strength("ABCDEFG_1357"));
        // no symbol
        assert!(!strength("Abcdefgh1357"));
        assert!(!strength("Abcdefg!1357"));
        // ascending pair
        assert!(!strength("Abcdefg_1235"));
    }

    #[wasm_bindgen_test]
    fn each_symbol_counts_as_special() {
        for symbol in SPECIAL_SYMBOLS {
            let password = format!("Abcdefg{}1357", symbol);
            assert!(strength(&password), "{} should be accepted", password);
        }
    }

    #[wasm_bindgen_test]
    fn length_bounds_are_inclusive() {
        let twelve = filled("", "Abcdefghi_13", "").validate();
        assert!(twelve.length_ok && twelve.max_length_ok);
        let fifteen = filled("", "Abcdefghijkl_13", "").validate();
        assert!(fifteen.length_ok && fifteen.max_length_ok);
        let sixteen = filled("", "Abcdefghijklm_13", "").validate();
        assert!(sixteen.length_ok);
        assert!(!sixteen.max_length_ok);
    }

    #[test]
    fn submit_gate_requires_every_condition() {
        assert!(filled("user@example.com", STRONG, STRONG).validate().can_submit);

        assert!(!filled("user@example", STRONG, STRONG).validate().can_submit);
        assert!(!filled("user@example.com", "weakpassword", "weakpassword")
            .validate()
            .can_submit);
        assert!(!filled("user@example.com", STRONG, "Abcdefg_1359").validate().can_submit);
        assert!(!filled("user@example.com", "", "").validate().can_submit);

        let mut in_flight = filled("user@example.com", STRONG, STRONG);
        in_flight.submitting = true;
        assert!(!in_flight.validate().can_submit);
    }

    #[test]
    fn submit_gate_ignores_token_and_visibility() {
        let mut form = filled("user@example.com", STRONG, STRONG);
        form.token.clear();
        form.password_visible = true;
        assert!(form.validate().can_submit);
    }

    #[test]
    fn eleven_character_password_disables_submit() {
        let result = filled("user@example.com", "Abcdefg_135", "Abcdefg_135").validate();
        assert!(!result.length_ok);
        assert!(!result.can_submit);
    }

    #[test]
    fn confirmation_match_is_case_sensitive() {
        let result = filled("user@example.com", STRONG, "abcdefg_1357").validate();
        assert!(!result.passwords_match);
    }

    #[test]
    fn feedback_messages_wait_for_input() {
        assert_eq!(email_feedback(""), None);
        assert_eq!(email_feedback("a@b.co"), None);
        assert_eq!(email_feedback("a@b"), Some(INVALID_EMAIL_MESSAGE));

        assert_eq!(mismatch_feedback(STRONG, ""), None);
        assert_eq!(mismatch_feedback(STRONG, STRONG), None);
        assert_eq!(mismatch_feedback(STRONG, "x"), Some(PASSWORD_MISMATCH_MESSAGE));
    }

    #[test]
    fn rule_labels_are_distinct() {
        let result = ValidationResult::default();
        let labels: std::collections::HashSet<&str> =
            result.rules().iter().map(|(rule, _)| rule.label()).collect();
        assert_eq!(labels.len(), 6);
    }
}
