//! Login form guard: presence-only validation and double-submit protection.

use std::fmt;

/// The two required login inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub username: String,
    pub password: String,
}

/// Which input a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
}

/// A violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    MissingUsername,
    MissingPassword,
}

impl Violation {
    pub fn field(&self) -> Field {
        match self {
            Violation::MissingUsername => Field::Username,
            Violation::MissingPassword => Field::Password,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingUsername => write!(f, "El usuario es requerido."),
            Violation::MissingPassword => write!(f, "La contraseña es requerida."),
        }
    }
}

/// Every rule a submission broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` must be flagged.
    pub fn flags(&self, field: Field) -> bool {
        self.0.iter().any(|v| v.field() == field)
    }

    /// One line per broken rule, each terminated by a newline.
    pub fn message(&self) -> String {
        self.0.iter().map(|v| format!("{}\n", v)).collect()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check that both fields carry at least one non-whitespace character.
pub fn validate(fields: &LoginFields) -> Result<(), Violations> {
    let mut violations = Vec::new();
    if is_blank(&fields.username) {
        violations.push(Violation::MissingUsername);
    }
    if is_blank(&fields.password) {
        violations.push(Violation::MissingPassword);
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Violations(violations))
    }
}

const IDLE_LABEL: &str = "Ingresar";
const SUBMITTING_LABEL: &str = "Ingresando...";

/// Submit control state. Once submitting it stays disabled until the page
/// navigates away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitButton {
    #[default]
    Idle,
    Submitting,
}

impl SubmitButton {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitButton::Idle => IDLE_LABEL,
            SubmitButton::Submitting => SUBMITTING_LABEL,
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, SubmitButton::Submitting)
    }
}

/// What the page must do with one submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit; the button switches to `Submitting`.
    Proceed,
    /// Prevent submission, flag fields and alert the message.
    Block(Violations),
    /// A submission is already in flight.
    AlreadySubmitting,
}

/// Form guard state for one login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormGuard {
    button: SubmitButton,
    flagged: Vec<Field>,
}

impl FormGuard {
    pub fn button(&self) -> SubmitButton {
        self.button
    }

    /// Whether `field` currently shows the red border.
    pub fn is_flagged(&self, field: Field) -> bool {
        self.flagged.contains(&field)
    }

    /// Handle a submit event. Flags are reset on every attempt.
    pub fn submit(&mut self, fields: &LoginFields) -> SubmitDecision {
        if self.button.disabled() {
            return SubmitDecision::AlreadySubmitting;
        }
        self.flagged.clear();
        match validate(fields) {
            Ok(()) => {
                self.button = SubmitButton::Submitting;
                SubmitDecision::Proceed
            }
            Err(violations) => {
                self.flagged = violations.iter().map(Violation::field).collect();
                SubmitDecision::Block(violations)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(username: &str, password: &str) -> LoginFields {
        LoginFields {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_both_blank_blocks_and_flags_both() {
        let mut guard = FormGuard::default();
        let SubmitDecision::Block(violations) = guard.submit(&fields("", "   ")) else {
            panic!("expected block");
        };
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations.message(),
            "El usuario es requerido.\nLa contraseña es requerida.\n"
        );
        assert!(guard.is_flagged(Field::Username));
        assert!(guard.is_flagged(Field::Password));
        assert_eq!(guard.button(), SubmitButton::Idle);
    }

    #[test]
    fn test_filled_fields_proceed_and_disable_button() {
        let mut guard = FormGuard::default();
        let decision = guard.submit(&fields("ana", "secreto"));
        assert_eq!(decision, SubmitDecision::Proceed);
        assert!(guard.button().disabled());
        assert_eq!(guard.button().label(), "Ingresando...");
        assert_eq!(
            guard.submit(&fields("ana", "secreto")),
            SubmitDecision::AlreadySubmitting
        );
    }

    #[test]
    fn test_correcting_input_clears_flags() {
        let mut guard = FormGuard::default();
        guard.submit(&fields("", "x"));
        assert!(guard.is_flagged(Field::Username));
        assert!(!guard.is_flagged(Field::Password));
        assert_eq!(guard.submit(&fields("ana", "x")), SubmitDecision::Proceed);
        assert!(!guard.is_flagged(Field::Username));
    }

    #[test]
    fn test_presence_only() {
        assert!(validate(&fields(" a ", "1")).is_ok());
        let err = validate(&fields("\t", "ok")).unwrap_err();
        assert!(err.flags(Field::Username));
        assert!(!err.flags(Field::Password));
    }
}
