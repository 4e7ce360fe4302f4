//! Demo and sales contact requests. Nothing is transmitted: the address is
//! validated, logged and acknowledged with a toast.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::toast::Notice;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    Demo,
    Sales,
}

impl LeadKind {
    pub fn prompt(&self) -> &'static str {
        match self {
            LeadKind::Demo => "Enter your email address to schedule a demo:",
            LeadKind::Sales => "Enter your email address to contact our sales team:",
        }
    }

    pub fn confirmation(&self) -> &'static str {
        match self {
            LeadKind::Demo => {
                "Demo request submitted! Our Ayenyo team will contact you within 24 hours."
            }
            LeadKind::Sales => {
                "Sales contact request submitted! Our Ayenyo sales team will call within 2 hours."
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LeadKind::Demo => "demo",
            LeadKind::Sales => "sales contact",
        }
    }
}

/// Asks the visitor for an address. `None` means the dialog was dismissed.
#[cfg_attr(test, mockall::automock)]
pub trait EmailPrompt {
    fn ask(&self, message: &str) -> Option<String>;
}

/// Runs one lead-capture interaction and returns the toast to show, if any.
///
/// A dismissed dialog and an empty answer are both silent.
pub fn request_lead(kind: LeadKind, prompt: &dyn EmailPrompt) -> Option<Notice> {
    let email = prompt.ask(kind.prompt())?;
    if email.is_empty() {
        return None;
    }

    if validate_email(&email) {
        log::info!("Ayenyo {} requested for: {}", kind.label(), email);
        Some(Notice::success(kind.confirmation()))
    } else {
        log::warn!("Rejected {} request with malformed address", kind.label());
        Some(Notice::error(INVALID_EMAIL_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;
    use mockall::predicate::eq;

    fn answering(message: &'static str, answer: Option<&'static str>) -> MockEmailPrompt {
        let mut prompt = MockEmailPrompt::new();
        prompt
            .expect_ask()
            .with(eq(message))
            .times(1)
            .returning(move |_| answer.map(str::to_string));
        prompt
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("jane@clinic.org"));
        assert!(validate_email("a.b+c@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "jane", "jane@clinic", "@clinic.org", "jane doe@clinic.org", "a@@b.c"] {
            assert!(!validate_email(email), "{email}");
        }
    }

    #[test]
    fn demo_request_with_valid_email_confirms() {
        let prompt = answering(
            "Enter your email address to schedule a demo:",
            Some("doc@hospital.com"),
        );
        let notice = request_lead(LeadKind::Demo, &prompt).unwrap();
        assert_eq!(notice.kind, ToastKind::Success);
        assert_eq!(
            notice.message,
            "Demo request submitted! Our Ayenyo team will contact you within 24 hours."
        );
    }

    #[test]
    fn sales_request_with_invalid_email_warns() {
        let prompt = answering(
            "Enter your email address to contact our sales team:",
            Some("not-an-email"),
        );
        let notice = request_lead(LeadKind::Sales, &prompt).unwrap();
        assert_eq!(notice, Notice::error(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn dismissed_or_empty_prompt_is_silent() {
        let dismissed = answering("Enter your email address to schedule a demo:", None);
        assert_eq!(request_lead(LeadKind::Demo, &dismissed), None);

        let empty = answering("Enter your email address to contact our sales team:", Some(""));
        assert_eq!(request_lead(LeadKind::Sales, &empty), None);
    }
}
