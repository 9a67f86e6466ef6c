//! Contact form with validation and simulated submission.
//!
//! Submission is simulated: the submit control is disabled and relabelled for
//! a fixed in-flight window and restored afterwards regardless of outcome, so
//! a failure can never leave the button stuck in its "sending" state.

use std::time::Duration;

use giostra_core::event::{KeyCode, KeyEvent};
use web_time::Instant;

const SUBMIT_WINDOW: Duration = Duration::from_millis(1500);

/// Focusable form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Next field in tab order, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    InFlight { until: Instant },
}

/// Contact form state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    focus: Field,
    status: SubmitStatus,
    notice: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            focus: Field::Name,
            status: SubmitStatus::Idle,
            notice: None,
        }
    }
}

impl ContactForm {
    /// Create an empty form focused on the first field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused field.
    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Value of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Label for the submit control; changes while a submission is in flight.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::InFlight { .. } => "Sending...",
        }
    }

    /// Whether a submission is in flight (submit control disabled).
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::InFlight { .. })
    }

    /// Most recent user-visible notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Validate all fields; the first problem wins.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name.");
        }
        if self.email.trim().is_empty() {
            return Err("Please enter your email address.");
        }
        if !is_plausible_email(self.email.trim()) {
            return Err("That email address does not look right.");
        }
        if self.subject.trim().is_empty() {
            return Err("Please enter a subject.");
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message.");
        }
        Ok(())
    }

    /// Attempt submission; invalid forms surface a notice instead.
    pub fn submit(&mut self, now: Instant) {
        if self.is_submitting() {
            return;
        }
        match self.validate() {
            Ok(()) => {
                self.notice = None;
                self.status = SubmitStatus::InFlight {
                    until: now + SUBMIT_WINDOW,
                };
            }
            Err(problem) => {
                self.notice = Some(problem.to_string());
            }
        }
    }

    /// Drive the in-flight window; returns `true` when anything changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let SubmitStatus::InFlight { until } = self.status
            && now >= until
        {
            self.status = SubmitStatus::Idle;
            self.notice = Some("Thanks! Your message has been sent.".to_string());
            self.clear_fields();
            return true;
        }
        false
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.focus = Field::Name;
    }

    /// Handle a key event; returns `true` when the form changed.
    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> bool {
        if self.is_submitting() {
            return false;
        }
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                true
            }
            KeyCode::Enter => {
                self.submit(now);
                true
            }
            KeyCode::Backspace => {
                self.focused_value_mut().pop();
                true
            }
            KeyCode::Char(ch) => {
                self.focused_value_mut().push(ch);
                true
            }
            _ => false,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

/// Structural email check: one `@` with a dotted domain after it.
#[must_use]
pub fn is_plausible_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        let now = Instant::now();
        for (field, text) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Subject, "Tutoring"),
            (Field::Message, "Hello!"),
        ] {
            while form.focus() != field {
                form.handle_key(&KeyEvent::new(KeyCode::Tab), now);
            }
            for ch in text.chars() {
                form.handle_key(&KeyEvent::new(KeyCode::Char(ch)), now);
            }
        }
        form
    }

    #[test]
    fn email_structural_check() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("first.last@mail.example.org"));
        assert!(!is_plausible_email("no-at-sign"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@nodot"));
        assert!(!is_plausible_email("a@.com"));
        assert!(!is_plausible_email("a@b@c.com"));
    }

    #[test]
    fn empty_form_fails_validation_with_first_problem() {
        let form = ContactForm::new();
        assert_eq!(form.validate(), Err("Please enter your name."));
    }

    #[test]
    fn filled_form_validates() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn invalid_submit_surfaces_notice_without_flight() {
        let mut form = ContactForm::new();
        form.submit(Instant::now());
        assert!(!form.is_submitting());
        assert!(form.notice().is_some());
    }

    #[test]
    fn submit_lifecycle_restores_button() {
        let t0 = Instant::now();
        let mut form = filled_form();
        form.submit(t0);
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Sending...");
        // Input is ignored while in flight.
        assert!(!form.handle_key(&KeyEvent::new(KeyCode::Char('x')), t0));
        assert!(!form.poll(t0 + Duration::from_millis(1000)));
        assert!(form.poll(t0 + Duration::from_millis(1500)));
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), "Send Message");
        assert!(form.notice().unwrap().contains("sent"));
        assert_eq!(form.value(Field::Name), "");
    }

    #[test]
    fn tab_cycles_focus() {
        let mut form = ContactForm::new();
        let now = Instant::now();
        assert_eq!(form.focus(), Field::Name);
        for expected in [Field::Email, Field::Subject, Field::Message, Field::Name] {
            form.handle_key(&KeyEvent::new(KeyCode::Tab), now);
            assert_eq!(form.focus(), expected);
        }
    }

    #[test]
    fn typing_and_backspace_edit_the_focused_field() {
        let mut form = ContactForm::new();
        let now = Instant::now();
        form.handle_key(&KeyEvent::new(KeyCode::Char('a')), now);
        form.handle_key(&KeyEvent::new(KeyCode::Char('b')), now);
        form.handle_key(&KeyEvent::new(KeyCode::Backspace), now);
        assert_eq!(form.value(Field::Name), "a");
    }
}
