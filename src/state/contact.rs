/// Contact form state and validation
///
/// Validation runs per field when a field is committed (Enter) and for
/// the whole form on submit. Errors stay hidden until their field is
/// touched, and editing a field clears its error again.
///
/// Submission is simulated: the form hands out a ticket for each
/// pending timer and only accepts the timer message that carries the
/// current ticket, so timers from a reset form are dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const NAME_MIN_LEN: usize = 2;
const MESSAGE_MIN_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort,
    InvalidFormat,
}

impl FieldError {
    /// Text shown under the offending field
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, FieldError::Required) => "Your name is required",
            (Field::Name, _) => "Name should be at least 2 characters",
            (Field::Email, FieldError::Required) => "Email address is required",
            (Field::Email, _) => "Please enter a valid email",
            (Field::Subject, _) => "Please add a subject",
            (Field::Message, FieldError::Required) => "Please write your message",
            (Field::Message, _) => "Message should be at least 10 characters",
        }
    }
}

/// Validate one field value in isolation
pub fn validate(field: Field, value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }

    match field {
        Field::Name if trimmed.chars().count() < NAME_MIN_LEN => Some(FieldError::TooShort),
        Field::Email if !EMAIL_PATTERN.is_match(value) => Some(FieldError::InvalidFormat),
        Field::Message if trimmed.chars().count() < MESSAGE_MIN_LEN => Some(FieldError::TooShort),
        _ => None,
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    /// Waiting for the simulated send to finish
    Submitting,
    /// Showing the thank-you panel before the form resets
    Succeeded,
}

/// Identifies one pending timer
pub type Ticket = u64;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    values: [String; 4],
    errors: [Option<FieldError>; 4],
    touched: [bool; 4],
    submission: Submission,
    ticket: Ticket,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.slot()]
    }

    /// The error to display, only once the field has been touched
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.is_touched(field) {
            self.errors[field.slot()]
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.slot()]
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    /// User typed into a field. Clears that field's error.
    pub fn edit(&mut self, field: Field, value: String) {
        self.values[field.slot()] = value;
        self.errors[field.slot()] = None;
    }

    /// User left (committed) a field: mark it touched and validate it
    pub fn blur(&mut self, field: Field) {
        self.touched[field.slot()] = true;
        self.errors[field.slot()] = validate(field, self.value(field));
    }

    /// Validate every field and reveal all errors.
    /// Returns true when the form is valid.
    pub fn validate_all(&mut self) -> bool {
        for field in Field::ALL {
            self.blur(field);
        }
        self.errors.iter().all(Option::is_none)
    }

    /// Start a submission. Returns the ticket of the send timer, or None
    /// when validation failed or a submission is already under way.
    pub fn submit(&mut self) -> Option<Ticket> {
        if self.submission != Submission::Idle {
            return None;
        }
        if !self.validate_all() {
            debug!("contact form blocked by validation errors");
            return None;
        }

        info!("submitting contact form");
        self.submission = Submission::Submitting;
        Some(self.issue_ticket())
    }

    /// The send timer fired. Returns the ticket of the success timer.
    pub fn submission_settled(&mut self, ticket: Ticket) -> Option<Ticket> {
        if ticket != self.ticket || self.submission != Submission::Submitting {
            debug!(ticket, "dropping stale submission timer");
            return None;
        }

        info!("contact form sent");
        self.submission = Submission::Succeeded;
        Some(self.issue_ticket())
    }

    /// The success panel timed out: clear the form for the next message
    pub fn success_elapsed(&mut self, ticket: Ticket) {
        if ticket != self.ticket || self.submission != Submission::Succeeded {
            debug!(ticket, "dropping stale success timer");
            return;
        }

        self.reset();
    }

    /// Back to a blank form. Any pending timer becomes stale.
    pub fn reset(&mut self) {
        let ticket = self.issue_ticket();
        *self = Self {
            ticket,
            ..Self::default()
        };
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.ticket = self.ticket.wrapping_add(1);
        self.ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Ansel".into());
        form.edit(Field::Email, "ansel@example.com".into());
        form.edit(Field::Subject, "Print order".into());
        form.edit(Field::Message, "I would like a large print of Coastal Dawn.".into());
        form
    }

    #[test]
    fn test_field_validators() {
        assert_eq!(validate(Field::Name, "   "), Some(FieldError::Required));
        assert_eq!(validate(Field::Name, " A "), Some(FieldError::TooShort));
        assert_eq!(validate(Field::Name, "Al"), None);

        assert_eq!(validate(Field::Email, ""), Some(FieldError::Required));
        assert_eq!(validate(Field::Email, "a@b"), Some(FieldError::InvalidFormat));
        assert_eq!(validate(Field::Email, "a b@c.io"), Some(FieldError::InvalidFormat));
        assert_eq!(validate(Field::Email, "a@@c.io"), Some(FieldError::InvalidFormat));
        assert_eq!(validate(Field::Email, "a@c.io"), None);

        assert_eq!(validate(Field::Subject, "\t"), Some(FieldError::Required));
        assert_eq!(validate(Field::Subject, "Hi"), None);

        assert_eq!(validate(Field::Message, ""), Some(FieldError::Required));
        assert_eq!(validate(Field::Message, "  too short "), Some(FieldError::TooShort));
        assert_eq!(validate(Field::Message, "long enough"), None);
    }

    #[test]
    fn test_empty_submit_is_blocked() {
        let mut form = ContactForm::new();

        assert_eq!(form.submit(), None);
        assert_eq!(form.submission(), Submission::Idle);
        for field in Field::ALL {
            assert!(form.is_touched(field));
            assert_eq!(form.visible_error(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "A".into());
        assert_eq!(form.visible_error(Field::Name), None);

        form.blur(Field::Name);
        assert_eq!(form.visible_error(Field::Name), Some(FieldError::TooShort));
        assert_eq!(
            FieldError::TooShort.message(Field::Name),
            "Name should be at least 2 characters"
        );
    }

    #[test]
    fn test_edit_clears_error() {
        let mut form = ContactForm::new();
        form.validate_all();
        assert!(form.visible_error(Field::Email).is_some());

        form.edit(Field::Email, "x".into());
        assert_eq!(form.visible_error(Field::Email), None);
        // other fields untouched by the edit
        assert!(form.visible_error(Field::Name).is_some());
    }

    #[test]
    fn test_successful_submission_cycle() {
        let mut form = filled();

        let sent = form.submit().expect("valid form submits");
        assert_eq!(form.submission(), Submission::Submitting);
        // double submit while sending is ignored
        assert_eq!(form.submit(), None);

        let shown = form.submission_settled(sent).expect("current ticket settles");
        assert_eq!(form.submission(), Submission::Succeeded);

        form.success_elapsed(shown);
        assert_eq!(form.submission(), Submission::Idle);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_touched(field));
        }
    }

    #[test]
    fn test_reset_cancels_pending_timers() {
        let mut form = filled();
        let sent = form.submit().unwrap();

        form.reset();
        assert_eq!(form.submission_settled(sent), None);
        assert_eq!(form.submission(), Submission::Idle);
        assert_eq!(form.value(Field::Name), "");
    }

    #[test]
    fn test_stale_success_timer_ignored() {
        let mut form = filled();
        let sent = form.submit().unwrap();
        let shown = form.submission_settled(sent).unwrap();

        form.success_elapsed(sent);
        assert_eq!(form.submission(), Submission::Succeeded);

        form.success_elapsed(shown);
        assert_eq!(form.submission(), Submission::Idle);
    }
}
