use std::{
    fmt,
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use thiserror::Error;

use crate::notify::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadySubmitting,
}

/// Cancellation token tied to the lifetime of the component that owns a form.
#[derive(Debug, Clone, Default)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn end(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        !self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    submitting: bool,
}

/// What the form held when it was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Delivered(ContactDraft),
    Cancelled,
}

#[derive(Debug)]
#[must_use = "a pending submission does nothing until settled"]
pub struct PendingSubmission {
    draft: ContactDraft,
    lifetime: Lifetime,
}

impl PendingSubmission {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Waits out `delay`, then reports whether the owner is still around to receive the result.
    pub async fn settle<D: Future<Output = ()>>(self, delay: D) -> Settled {
        delay.await;
        if self.lifetime.is_alive() {
            Settled::Delivered(self.draft)
        } else {
            log::debug!("contact submission settled after unmount, dropping result");
            Settled::Cancelled
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        match self.email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    /// Validates the form and marks it as sending. Fields stay populated until the
    /// returned submission settles and is applied.
    pub fn begin_submit(&mut self, lifetime: &Lifetime) -> Result<PendingSubmission, ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        self.validate()?;
        self.submitting = true;
        Ok(PendingSubmission {
            draft: ContactDraft {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                subject: self.subject.trim().to_string(),
                message: self.message.clone(),
            },
            lifetime: lifetime.clone(),
        })
    }

    pub fn apply(&mut self, settled: &Settled) -> Option<Toast> {
        match settled {
            Settled::Delivered(draft) => {
                log::debug!("simulated delivery of message from {}", draft.email);
                *self = Self::default();
                Some(Toast::new(
                    "Message sent!",
                    "Thank you for reaching out. I'll get back to you soon.",
                ))
            }
            Settled::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SUBMIT_DELAY;
    use std::time::Duration;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada".into());
        form.set(Field::Email, "ada@example.com".into());
        form.set(Field::Subject, "Hello".into());
        form.set(Field::Message, "Let's talk.".into());
        form
    }

    #[test]
    fn every_field_is_required() {
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            let mut form = filled();
            form.set(field, "   ".into());
            assert_eq!(form.validate(), Err(ContactError::MissingField(field)));
            assert!(form.begin_submit(&Lifetime::new()).is_err());
            assert!(!form.is_submitting());
        }
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled();
        form.set(Field::Email, "ada.example.com".into());
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
        form.set(Field::Email, "@example.com".into());
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn second_submit_is_rejected_while_in_flight() {
        let mut form = filled();
        let lifetime = Lifetime::new();
        let pending = form.begin_submit(&lifetime).unwrap();
        assert!(form.is_submitting());
        assert_eq!(pending.draft().name, "Ada");
        assert!(matches!(
            form.begin_submit(&lifetime),
            Err(ContactError::AlreadySubmitting)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn cleared_only_after_delay() {
        let mut form = filled();
        let lifetime = Lifetime::new();
        let pending = form.begin_submit(&lifetime).unwrap();

        let task = tokio::spawn(pending.settle(tokio::time::sleep(SUBMIT_DELAY)));

        tokio::time::advance(SUBMIT_DELAY - Duration::from_millis(1)).await;
        assert!(!task.is_finished());
        assert_eq!(form, filled_submitting());

        tokio::time::advance(Duration::from_millis(1)).await;
        let settled = task.await.unwrap();
        let toast = form.apply(&settled).expect("delivery should produce a toast");
        assert_eq!(toast.title, "Message sent!");
        assert!(!toast.is_error());
        assert_eq!(form, ContactForm::default());
        assert!(!form.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_result() {
        let mut form = filled();
        let lifetime = Lifetime::new();
        let pending = form.begin_submit(&lifetime).unwrap();
        lifetime.end();

        let settled = pending.settle(tokio::time::sleep(SUBMIT_DELAY)).await;
        assert_eq!(settled, Settled::Cancelled);
        assert_eq!(form.apply(&settled), None);
        assert_eq!(form.name, "Ada");
    }

    fn filled_submitting() -> ContactForm {
        ContactForm {
            submitting: true,
            ..filled()
        }
    }
}
