use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::config::SUBMIT_LATENCY_MS;

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("subscription backend rejected the address")]
    Rejected,
    #[error("subscription backend unavailable")]
    Unavailable,
}

/// Where accepted addresses are handed off.
///
/// The page has no real backend; [`SimulatedSink`] stands in for one.
pub trait SubscriptionSink {
    fn deliver(&mut self, email: &str) -> Result<(), SubscribeError>;
}

/// Stub backend: pretends to work for the configured latency, then accepts
pub struct SimulatedSink;

impl SubscriptionSink for SimulatedSink {
    fn deliver(&mut self, _email: &str) -> Result<(), SubscribeError> {
        thread::sleep(Duration::from_millis(SUBMIT_LATENCY_MS));
        Ok(())
    }
}

/// Outcome of one form submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    MissingAddress,
    InvalidAddress,
    Failed,
}

impl SubmitOutcome {
    /// User-facing form message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Accepted => "✓ Thanks! We'll notify you when we launch.",
            Self::MissingAddress => "Please enter your email address",
            Self::InvalidAddress => "Please enter a valid email address",
            Self::Failed => "Something went wrong. Please try again.",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Accepted)
    }
}

/// Accepts addresses of the shape `local@domain.tld`: exactly one `@`,
/// non-empty local part, a dot inside the domain with something on both
/// sides, and no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
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

/// Validates submissions and forwards the good ones to the sink
pub struct SubscribeForm<S> {
    sink: S,
}

impl<S: SubscriptionSink> SubscribeForm<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        let email = input.trim();

        if email.is_empty() {
            return SubmitOutcome::MissingAddress;
        }
        if !validate_email(email) {
            return SubmitOutcome::InvalidAddress;
        }

        match self.sink.deliver(email) {
            Ok(()) => SubmitOutcome::Accepted,
            Err(err) => {
                log::error!("Form submission error: {err}");
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<String>,
        fail_next: bool,
    }

    impl SubscriptionSink for RecordingSink {
        fn deliver(&mut self, email: &str) -> Result<(), SubscribeError> {
            if self.fail_next {
                return Err(SubscribeError::Unavailable);
            }
            self.delivered.push(email.to_owned());
            Ok(())
        }
    }

    #[test]
    fn test_validate_email_accepts() {
        for email in ["a@b.c", "user.name@example.com", "x@sub.domain.org"] {
            assert!(validate_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_validate_email_rejects() {
        for email in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@domain",
            "user@.com",
            "user@domain.",
            "two@@example.com",
            "a@b@c.com",
            "spaced out@example.com",
            "user@exa mple.com",
        ] {
            assert!(!validate_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_submit_trims_and_delivers() {
        let mut form = SubscribeForm::new(RecordingSink::default());
        let outcome = form.submit("  launch@example.com  ");

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(!outcome.is_error());
        assert_eq!(form.sink.delivered, vec!["launch@example.com"]);
    }

    #[test]
    fn test_submit_rejects_empty_and_invalid() {
        let mut form = SubscribeForm::new(RecordingSink::default());

        assert_eq!(form.submit("   "), SubmitOutcome::MissingAddress);
        assert_eq!(form.submit("not-an-address"), SubmitOutcome::InvalidAddress);
        assert!(form.sink.delivered.is_empty());
    }

    #[test]
    fn test_submit_surfaces_sink_failure() {
        let mut form = SubscribeForm::new(RecordingSink {
            fail_next: true,
            ..Default::default()
        });

        let outcome = form.submit("launch@example.com");
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(outcome.is_error());
    }

    #[test]
    fn test_outcome_messages() {
        assert!(SubmitOutcome::Accepted.message().contains("notify you"));
        assert!(SubmitOutcome::MissingAddress.message().contains("enter your email"));
        assert!(SubmitOutcome::InvalidAddress.message().contains("valid email"));
        assert!(SubmitOutcome::Failed.message().contains("try again"));
    }
}
