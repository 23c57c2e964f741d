// contact.rs - Contact form sink; messages are logged and acknowledged, nothing is stored

use thiserror::Error;
use tracing::info;

pub const MESSAGE_FIELD: &str = "message";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("form field `{0}` is missing")]
    MissingField(&'static str),
    #[error("message is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub success: bool,
}

impl ContactMessage {
    /// Reads the `message` field out of decoded form pairs. The first occurrence wins.
    pub fn from_form<'a, I>(fields: I) -> Result<Self, ContactError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let text = fields
            .into_iter()
            .find(|(name, _)| *name == MESSAGE_FIELD)
            .map(|(_, value)| value.trim())
            .ok_or(ContactError::MissingField(MESSAGE_FIELD))?;
        if text.is_empty() {
            return Err(ContactError::Empty);
        }
        Ok(Self { text: text.to_owned() })
    }
}

pub fn submit(message: &ContactMessage) -> Submission {
    info!(message = %message.text, "received contact message");
    Submission { success: true }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_is_required() {
        let err = ContactMessage::from_form([("email", "a@b.c")]).unwrap_err();
        assert_eq!(err, ContactError::MissingField("message"));
        assert_eq!(err.to_string(), "form field `message` is missing");
        assert_eq!(ContactMessage::from_form([("message", "  \n")]), Err(ContactError::Empty));
    }

    #[test]
    fn submit_acknowledges() {
        let message = ContactMessage::from_form([("name", "x"), ("message", " hello "), ("message", "again")]).unwrap();
        assert_eq!(message.text, "hello");
        assert_eq!(submit(&message), Submission { success: true });
    }
}
