use std::str::FromStr;

use validator::Validate;

use crate::{CONFIRMATION, Field, Notifier};

/// Current contents of the contact form.
///
/// Every field is always present; a fresh or reset form holds empty strings.
/// The form cycles between editing and an instantaneous submitted state that
/// clears it again, so the same value can serve any number of submissions.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    name: String,
    #[validate(length(min = 1), email)]
    email: String,
    #[validate(length(min = 1))]
    message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Replace the value of a single control, leaving the others untouched.
    ///
    /// An `email` control holds its value the way a browser sanitizes it:
    /// without line breaks and without surrounding whitespace.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        let mut value = value.into();

        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => {
                value = sanitize_email(&value);
                &mut self.email
            }
            Field::Message => &mut self.message,
        };

        *slot = value;
    }

    /// Same as [`ContactForm::on_field_change`] but keyed by the input name
    /// carried in a form post.
    pub fn on_named_change(&mut self, name: &str, value: impl Into<String>) -> crate::Result<()> {
        let field =
            Field::from_str(name).map_err(|_| crate::Error::UnknownField(name.to_owned()))?;

        self.on_field_change(field, value);

        Ok(())
    }

    /// Accept the submission: notify the visitor once and clear the form.
    ///
    /// The form must first pass the same checks a browser applies to
    /// `required` and `type="email"` controls. When it does not, the handler
    /// is never reached: the form keeps its contents and nothing is notified.
    pub fn on_submit(&mut self, notifier: &mut impl Notifier) -> crate::Result<()> {
        self.validate()?;

        notifier.notify(CONFIRMATION);
        *self = Self::default();

        Ok(())
    }
}

fn sanitize_email(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect::<String>()
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_owned()
}
