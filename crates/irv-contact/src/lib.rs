mod error;
mod field;
mod form;
mod notify;

pub use error::*;
pub use field::Field;
pub use form::ContactForm;
pub use notify::{CONFIRMATION, Notifier};
