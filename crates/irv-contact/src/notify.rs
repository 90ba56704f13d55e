/// Fixed acknowledgement shown once per accepted submission.
pub const CONFIRMATION: &str = "Thank you for your message, we will get back to you soon!";

/// Surface the confirmation to the visitor.
///
/// Implementations block the visitor until the message is acknowledged
/// (a modal dialog in the rendered page).
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

