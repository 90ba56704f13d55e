use irv_contact::{ContactForm, Field, Notifier};

#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

#[allow(dead_code)]
pub fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.on_field_change(Field::Name, name);
    form.on_field_change(Field::Email, email);
    form.on_field_change(Field::Message, message);

    form
}
