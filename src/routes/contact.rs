use axum::{
    extract::Form,
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use irv_contact::{ContactForm, Notifier};

use crate::{routes::profile::ProfileTemplate, template::Template};

const INVALID_FORM: &str = "Please fill in every field with a valid email address";
const UNKNOWN_FIELD: &str = "The form contained an unexpected field";

/// Captures the confirmation so the page can show it as a modal dialog.
#[derive(Default)]
struct PageNotifier {
    message: Option<String>,
}

impl Notifier for PageNotifier {
    fn notify(&mut self, message: &str) {
        self.message = Some(message.to_owned());
    }
}

pub async fn page() -> Redirect {
    Redirect::to("/#contact")
}

pub async fn action(
    template: Template,
    Form(input): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let mut form = ContactForm::new();

    for (name, value) in input {
        if let Err(err) = form.on_named_change(&name, value) {
            tracing::warn!(field = %name, "{err}");

            let mut page = ProfileTemplate::new(&template, &form);
            page.error = Some(template.t(UNKNOWN_FIELD));

            return template.render_with_status(StatusCode::BAD_REQUEST, page);
        }
    }

    let mut notifier = PageNotifier::default();
    if let Err(err) = form.on_submit(&mut notifier) {
        let invalid_fields = err.invalid_fields();
        tracing::debug!(?invalid_fields, "contact form refused");

        let mut page = ProfileTemplate::new(&template, &form);
        page.invalid_fields = invalid_fields;
        page.error = Some(template.t(INVALID_FORM));

        return template.render_with_status(StatusCode::UNPROCESSABLE_ENTITY, page);
    }

    // The message itself is neither stored nor forwarded.
    tracing::info!("contact form submitted");

    let mut page = ProfileTemplate::new(&template, &form);
    page.confirmation = notifier.message.map(|message| template.t(&message));

    template.render(page)
}
