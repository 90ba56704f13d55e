use axum::response::IntoResponse;
use irv_contact::{ContactForm, Field};

use crate::template::{Template, filters};

/// The landing page: biography sections followed by the contact form.
#[derive(askama::Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate<'a> {
    pub lang: &'a str,
    pub photo_url: &'a str,
    pub form: &'a ContactForm,
    pub invalid_fields: Vec<Field>,
    pub confirmation: Option<String>,
    pub error: Option<String>,
}

impl<'a> ProfileTemplate<'a> {
    pub fn new(template: &'a Template, form: &'a ContactForm) -> Self {
        Self {
            lang: template.preferred_language(),
            photo_url: &template.config().profile.photo_url,
            form,
            invalid_fields: vec![],
            confirmation: None,
            error: None,
        }
    }

    /// Whether the control named `name` failed validation.
    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid_fields.iter().any(|field| field.as_ref() == name)
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    let form = ContactForm::new();

    template.render(ProfileTemplate::new(&template, &form))
}
