use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::language::UserLanguage;

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let preferred_language = askama::get_value::<String>(values, "preferred_language")
            .map_err(|_| askama::Error::Fmt)?;

        Ok(rust_i18n::t!(value, locale = preferred_language).to_string())
    }
}

pub struct Template {
    preferred_language: String,
    config: crate::config::Config,
}

impl Template {
    pub fn new(preferred_language: impl Into<String>, config: crate::config::Config) -> Self {
        Self {
            preferred_language: preferred_language.into(),
            config,
        }
    }

    pub fn preferred_language(&self) -> &str {
        &self.preferred_language
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "preferred_language",
            Box::new(self.preferred_language.to_owned()),
        );

        template.render_with_values(&values)
    }

    /// Translate `key` into the request's language.
    pub fn t(&self, key: &str) -> String {
        rust_i18n::t!(key, locale = self.preferred_language.as_str()).to_string()
    }

    pub fn config(&self) -> &crate::config::Config {
        &self.config
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }

    /// Render with a non-200 status, keeping the HTML body.
    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }

        response
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_language = parts.extract::<UserLanguage>().await?;

        let preferred_language = user_language
            .negotiate()
            .map(str::to_owned)
            .unwrap_or_else(|| state.config.profile.default_language.to_owned());

        Ok(Template::new(preferred_language, state.config.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub lang: &'a str,
}
