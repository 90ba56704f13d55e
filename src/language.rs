use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use std::convert::Infallible;

/// Locales with a translation file under `locales/`.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["zh-TW", "en"];

/// Languages listed in the request's `Accept-Language` header, best first.
#[derive(Debug, Clone, Default)]
pub struct UserLanguage(Vec<String>);

impl UserLanguage {
    pub fn parse(header: &str) -> Self {
        let mut languages = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.trim().split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }

                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);

                Some((tag.to_owned(), quality))
            })
            .filter(|(_, quality)| *quality > 0.0)
            .collect::<Vec<_>>();

        // Stable, so equal weights keep header order
        languages.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self(languages.into_iter().map(|(tag, _)| tag).collect())
    }

    pub fn preferred_languages(&self) -> &[String] {
        &self.0
    }

    /// First requested language we ship a translation for.
    pub fn negotiate(&self) -> Option<&'static str> {
        self.0.iter().find_map(|tag| supported(tag))
    }
}

fn supported(tag: &str) -> Option<&'static str> {
    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match primary.as_str() {
        "zh" => Some("zh-TW"),
        "en" => Some("en"),
        _ => None,
    }
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(UserLanguage::parse)
            .unwrap_or_default())
    }
}
