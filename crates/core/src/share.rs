use std::fmt;

use thiserror::Error;
use url::Url;

use crate::model::Category;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShareError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("url must use http or https: {0}")]
    UnsupportedScheme(String),
}

fn parse_web_url(raw: &str) -> Result<Url, ShareError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|_| ShareError::InvalidUrl(trimmed.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ShareError::UnsupportedScheme(trimmed.to_string())),
    }
}

//
// ─── SITE URL ─────────────────────────────────────────────────────────────────
//

/// Canonical address of the quiz, appended to every share message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(Url);

impl SiteUrl {
    /// # Errors
    ///
    /// Returns `ShareError` if `raw` is not an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, ShareError> {
        parse_web_url(raw).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── SHARE INTENT ─────────────────────────────────────────────────────────────
//

/// Compose endpoint of a social client that accepts prefilled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareIntent(Url);

impl ShareIntent {
    /// # Errors
    ///
    /// Returns `ShareError` if `raw` is not an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, ShareError> {
        parse_web_url(raw).map(Self)
    }

    #[must_use]
    pub fn base(&self) -> &str {
        self.0.as_str()
    }

    /// Compose link carrying `text` in the `text` query parameter.
    #[must_use]
    pub fn link(&self, text: &str) -> Url {
        let mut url = self.0.clone();
        url.query_pairs_mut().append_pair("text", text);
        url
    }
}

//
// ─── RESULT PRESENTATION ──────────────────────────────────────────────────────
//

/// Heading shown on the result screen.
#[must_use]
pub fn headline<C: Category>(category: C) -> String {
    format!("You are a {}!", category.slug())
}

/// Static image for a category, resolved as `/{slug}.png`.
#[must_use]
pub fn asset_path<C: Category>(category: C) -> String {
    format!("/{}.png", category.slug())
}

/// Text handed to the share collaborator.
#[must_use]
pub fn share_text<C: Category>(category: C, site_url: &SiteUrl) -> String {
    format!("I am a {}! {site_url}", category.slug())
}

/// What the share action needs: the message and a prefilled compose link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub text: String,
    pub link: Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSettings {
    site_url: SiteUrl,
    intent: ShareIntent,
}

impl ShareSettings {
    #[must_use]
    pub fn new(site_url: SiteUrl, intent: ShareIntent) -> Self {
        Self { site_url, intent }
    }

    #[must_use]
    pub fn site_url(&self) -> &SiteUrl {
        &self.site_url
    }

    #[must_use]
    pub fn intent(&self) -> &ShareIntent {
        &self.intent
    }

    #[must_use]
    pub fn payload<C: Category>(&self, category: C) -> SharePayload {
        let text = share_text(category, &self.site_url);
        let link = self.intent.link(&text);
        SharePayload { text, link }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Animal;

    fn settings() -> ShareSettings {
        ShareSettings::new(
            SiteUrl::parse("https://quiz.example.com/animals").unwrap(),
            ShareIntent::parse("https://warpcast.com/~/compose").unwrap(),
        )
    }

    #[test]
    fn result_strings_use_the_slug() {
        assert_eq!(headline(Animal::Fox), "You are a fox!");
        assert_eq!(asset_path(Animal::Hamster), "/hamster.png");
    }

    #[test]
    fn share_text_appends_site_url() {
        let site = SiteUrl::parse(" https://quiz.example.com/animals ").unwrap();
        assert_eq!(
            share_text(Animal::Cat, &site),
            "I am a cat! https://quiz.example.com/animals"
        );
    }

    #[test]
    fn payload_link_carries_encoded_text() {
        let payload = settings().payload(Animal::Dog);
        assert_eq!(payload.text, "I am a dog! https://quiz.example.com/animals");
        let (key, value) = payload.link.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, payload.text);
        assert!(payload.link.as_str().starts_with("https://warpcast.com/~/compose?text="));
    }

    #[test]
    fn invalid_urls_are_rejected() {
        assert_eq!(
            SiteUrl::parse("not a url"),
            Err(ShareError::InvalidUrl("not a url".to_string()))
        );
        assert_eq!(
            ShareIntent::parse("ftp://files.example.com"),
            Err(ShareError::UnsupportedScheme("ftp://files.example.com".to_string()))
        );
    }
}
