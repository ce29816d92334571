use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MediaError {
    #[error("media url cannot be empty")]
    EmptyUrl,

    #[error("media url is not valid: {raw}")]
    InvalidUrl { raw: String },
}

/// External image or video reference. Shown verbatim by the UI; no media
/// processing happens anywhere in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    url: Url,
    caption: String,
}

impl MediaRef {
    /// # Errors
    ///
    /// Returns `MediaError::EmptyUrl` for a blank reference and
    /// `MediaError::InvalidUrl` when the string does not parse as a URL.
    pub fn new(url: impl AsRef<str>, caption: impl Into<String>) -> Result<Self, MediaError> {
        let raw = url.as_ref().trim();
        if raw.is_empty() {
            return Err(MediaError::EmptyUrl);
        }
        let url = Url::parse(raw).map_err(|_| MediaError::InvalidUrl {
            raw: raw.to_string(),
        })?;
        Ok(Self {
            url,
            caption: caption.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_url() {
        let media = MediaRef::new("https://example.com/panel.jpg", "Paneles").unwrap();
        assert_eq!(media.url().as_str(), "https://example.com/panel.jpg");
        assert_eq!(media.caption(), "Paneles");
    }

    #[test]
    fn rejects_empty_url() {
        assert_eq!(MediaRef::new("   ", "x"), Err(MediaError::EmptyUrl));
    }

    #[test]
    fn rejects_unparseable_url() {
        let result = MediaRef::new("not a url", "x");
        assert!(matches!(result, Err(MediaError::InvalidUrl { .. })));
    }
}
