//! One-shot status messages carried across a redirect
//!
//! A flash travels in the redirect's query string and is rendered once by
//! the page it lands on. Nothing is stored server-side.

use std::fmt;

use serde::Deserialize;

/// Flash message category, rendered as the banner's CSS class suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Danger,
}

impl FlashCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for FlashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Danger,
            message: message.into(),
        }
    }

    /// Build a redirect target that carries this flash to the next page.
    pub fn redirect_to(&self, path: &str) -> String {
        format!(
            "{}?category={}&flash={}",
            path,
            self.category,
            urlencoding::encode(&self.message)
        )
    }
}

/// Query parameters a page reads its flash from
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    pub category: Option<FlashCategory>,
    pub flash: Option<String>,
}

impl FlashParams {
    /// Take the flash out of the query, if one was sent.
    ///
    /// A message without a category is shown as a success banner.
    pub fn into_flash(self) -> Option<Flash> {
        let message = self.flash.filter(|m| !m.is_empty())?;
        Some(Flash {
            category: self.category.unwrap_or(FlashCategory::Success),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_target_encodes_message() {
        let flash = Flash::success(r#""Foo" was successfully deleted!"#);
        assert_eq!(
            flash.redirect_to("/"),
            "/?category=success&flash=%22Foo%22%20was%20successfully%20deleted%21"
        );
    }

    #[test]
    fn params_without_message_yield_nothing() {
        let params = FlashParams {
            category: Some(FlashCategory::Danger),
            flash: None,
        };
        assert!(params.into_flash().is_none());
    }

    #[test]
    fn params_default_to_success() {
        let params = FlashParams {
            category: None,
            flash: Some("Post created successfully!".into()),
        };
        assert_eq!(
            params.into_flash(),
            Some(Flash::success("Post created successfully!"))
        );
    }
}
