//! Post record and validated post fields

use chrono::NaiveDateTime;
use serde::Deserialize;
use sqlx::FromRow;

use super::ValidationError;

/// Post record as stored in the `posts` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// UTC creation time, assigned by the store
    pub created: NaiveDateTime,
}

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new post title.
    ///
    /// Surrounding whitespace is trimmed and an empty result is rejected.
    ///
    /// # Example
    /// ```
    /// use blogctl_server::models::PostTitle;
    ///
    /// assert_eq!(PostTitle::new("  Hello ").unwrap().as_str(), "Hello");
    /// assert!(PostTitle::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        non_empty(s, "Title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Create new post content. Same trimming rules as [`PostTitle::new`].
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        non_empty(s, "Content").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn non_empty(s: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Raw create/edit form submission
#[derive(Debug, Clone, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// A validated title/content pair ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: PostTitle,
    pub content: PostContent,
}

impl PostDraft {
    /// Validate a form submission.
    ///
    /// The title is checked before the content, so only the first failing
    /// field is reported.
    pub fn from_form(form: &PostForm) -> Result<Self, ValidationError> {
        let title = PostTitle::new(&form.title)?;
        let content = PostContent::new(&form.content)?;
        Ok(Self { title, content })
    }
}
