// src/domain/article/value_objects.rs
use crate::content;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{validate_description, validate_title, validate_url_id};
use std::fmt;

/// Opaque article identifier, assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// Human-chosen URL identifier, unique per sub. Path segment, so no
/// slashes, ever.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleUrlId(String);

impl ArticleUrlId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let validation = validate_url_id(&value);
        if let Some(error) = validation.error() {
            return Err(DomainError::Validation(error.to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleUrlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleUrlId> for String {
    fn from(value: ArticleUrlId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if let Some(error) = validate_title(&value).error() {
            return Err(DomainError::Validation(error.to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDescription(String);

impl ArticleDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if let Some(error) = validate_description(&value).error() {
            return Err(DomainError::Validation(error.to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleDescription> for String {
    fn from(value: ArticleDescription) -> Self {
        value.0
    }
}

/// Canonical article content: sanitized HTML, the only form persisted
/// and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    /// Transcode the editor's Markdown working copy into canonical form.
    pub fn from_markdown(markdown: &str) -> Self {
        Self(content::to_sanitized_html(markdown))
    }

    /// Sanitize raw HTML into canonical form.
    pub fn from_untrusted_html(html: &str) -> Self {
        Self(content::sanitize(html))
    }

    /// Wrap content already in canonical form, as fetched from the
    /// backend. Storage only ever holds sanitized HTML.
    pub fn canonical(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Markdown projection for the edit text area. Lossy.
    pub fn to_markdown(&self) -> String {
        content::to_markdown(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}
