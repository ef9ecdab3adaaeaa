//! Client-side core of a multi-tenant blogging platform.
//!
//! The crate owns the article content pipeline (HTML <-> Markdown
//! transcoding and allowlist sanitization), field validation for the
//! editor and login forms, listing order, and the ephemeral editor
//! session state. Transport, routing, and rendering live elsewhere and
//! are reached through the async gateway traits in [`domain`] and the
//! ports in [`application`].

pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod infrastructure;
