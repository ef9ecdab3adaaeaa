// src/content/sanitize.rs
//! Allowlist sanitization of untrusted article HTML.
//!
//! Every byte of article content passes through [`sanitize`] before it is
//! persisted or injected into the live DOM. The allowlist below is the
//! security contract of the platform: widening it is a review decision,
//! not a config tweak.

use std::borrow::Cow;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements permitted in article content. Includes the platform's embed
/// widget tag and an iframe for approved embeds.
const ALLOWED_TAGS: &[&str] = &[
    "img",
    "h1",
    "h2",
    "twitter-widget",
    "h3",
    "h4",
    "h5",
    "h6",
    "blockquote",
    "p",
    "a",
    "ul",
    "ol",
    "nl",
    "li",
    "b",
    "i",
    "strong",
    "em",
    "strike",
    "code",
    "hr",
    "br",
    "div",
    "table",
    "thead",
    "caption",
    "tbody",
    "tr",
    "th",
    "td",
    "pre",
    "iframe",
];

/// Hosts an iframe may embed from. Anything else loses the element.
const ALLOWED_IFRAME_HOSTS: &[&str] = &["www.youtube.com", "twitter.com"];

/// The one class value the embed widget needs on blockquotes.
const ALLOWED_BLOCKQUOTE_CLASS: &str = "twitter-tweet";

/// Attribute names recognized on every allowed element, alongside the
/// catch-all prefixes configured on the builder. Editors are trusted with
/// attributes; readers are not trusted with elements.
const GENERIC_ATTRIBUTES: &[&str] = &[
    "align", "allow", "allowfullscreen", "alt", "class", "colspan", "frameborder", "height",
    "href", "id", "name", "rowspan", "scrolling", "src", "start", "style", "target", "title",
    "type", "width",
];

static SRCLESS_IFRAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<iframe(\s[^>]*)?>\s*</iframe>").expect("iframe pattern compiles")
});

fn embed_src_allowed(value: &str) -> bool {
    url::Url::parse(value).is_ok_and(|parsed| {
        parsed
            .host_str()
            .is_some_and(|host| ALLOWED_IFRAME_HOSTS.contains(&host))
    })
}

fn filter_blockquote_class(value: &str) -> Option<Cow<'_, str>> {
    let kept: Vec<&str> = value
        .split_whitespace()
        .filter(|class| *class == ALLOWED_BLOCKQUOTE_CLASS)
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(Cow::Owned(kept.join(" ")))
    }
}

fn article_builder() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .generic_attributes(GENERIC_ATTRIBUTES.iter().copied().collect())
        // The empty prefix matches every attribute name: attributes on
        // allowed elements are left alone except for the two filters below.
        .generic_attribute_prefixes(HashSet::from(["", "data-"]))
        .link_rel(None)
        .attribute_filter(|element, attribute, value| match (element, attribute) {
            ("iframe", "src") => embed_src_allowed(value).then(|| Cow::Borrowed(value)),
            ("blockquote", "class") => filter_blockquote_class(value),
            _ => Some(Cow::Borrowed(value)),
        });
    builder
}

/// Reduce untrusted HTML to the allowed element set.
///
/// Total and idempotent; malformed markup is filtered, never an error.
/// Iframes pointing anywhere but the approved embed hosts are removed
/// wholesale, not just stripped of their `src`.
pub fn sanitize(raw_html: &str) -> String {
    let cleaned = article_builder().clean(raw_html).to_string();
    drop_unsourced_iframes(&cleaned)
}

/// Remove iframe husks left behind once a disallowed `src` was filtered
/// out. Runs over serializer-normalized output only.
fn drop_unsourced_iframes(html: &str) -> String {
    SRCLESS_IFRAME
        .replace_all(html, |captures: &regex::Captures<'_>| {
            let attributes = captures.get(1).map_or("", |m| m.as_str());
            if attributes.contains("src=") {
                captures[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Strip every element and keep the text. Used to neutralize titles
/// before they are interpolated into preview markup.
pub fn strip_tags(input: &str) -> String {
    let mut builder = ammonia::Builder::default();
    builder.tags(HashSet::new());
    builder.clean(input).to_string()
}
