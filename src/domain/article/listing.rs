// src/domain/article/listing.rs
use crate::domain::article::entity::ArticleSummary;

/// Order a listing by creation time, oldest first.
///
/// Stable: entries with equal timestamps keep their relative order. The
/// input is left untouched; callers get a fresh ordered copy. Listing
/// pages currently present this order as-is.
pub fn sort_by_created(listing: &[ArticleSummary]) -> Vec<ArticleSummary> {
    let mut ordered = listing.to_vec();
    ordered.sort_by_key(|entry| entry.created_at);
    ordered
}
