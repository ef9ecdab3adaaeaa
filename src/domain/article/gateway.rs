// src/domain/article/gateway.rs
use crate::domain::article::entity::{Article, ArticleSummary, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read side of the backend article API.
#[async_trait]
pub trait ArticleReadGateway: Send + Sync {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    /// Listing entries for a sub, or for the whole platform when `None`.
    /// Order is the backend's business; callers re-sort before display.
    async fn list_summaries(&self, sub: Option<&str>) -> DomainResult<Vec<ArticleSummary>>;
}

/// Write side of the backend article API.
#[async_trait]
pub trait ArticleWriteGateway: Send + Sync {
    /// Create an article; the backend answers with the new opaque id.
    async fn create(&self, article: NewArticle) -> DomainResult<ArticleId>;
    async fn update(&self, id: &ArticleId, update: ArticleUpdate) -> DomainResult<()>;
}
