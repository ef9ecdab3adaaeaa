// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleDescription, ArticleId, ArticleTitle, ArticleUrlId,
};
use chrono::{DateTime, Utc};

/// A stored article as the backend returns it.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub url_id: ArticleUrlId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an article under a sub. The backend assigns the
/// id and the creation timestamp.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub sub: String,
    pub url_id: ArticleUrlId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub content: ArticleContent,
}

/// Full-field update for an existing article. The editor always submits
/// every field, so there is nothing optional here.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub url_id: ArticleUrlId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub content: ArticleContent,
}

/// Listing entry: what the index pages show for each article.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub url_id: ArticleUrlId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}
