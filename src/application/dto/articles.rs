// src/application/dto/articles.rs
use crate::domain::article::{
    Article, ArticleContent, ArticleDescription, ArticleId, ArticleSummary, ArticleTitle,
    ArticleUpdate, ArticleUrlId, NewArticle,
};
use crate::domain::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fetched article, as the backend serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub article_id: String,
    pub article_url_id: String,
    pub article_title: String,
    pub article_description: String,
    /// Canonical sanitized HTML.
    pub article_content: String,
    pub article_created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            article_url_id: article.url_id.into(),
            article_title: article.title.into(),
            article_description: article.description.into(),
            article_content: article.content.into(),
            article_created_at: article.created_at,
        }
    }
}

impl TryFrom<ArticleDto> for Article {
    type Error = DomainError;

    fn try_from(dto: ArticleDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(dto.article_id)?,
            url_id: ArticleUrlId::new(dto.article_url_id)?,
            title: ArticleTitle::new(dto.article_title)?,
            description: ArticleDescription::new(dto.article_description)?,
            content: ArticleContent::canonical(dto.article_content),
            created_at: dto.article_created_at,
        })
    }
}

/// Create submission, keyed by the tenant sub.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub sub: String,
    pub article_url_id: String,
    pub article_title: String,
    pub article_description: String,
    pub article_content: String,
}

impl From<NewArticle> for CreateArticleRequest {
    fn from(article: NewArticle) -> Self {
        Self {
            sub: article.sub,
            article_url_id: article.url_id.into(),
            article_title: article.title.into(),
            article_description: article.description.into(),
            article_content: article.content.into(),
        }
    }
}

/// Update submission, keyed by the existing article id on the wire path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub article_url_id: String,
    pub article_title: String,
    pub article_description: String,
    pub article_content: String,
}

impl From<ArticleUpdate> for UpdateArticleRequest {
    fn from(update: ArticleUpdate) -> Self {
        Self {
            article_url_id: update.url_id.into(),
            article_title: update.title.into(),
            article_description: update.description.into(),
            article_content: update.content.into(),
        }
    }
}

/// Backend answer to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedArticleDto {
    pub article_id: String,
}

/// One listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub article_url_id: String,
    pub article_title: String,
    pub article_description: String,
    pub author_name: String,
    pub article_created_at: DateTime<Utc>,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            article_url_id: summary.url_id.into(),
            article_title: summary.title.into(),
            article_description: summary.description.into(),
            author_name: summary.author_name,
            article_created_at: summary.created_at,
        }
    }
}

impl TryFrom<ArticleSummaryDto> for ArticleSummary {
    type Error = DomainError;

    fn try_from(dto: ArticleSummaryDto) -> Result<Self, Self::Error> {
        Ok(Self {
            url_id: ArticleUrlId::new(dto.article_url_id)?,
            title: ArticleTitle::new(dto.article_title)?,
            description: ArticleDescription::new(dto.article_description)?,
            author_name: dto.author_name,
            created_at: dto.article_created_at,
        })
    }
}
