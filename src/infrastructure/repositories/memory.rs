// src/infrastructure/repositories/memory.rs
//! In-memory stand-in for the backend article API, used by tests and
//! local development shells.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::ClockPort;
use crate::domain::article::{
    Article, ArticleId, ArticleReadGateway, ArticleSummary, ArticleUpdate, ArticleWriteGateway,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};

struct StoredArticle {
    sub: String,
    article: Article,
}

pub struct InMemoryArticleGateway {
    inner: Mutex<HashMap<String, StoredArticle>>,
    clock: Arc<ClockPort>,
}

impl InMemoryArticleGateway {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, HashMap<String, StoredArticle>>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Transport("article store lock poisoned".into()))
    }
}

#[async_trait]
impl ArticleReadGateway for InMemoryArticleGateway {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let map = self.lock()?;
        Ok(map.get(id.as_str()).map(|stored| stored.article.clone()))
    }

    async fn list_summaries(&self, sub: Option<&str>) -> DomainResult<Vec<ArticleSummary>> {
        let map = self.lock()?;
        let summaries = map
            .values()
            .filter(|stored| sub.is_none_or(|wanted| stored.sub == wanted))
            .map(|stored| ArticleSummary {
                url_id: stored.article.url_id.clone(),
                title: stored.article.title.clone(),
                description: stored.article.description.clone(),
                // The dev store has no account join; the sub stands in
                // for the author label.
                author_name: stored.sub.clone(),
                created_at: stored.article.created_at,
            })
            .collect();
        Ok(summaries)
    }
}

#[async_trait]
impl ArticleWriteGateway for InMemoryArticleGateway {
    async fn create(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut map = self.lock()?;

        let taken = map
            .values()
            .any(|stored| stored.sub == article.sub && stored.article.url_id == article.url_id);
        if taken {
            return Err(DomainError::Conflict(format!(
                "URL ID '{}' already in use for sub '{}'",
                article.url_id, article.sub
            )));
        }

        let id = ArticleId::new(Uuid::new_v4().to_string())?;
        let stored = StoredArticle {
            sub: article.sub,
            article: Article {
                id: id.clone(),
                url_id: article.url_id,
                title: article.title,
                description: article.description,
                content: article.content,
                created_at: self.clock.now(),
            },
        };
        map.insert(id.as_str().to_owned(), stored);
        tracing::debug!(article_id = %id, "stored new article");
        Ok(id)
    }

    async fn update(&self, id: &ArticleId, update: ArticleUpdate) -> DomainResult<()> {
        let mut map = self.lock()?;

        let current_sub = map
            .get(id.as_str())
            .map(|stored| stored.sub.clone())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        let taken = map.values().any(|stored| {
            stored.article.id != *id
                && stored.sub == current_sub
                && stored.article.url_id == update.url_id
        });
        if taken {
            return Err(DomainError::Conflict(format!(
                "URL ID '{}' already in use for sub '{current_sub}'",
                update.url_id
            )));
        }

        let stored = map
            .get_mut(id.as_str())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        stored.article.url_id = update.url_id;
        stored.article.title = update.title;
        stored.article.description = update.description;
        stored.article.content = update.content;
        tracing::debug!(article_id = %id, "updated article");
        Ok(())
    }
}
