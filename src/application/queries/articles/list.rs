// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleSummaryDto, error::ApplicationResult},
    domain::article::sort_by_created,
};

pub struct ListArticlesQuery {
    /// Restrict the listing to one sub; `None` lists across the platform.
    pub sub: Option<String>,
}

impl ArticleQueryService {
    /// Fetch listing entries and re-sort them by creation time before
    /// display, regardless of the order the backend returned.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let summaries = self
            .read_gateway
            .list_summaries(query.sub.as_deref())
            .await?;
        let ordered = sort_by_created(&summaries);
        Ok(ordered.into_iter().map(Into::into).collect())
    }
}
