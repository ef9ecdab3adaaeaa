// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{
        ArticleContent, ArticleDescription, ArticleId, ArticleTitle, ArticleUpdate, ArticleUrlId,
    },
};

/// Full-field update as submitted by the editor, keyed by article id.
pub struct UpdateArticleCommand {
    pub id: String,
    pub url_id: String,
    pub title: String,
    pub description: String,
    pub content_markdown: String,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        let update = ArticleUpdate {
            url_id: ArticleUrlId::new(command.url_id)?,
            title: ArticleTitle::new(command.title)?,
            description: ArticleDescription::new(command.description)?,
            content: ArticleContent::from_markdown(&command.content_markdown),
        };

        self.write_gateway.update(&id, update).await?;
        tracing::info!(article_id = %id, "article updated");
        Ok(())
    }
}
