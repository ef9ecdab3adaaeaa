// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{
        ArticleContent, ArticleDescription, ArticleId, ArticleTitle, ArticleUrlId, NewArticle,
    },
};

/// Field values as the editor holds them: content still in Markdown.
#[derive(Debug)]
pub struct CreateArticleCommand {
    pub sub: String,
    pub url_id: String,
    pub title: String,
    pub description: String,
    pub content_markdown: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    sub: Option<String>,
    url_id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    content_markdown: String,
}

impl CreateArticleCommandBuilder {
    pub fn sub(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    pub fn url_id(mut self, url_id: impl Into<String>) -> Self {
        self.url_id = Some(url_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content_markdown(mut self, content_markdown: impl Into<String>) -> Self {
        self.content_markdown = content_markdown.into();
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            sub: self.sub.ok_or("sub is required")?,
            url_id: self.url_id.ok_or("url id is required")?,
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            content_markdown: self.content_markdown,
        })
    }
}

impl ArticleCommandService {
    /// Validate the draft fields, transcode the Markdown working copy to
    /// canonical HTML, and submit. Returns the backend-assigned id.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleId> {
        if command.sub.trim().is_empty() {
            return Err(ApplicationError::validation("sub is required"));
        }

        let url_id = ArticleUrlId::new(command.url_id)?;
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let content = ArticleContent::from_markdown(&command.content_markdown);

        let new_article = NewArticle {
            sub: command.sub,
            url_id,
            title,
            description,
            content,
        };

        let created = self.write_gateway.create(new_article).await?;
        tracing::info!(article_id = %created, "article created");
        Ok(created)
    }
}
