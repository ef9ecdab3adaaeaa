// src/application/editor/session.rs
//! Ephemeral editor session state: the draft, its per-field messages,
//! and the submit gate.
//!
//! One session owns one draft. Field setters revalidate on every
//! keystroke; [`EditorSession::submit`] runs the full gate against the
//! final values and only then talks to the backend. The session is
//! discarded after a successful submission or on navigation away.

use std::sync::Arc;

use crate::application::commands::articles::{CreateArticleCommand, UpdateArticleCommand};
use crate::application::dto::CreatedArticleDto;
use crate::application::error::ApplicationResult;
use crate::application::queries::articles::GetArticleByIdQuery;
use crate::application::services::ApplicationServices;
use crate::content;
use crate::domain::article::ArticleId;
use crate::domain::validation::{
    validate_content, validate_description, validate_title, validate_url_id,
};

const BLOCKED_SUBMIT_MESSAGE: &str = "Cannot submit.  Fix fields.";

#[derive(Debug, Clone)]
pub enum EditorMode {
    /// Creating a new article under a sub.
    New { sub: String },
    /// Editing an existing article.
    Edit { article_id: ArticleId },
}

/// The editable field values. Content is held as Markdown; it only
/// becomes HTML on preview and submit.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub url_id: String,
    pub title: String,
    pub description: String,
    pub content_markdown: String,
}

/// Inline error text per field; empty string means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMessages {
    pub url_id: String,
    pub title: String,
    pub description: String,
    pub content: String,
}

impl FieldMessages {
    pub fn is_clear(&self) -> bool {
        self.url_id.is_empty()
            && self.title.is_empty()
            && self.description.is_empty()
            && self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Backend accepted the new article; the session now edits it.
    Created(ArticleId),
    Updated,
    /// Field validation failed; nothing was transmitted.
    Blocked,
    /// Backend rejected the submission; retry is fine.
    Failed(String),
}

pub struct EditorSession {
    services: Arc<ApplicationServices>,
    mode: EditorMode,
    draft: Draft,
    messages: FieldMessages,
    submit_message: String,
    submit_succeeded: bool,
}

impl EditorSession {
    /// Start an empty draft for a new article under `sub`.
    pub fn new_article(services: Arc<ApplicationServices>, sub: impl Into<String>) -> Self {
        Self {
            services,
            mode: EditorMode::New { sub: sub.into() },
            draft: Draft::default(),
            messages: FieldMessages::default(),
            submit_message: String::new(),
            submit_succeeded: false,
        }
    }

    /// Hydrate a draft from a stored article: fetch it and project the
    /// canonical HTML into Markdown for the text area.
    pub async fn open(
        services: Arc<ApplicationServices>,
        article_id: impl Into<String>,
    ) -> ApplicationResult<Self> {
        let dto = services
            .article_queries
            .get_article_by_id(GetArticleByIdQuery {
                id: article_id.into(),
            })
            .await?;

        let draft = Draft {
            url_id: dto.article_url_id,
            title: dto.article_title,
            description: dto.article_description,
            content_markdown: content::to_markdown(&dto.article_content),
        };
        let article_id = ArticleId::new(dto.article_id)?;

        Ok(Self {
            services,
            mode: EditorMode::Edit { article_id },
            draft,
            messages: FieldMessages::default(),
            submit_message: String::new(),
            submit_succeeded: false,
        })
    }

    pub fn is_new(&self) -> bool {
        matches!(self.mode, EditorMode::New { .. })
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn messages(&self) -> &FieldMessages {
        &self.messages
    }

    pub fn submit_message(&self) -> &str {
        &self.submit_message
    }

    pub fn submit_succeeded(&self) -> bool {
        self.submit_succeeded
    }

    pub fn set_url_id(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.messages.url_id = validate_url_id(&value).message();
        self.draft.url_id = value;
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.messages.title = validate_title(&value).message();
        self.draft.title = value;
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.messages.description = validate_description(&value).message();
        self.draft.description = value;
    }

    /// Content is checked at submit time, not per keystroke.
    pub fn set_content_markdown(&mut self, value: impl Into<String>) {
        self.draft.content_markdown = value.into();
    }

    /// Hyphenated lowercase URL id suggestion from the current title.
    pub fn suggest_url_id(&self) -> String {
        self.services.slugger.slugify(&self.draft.title)
    }

    /// Preview markup: neutralized title plus the transcoded body.
    /// Recomputed per render; the draft itself is untouched.
    pub fn preview_html(&self) -> String {
        let title = content::strip_tags(&self.draft.title);
        let body = content::to_sanitized_html(&self.draft.content_markdown);
        format!("<h1>{title}</h1><div>{body}</div>")
    }

    /// Clear submission and field messages, e.g. after the UI has shown
    /// them for a while.
    pub fn reset_messages(&mut self) {
        self.messages = FieldMessages::default();
        self.submit_message.clear();
        self.submit_succeeded = false;
    }

    /// Run the full validation gate over the final field values and, if
    /// everything passes, create or update through the backend.
    ///
    /// Safe to call again while an earlier attempt is still unresolved;
    /// the draft is last-write-wins.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let content_html = content::to_sanitized_html(&self.draft.content_markdown);

        let url_id_check = validate_url_id(&self.draft.url_id);
        let title_check = validate_title(&self.draft.title);
        let description_check = validate_description(&self.draft.description);
        let content_check = validate_content(&content_html);

        let all_valid = url_id_check.is_valid()
            && title_check.is_valid()
            && description_check.is_valid()
            && content_check.is_valid();

        if !all_valid {
            self.messages = FieldMessages {
                url_id: url_id_check.message(),
                title: title_check.message(),
                description: description_check.message(),
                content: content_check.message(),
            };
            self.submit_message = BLOCKED_SUBMIT_MESSAGE.into();
            self.submit_succeeded = false;
            return SubmitOutcome::Blocked;
        }

        match self.mode.clone() {
            EditorMode::New { sub } => self.submit_create(sub).await,
            EditorMode::Edit { article_id } => self.submit_update(article_id).await,
        }
    }

    async fn submit_create(&mut self, sub: String) -> SubmitOutcome {
        let command = CreateArticleCommand {
            sub,
            url_id: self.draft.url_id.clone(),
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            content_markdown: self.draft.content_markdown.clone(),
        };

        match self.services.article_commands.create_article(command).await {
            Ok(article_id) => {
                let created = CreatedArticleDto {
                    article_id: article_id.as_str().to_owned(),
                };
                self.submit_message = format!(
                    "Article created!: {}",
                    serde_json::to_string(&created).unwrap_or_default()
                );
                self.submit_succeeded = true;
                self.mode = EditorMode::Edit {
                    article_id: article_id.clone(),
                };
                SubmitOutcome::Created(article_id)
            }
            Err(error) => self.record_failure(error.surface_message()),
        }
    }

    async fn submit_update(&mut self, article_id: ArticleId) -> SubmitOutcome {
        let command = UpdateArticleCommand {
            id: article_id.as_str().to_owned(),
            url_id: self.draft.url_id.clone(),
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            content_markdown: self.draft.content_markdown.clone(),
        };

        match self.services.article_commands.update_article(command).await {
            Ok(()) => {
                self.submit_message = "Article Updated!".into();
                self.submit_succeeded = true;
                SubmitOutcome::Updated
            }
            Err(error) => self.record_failure(error.surface_message()),
        }
    }

    fn record_failure(&mut self, message: String) -> SubmitOutcome {
        self.submit_message.clone_from(&message);
        self.submit_succeeded = false;
        SubmitOutcome::Failed(message)
    }
}
