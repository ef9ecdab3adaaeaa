// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::commands::articles::ArticleCommandService;
use crate::application::ports::SlugGeneratorPort;
use crate::application::queries::articles::ArticleQueryService;
use crate::domain::article::{ArticleReadGateway, ArticleWriteGateway};

/// Everything an editor shell needs, wired once at startup.
pub struct ApplicationServices {
    pub article_commands: ArticleCommandService,
    pub article_queries: ArticleQueryService,
    pub slugger: Arc<SlugGeneratorPort>,
}

impl ApplicationServices {
    pub fn new(
        read_gateway: Arc<dyn ArticleReadGateway>,
        write_gateway: Arc<dyn ArticleWriteGateway>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        Self {
            article_commands: ArticleCommandService::new(write_gateway),
            article_queries: ArticleQueryService::new(read_gateway),
            slugger,
        }
    }
}
