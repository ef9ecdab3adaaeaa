// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleWriteGateway;

pub struct ArticleCommandService {
    pub(super) write_gateway: Arc<dyn ArticleWriteGateway>,
}

impl ArticleCommandService {
    pub fn new(write_gateway: Arc<dyn ArticleWriteGateway>) -> Self {
        Self { write_gateway }
    }
}
