// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::domain::article::ArticleReadGateway;

pub struct ArticleQueryService {
    pub(super) read_gateway: Arc<dyn ArticleReadGateway>,
}

impl ArticleQueryService {
    pub fn new(read_gateway: Arc<dyn ArticleReadGateway>) -> Self {
        Self { read_gateway }
    }
}
