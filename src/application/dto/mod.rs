pub mod articles;

pub use articles::{
    ArticleDto, ArticleSummaryDto, CreateArticleRequest, CreatedArticleDto, UpdateArticleRequest,
};
