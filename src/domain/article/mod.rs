pub mod entity;
pub mod gateway;
pub mod listing;
pub mod value_objects;

pub use entity::{Article, ArticleSummary, ArticleUpdate, NewArticle};
pub use gateway::{ArticleReadGateway, ArticleWriteGateway};
pub use listing::sort_by_created;
pub use value_objects::{
    ArticleContent, ArticleDescription, ArticleId, ArticleTitle, ArticleUrlId,
};
