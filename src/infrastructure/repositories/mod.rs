mod memory;

pub use memory::InMemoryArticleGateway;
