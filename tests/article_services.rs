// tests/article_services.rs
use std::sync::Arc;

use chrono::{TimeZone, Utc};

mod support;

use inklet_core::application::commands::articles::CreateArticleCommand;
use inklet_core::application::error::ApplicationError;
use inklet_core::application::queries::articles::{GetArticleByIdQuery, ListArticlesQuery};
use support::mocks::TickingClock;

fn ticking_clock() -> Arc<TickingClock> {
    Arc::new(TickingClock::new(
        Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap(),
    ))
}

fn command(sub: &str, url_id: &str, title: &str) -> CreateArticleCommand {
    CreateArticleCommand {
        sub: sub.into(),
        url_id: url_id.into(),
        title: title.into(),
        description: "a description".into(),
        content_markdown: "some **body**".into(),
    }
}

#[tokio::test]
async fn listing_is_resorted_ascending_by_creation_time() {
    support::init_tracing();
    let (services, _gateway) = support::in_memory_services(ticking_clock());

    for url_id in ["third-oldest", "second-oldest", "newest"] {
        services
            .article_commands
            .create_article(command("gardening", url_id, "t"))
            .await
            .unwrap();
    }

    let listing = services
        .article_queries
        .list_articles(ListArticlesQuery { sub: None })
        .await
        .unwrap();

    let ids: Vec<&str> = listing.iter().map(|s| s.article_url_id.as_str()).collect();
    // Creation order, oldest first, whatever order the store returned.
    assert_eq!(ids, ["third-oldest", "second-oldest", "newest"]);
    assert!(
        listing
            .windows(2)
            .all(|pair| pair[0].article_created_at <= pair[1].article_created_at)
    );
}

#[tokio::test]
async fn listing_filters_by_sub_and_labels_the_author() {
    support::init_tracing();
    let (services, _gateway) = support::in_memory_services(ticking_clock());

    services
        .article_commands
        .create_article(command("gardening", "soil", "t"))
        .await
        .unwrap();
    services
        .article_commands
        .create_article(command("woodwork", "dovetails", "t"))
        .await
        .unwrap();

    let listing = services
        .article_queries
        .list_articles(ListArticlesQuery {
            sub: Some("gardening".into()),
        })
        .await
        .unwrap();

    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].article_url_id, "soil");
    assert_eq!(listing[0].author_name, "gardening");
}

#[tokio::test]
async fn create_rejects_invalid_fields_before_transmission() {
    support::init_tracing();
    let (services, _gateway) = support::in_memory_services(ticking_clock());

    let err = services
        .article_commands
        .create_article(command("gardening", "my/article", "t"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Cannot have slashes in URL ID."));

    let err = services
        .article_commands
        .create_article(command("gardening", "fine", ""))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Length must be greater than zero."));

    let err = services
        .article_commands
        .create_article(command("", "fine", "t"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let listing = services
        .article_queries
        .list_articles(ListArticlesQuery { sub: None })
        .await
        .unwrap();
    assert!(listing.is_empty());
}

#[tokio::test]
async fn create_command_builder_requires_the_identity_fields() {
    let err = CreateArticleCommand::builder()
        .url_id("x")
        .title("t")
        .description("d")
        .build()
        .unwrap_err();
    assert_eq!(err, "sub is required");

    let command = CreateArticleCommand::builder()
        .sub("gardening")
        .url_id("x")
        .title("t")
        .description("d")
        .content_markdown("body")
        .build()
        .unwrap();
    assert_eq!(command.sub, "gardening");
}

#[tokio::test]
async fn get_by_id_maps_missing_articles_to_not_found() {
    support::init_tracing();
    let (services, _gateway) = support::in_memory_services(ticking_clock());

    let err = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: "nope".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
