//! Direct tests for the bounded fetcher.

mod common;

use url::Url;
use url_relay::config::FetchConfig;
use url_relay::fetch::{BoundedFetcher, FetchError};

fn fetcher_with_cap(max_size: usize) -> BoundedFetcher {
    let mut config = FetchConfig::default();
    config.max_size = max_size;
    BoundedFetcher::new(&config).unwrap()
}

#[tokio::test]
async fn returns_the_exact_remote_bytes() {
    let remote = common::start_remote(b"abc123".to_vec()).await;
    let fetcher = fetcher_with_cap(1024);
    let url = Url::parse(&format!("http://{remote}/f")).unwrap();

    let body = fetcher.fetch(&url).await.unwrap();
    assert_eq!(body, b"abc123");
}

#[tokio::test]
async fn body_at_exactly_the_cap_is_accepted() {
    let remote = common::start_remote(vec![b'x'; 512]).await;
    let fetcher = fetcher_with_cap(512);
    let url = Url::parse(&format!("http://{remote}/f")).unwrap();

    let body = fetcher.fetch(&url).await.unwrap();
    assert_eq!(body.len(), 512);
}

#[tokio::test]
async fn oversized_body_aborts_with_too_large() {
    let remote = common::start_remote(vec![b'x'; 64 * 1024]).await;
    let fetcher = fetcher_with_cap(1024);
    let url = Url::parse(&format!("http://{remote}/f")).unwrap();

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::TooLarge));
}

#[tokio::test]
async fn empty_body_is_an_error() {
    let remote = common::start_remote(Vec::new()).await;
    let fetcher = fetcher_with_cap(1024);
    let url = Url::parse(&format!("http://{remote}/f")).unwrap();

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Empty));
}

#[tokio::test]
async fn unreachable_remote_is_a_transport_error() {
    let gone = common::unreachable_addr().await;
    let fetcher = fetcher_with_cap(1024);
    let url = Url::parse(&format!("http://{gone}/f")).unwrap();

    match fetcher.fetch(&url).await.unwrap_err() {
        FetchError::Transport(message) => assert!(!message.is_empty()),
        other => panic!("expected transport error, got {other:?}"),
    }
}
