//! Integration tests for `NewsApiClient` and the acquisition fallback using
//! wiremock HTTP mocks.

use newsdesk_news::{acquire_articles, AcquireOptions, ArticleOrigin, NewsApiClient, NewsError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NewsApiClient {
    NewsApiClient::with_base_url("test-key", 10, base_url)
        .expect("client construction should not fail")
}

fn live_options(base_url: &str, max_articles: usize) -> AcquireOptions {
    AcquireOptions {
        api_key: Some("test-key".to_string()),
        use_demo: false,
        query: "finance".to_string(),
        max_articles,
        timeout_secs: 10,
        base_url: Some(base_url.to_string()),
    }
}

fn two_articles() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": { "id": null, "name": "Mint" },
                "author": "Staff",
                "title": "Bank stocks rise on rate hopes",
                "description": "Lenders gained as yields eased.",
                "url": "https://example.com/banks",
                "publishedAt": "2025-10-06T07:30:00Z",
                "content": "Bank stocks rose sharply. Analysts expect more gains. Volumes were high."
            },
            {
                "source": { "id": "reuters", "name": "Reuters" },
                "title": "Crude slips as demand worries weigh",
                "description": "Oil futures dropped in Asian trade.",
                "url": "https://example.com/crude",
                "publishedAt": "2025-10-06T06:00:00Z",
                "content": null
            }
        ]
    })
}

#[tokio::test]
async fn fetch_everything_returns_mapped_articles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("q", "finance"))
        .and(query_param("pageSize", "5"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("language", "en"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_articles()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client
        .fetch_everything("finance", 5)
        .await
        .expect("should parse articles");

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].source.as_deref(), Some("Mint"));
    assert_eq!(
        articles[0].published_at.as_deref(),
        Some("2025-10-06T07:30:00Z")
    );
    assert_eq!(
        articles[1].content.as_deref(),
        Some("Oil futures dropped in Asian trade.")
    );
}

#[tokio::test]
async fn fetch_everything_surfaces_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "error",
        "code": "apiKeyInvalid",
        "message": "Your API key is invalid or incorrect."
    });

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_everything("finance", 5)
        .await
        .expect_err("should fail");

    assert!(
        matches!(err, NewsError::Api(ref m) if m.contains("API key is invalid")),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn fetch_everything_non_json_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_everything("finance", 5).await.unwrap_err();

    assert!(matches!(err, NewsError::Api(ref m) if m.contains("502")));
}

#[tokio::test]
async fn fetch_everything_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_everything("finance", 5).await.unwrap_err();

    match err {
        NewsError::Deserialize { context, .. } => {
            assert!(!context.contains("test-key"), "API key leaked: {context}");
        }
        other => panic!("expected Deserialize, got {other:?}"),
    }
}

#[tokio::test]
async fn acquire_uses_live_articles_when_available() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_articles()))
        .mount(&server)
        .await;

    let acquisition = acquire_articles(&live_options(&server.uri(), 1)).await;

    assert_eq!(acquisition.origin, ArticleOrigin::Live);
    assert_eq!(acquisition.articles.len(), 1, "truncated to max_articles");
    assert_eq!(
        acquisition.articles[0].title.as_deref(),
        Some("Bank stocks rise on rate hopes")
    );
}

#[tokio::test]
async fn acquire_falls_back_to_demo_on_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "totalResults": 0,
            "articles": []
        })))
        .mount(&server)
        .await;

    let acquisition = acquire_articles(&live_options(&server.uri(), 2)).await;

    assert_eq!(acquisition.origin, ArticleOrigin::Demo);
    assert_eq!(acquisition.articles.len(), 2);
}

#[tokio::test]
async fn acquire_falls_back_to_demo_on_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let acquisition = acquire_articles(&live_options(&server.uri(), 6)).await;

    assert_eq!(acquisition.origin, ArticleOrigin::Demo);
    assert_eq!(acquisition.articles.len(), 3);
}

#[tokio::test]
async fn acquire_without_key_uses_demo_and_skips_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_articles()))
        .expect(0)
        .mount(&server)
        .await;

    for use_demo in [true, false] {
        let options = AcquireOptions {
            api_key: None,
            use_demo,
            base_url: Some(server.uri()),
            ..AcquireOptions::default()
        };
        let acquisition = acquire_articles(&options).await;
        assert_eq!(acquisition.origin, ArticleOrigin::Demo);
        assert_eq!(acquisition.articles.len(), 3);
    }
}

#[tokio::test]
async fn acquire_clamps_max_articles() {
    let options = AcquireOptions {
        max_articles: 0,
        ..AcquireOptions::default()
    };
    let acquisition = acquire_articles(&options).await;
    assert_eq!(acquisition.articles.len(), 1);
}
