use feed_digest::{
    CliConfig, Credentials, DigestEngine, DigestError, DigestPipeline, HttpMailer,
};
use httpmock::prelude::*;

fn config_for(feed_server: &MockServer, mail_server: &MockServer) -> CliConfig {
    CliConfig {
        feed: "golang".to_string(),
        feed_base_url: feed_server.base_url(),
        mail_api_url: mail_server.url("/mail/send"),
        from_address: "digest@example.com".to_string(),
        to_address: "robin@example.com".to_string(),
        to_name: "Robin".to_string(),
        subject: "Your Daily Golang News".to_string(),
        verbose: false,
    }
}

fn engine_for(
    feed_server: &MockServer,
    mail_server: &MockServer,
) -> DigestEngine<DigestPipeline<HttpMailer, CliConfig>> {
    let config = config_for(feed_server, mail_server);
    let mailer = HttpMailer::new(
        config.mail_api_url.clone(),
        Credentials::new("robin".to_string(), "sg-key".to_string()),
    );
    DigestEngine::new(DigestPipeline::new(mailer, config))
}

#[tokio::test]
async fn end_to_end_digest_is_fetched_rendered_and_mailed() {
    let feed_server = MockServer::start();
    let mail_server = MockServer::start();

    let feed_mock = feed_server.mock(|when, then| {
        when.method(GET).path("/r/golang.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": {
                    "children": [
                        {"data": {"title": "A", "url": "http://x", "score": 0}},
                        {"data": {"title": "B", "url": "http://y", "score": 5}}
                    ]
                }
            }));
    });

    let mail_mock = mail_server.mock(|when, then| {
        when.method(POST)
            .path("/mail/send")
            // base64("robin:sg-key")
            .header("authorization", "Basic cm9iaW46c2cta2V5")
            .json_body(serde_json::json!({
                "from": "digest@example.com",
                "to": "robin@example.com",
                "toname": "Robin",
                "subject": "Your Daily Golang News",
                "html": "<p>A<b></b><br/> <a href=\"http://x\">http://x</a></p>\
                         <p>B (Score: 5)<b></b><br/> <a href=\"http://y\">http://y</a></p>"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "success"}));
    });

    let engine = engine_for(&feed_server, &mail_server);
    let summary = engine.run().await.unwrap();

    feed_mock.assert();
    mail_mock.assert();
    assert_eq!(summary.entry_count, 2);
}

#[tokio::test]
async fn mail_api_is_never_called_when_feed_fails() {
    let feed_server = MockServer::start();
    let mail_server = MockServer::start();

    let feed_mock = feed_server.mock(|when, then| {
        when.method(GET).path("/r/golang.json");
        then.status(404);
    });

    let mail_mock = mail_server.mock(|when, then| {
        when.method(POST).path("/mail/send");
        then.status(200);
    });

    let engine = engine_for(&feed_server, &mail_server);
    let err = engine.run().await.unwrap_err();

    feed_mock.assert();
    mail_mock.assert_hits(0);

    match err {
        DigestError::FeedStatus(status) => assert_eq!(status, "404 Not Found"),
        other => panic!("expected FeedStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_feed_still_sends_an_empty_digest() {
    let feed_server = MockServer::start();
    let mail_server = MockServer::start();

    feed_server.mock(|when, then| {
        when.method(GET).path("/r/golang.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": {"children": []}}));
    });

    let mail_mock = mail_server.mock(|when, then| {
        when.method(POST)
            .path("/mail/send")
            .json_body_partial(r#"{"html": ""}"#);
        then.status(200);
    });

    let engine = engine_for(&feed_server, &mail_server);
    let summary = engine.run().await.unwrap();

    mail_mock.assert();
    assert_eq!(summary.entry_count, 0);
    assert_eq!(summary.body_bytes, 0);
}

#[tokio::test]
async fn delivery_rejection_surfaces_as_delivery_error() {
    let feed_server = MockServer::start();
    let mail_server = MockServer::start();

    feed_server.mock(|when, then| {
        when.method(GET).path("/r/golang.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": {"children": [{"data": {"title": "A", "url": "http://x", "score": 2}}]}
            }));
    });

    mail_server.mock(|when, then| {
        when.method(POST).path("/mail/send");
        then.status(500).body("upstream exploded");
    });

    let engine = engine_for(&feed_server, &mail_server);
    let err = engine.run().await.unwrap_err();

    match &err {
        DigestError::Delivery { status, body } => {
            assert_eq!(status, "500 Internal Server Error");
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Delivery error, got {:?}", other),
    }
    assert_ne!(err.exit_code(), 0);
}
