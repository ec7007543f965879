//! Request construction and evaluation over real HTTP.

use std::time::Duration;

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use waitfor::check::{build_request, resolve_target};
use waitfor::transport::{Transport, TransportError};
use waitfor::{CheckSpec, HttpTransport, ReadinessLoop, RunError, RunSettings, TracingReporter};

fn settings(timeout_ms: u64, interval_ms: u64) -> RunSettings {
    RunSettings::new(
        Duration::from_millis(timeout_ms),
        Duration::from_millis(interval_ms),
    )
}

async fn run(checks: &[CheckSpec], settings: RunSettings) -> Result<waitfor::RunSummary, RunError> {
    ReadinessLoop::new(
        HttpTransport::new(settings.timeout).unwrap(),
        TracingReporter::default(),
    )
    .run(checks, settings)
    .await
}

#[tokio::test]
async fn test_post_sends_body_and_last_header_wins() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ready"))
        .and(header("x-token", "second"))
        .and(body_string("ping"))
        .respond_with(ResponseTemplate::new(201).set_body_string("pong"))
        .expect(1)
        .mount(&server)
        .await;

    let check = CheckSpec::get(format!("{}/ready", server.uri()))
        .with_method("POST")
        .with_request_body("ping")
        .with_header("X-Token", "first")
        .with_header("X-Token", "second")
        .expect_status(201)
        .expect_body("pong");

    let summary = run(&[check], settings(5_000, 50)).await.unwrap();
    assert_eq!(summary.rounds, 1);
}

#[tokio::test]
async fn test_put_without_body_sends_empty_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let check = CheckSpec::get(server.uri()).with_method("PUT");
    run(&[check], settings(5_000, 50)).await.unwrap();
}

#[tokio::test]
async fn test_head_check() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let check = CheckSpec::get(server.uri())
        .with_method("HEAD")
        .expect_status(204);
    run(&[check], settings(5_000, 50)).await.unwrap();
}

#[tokio::test]
async fn test_body_with_trailing_newline_never_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok\n"))
        .mount(&server)
        .await;

    let check = CheckSpec::get(server.uri()).expect_body("ok");
    let err = run(&[check], settings(300, 100)).await.unwrap_err();
    assert!(matches!(err, RunError::DeadlineExceeded { .. }));
}

#[tokio::test]
async fn test_resolved_check_is_requested_once() {
    let server = MockServer::start().await;
    Mock::given(path("/up"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/warming"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(path("/warming"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let checks = [
        CheckSpec::get(format!("{}/up", server.uri())),
        CheckSpec::get(format!("{}/warming", server.uri())),
    ];
    let summary = run(&checks, settings(10_000, 100)).await.unwrap();

    assert_eq!(summary.rounds, 3);
    assert_eq!(summary.requests, 4);
}

#[tokio::test]
async fn test_zero_status_does_not_accept_other_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let check = CheckSpec::get(server.uri()).expect_status(0);
    let err = run(&[check], settings(300, 100)).await.unwrap_err();
    assert!(matches!(err, RunError::DeadlineExceeded { .. }));
}

#[tokio::test]
async fn test_slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let timeout = Duration::from_millis(200);
    let check = CheckSpec::get(server.uri());
    let url = resolve_target(0, &check.target).unwrap();
    let request = build_request(0, &check, url, timeout).unwrap();

    let err = HttpTransport::new(timeout)
        .unwrap()
        .execute(request)
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Timeout), "got {:?}", err);
}

#[tokio::test]
async fn test_hanging_endpoint_is_retried_until_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let check = CheckSpec::get(server.uri());
    let err = run(&[check], settings(500, 100)).await.unwrap_err();

    match err {
        RunError::DeadlineExceeded { elapsed_millis } => {
            // each request gives up after the full run timeout
            assert!(elapsed_millis >= 500, "elapsed {}", elapsed_millis);
            assert!(elapsed_millis < 5_000, "elapsed {}", elapsed_millis);
        }
        other => panic!("expected DeadlineExceeded, got {:?}", other),
    }
}
