//! Batch runner behavior: blank lines, per-email failures, missing files.

use std::io::Write as _;
use std::path::Path;

use mfaenum::Error;
use mfaenum::batch::run_file;
use mfaenum::probe::Prober;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn sms_server(expected_requests: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mfa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mfaType": "SMS"})))
        .expect(expected_requests)
        .mount(&server)
        .await;
    server
}

fn email_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn skips_blank_lines_and_keeps_order() {
    let server = sms_server(2).await;
    let file = email_file("alice@example.com\n\n  bob@example.com  \n\n");

    let prober = Prober::with_endpoint(format!("{}/mfa", server.uri())).unwrap();
    let mut out = Vec::new();
    let report = run_file(&prober, file.path(), &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, "alice@example.com: SMS\nbob@example.com: SMS\n");
    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.errors, 0);
}

#[tokio::test]
async fn continues_past_invalid_lines() {
    let server = sms_server(1).await;
    let file = email_file("not-an-email\ncarol@example.com\n");

    let prober = Prober::with_endpoint(format!("{}/mfa", server.uri())).unwrap();
    let mut out = Vec::new();
    let report = run_file(&prober, file.path(), &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "Error: 'not-an-email' is not a valid email address. Skipping.",
            "carol@example.com: SMS",
        ]
    );
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);
}

#[tokio::test]
async fn missing_file_is_fatal() {
    let prober = Prober::with_endpoint("http://127.0.0.1:9/mfa").unwrap();
    let mut out = Vec::new();
    let err = run_file(&prober, Path::new("/no/such/file.txt"), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::FileOpen { .. }));
    assert!(err.to_string().contains("/no/such/file.txt"));
    assert!(out.is_empty());
}
