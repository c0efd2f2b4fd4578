//! Tests for the binary's exit codes and output streams.

use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runs the built `hop_trace` binary and returns (exit code, stdout, stderr).
async fn run_hop_trace(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_hop_trace"))
        .args(args)
        .args(["--log-level", "error", "--timeout-seconds", "5"])
        .output()
        .await
        .expect("Failed to run hop_trace binary");
    (
        output.status.code().expect("process exited normally"),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

/// Returns an address with nothing listening on it.
fn closed_port_addr() -> std::net::SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

#[tokio::test]
async fn test_successful_trace_exits_zero_and_prints_dump() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/end"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/end"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url = format!("{}/start", server.uri());
    let (code, stdout, _) = run_hop_trace(&[&url]).await;

    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("1. {url} 301 Moved Permanently error=none"));
    assert_eq!(lines[1], format!("2. {}/end 200 OK error=none", server.uri()));
}

#[tokio::test]
async fn test_transport_failure_exits_one() {
    let addr = closed_port_addr();
    // No scheme: http:// is prepended
    let (code, stdout, stderr) = run_hop_trace(&[&addr.to_string()]).await;

    assert_eq!(code, 1);
    assert!(stdout.contains("<no response>"), "stdout: {stdout}");
    assert!(stderr.contains("hop_trace error"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_max_redirects_exceeded_exits_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/loop"))
        .mount(&server)
        .await;

    let url = format!("{}/loop", server.uri());
    let (code, stdout, stderr) = run_hop_trace(&[&url, "--max-redirects", "3"]).await;

    assert_eq!(code, 1);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stderr.contains("Stopped after 3 redirects"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_invalid_url_exits_one() {
    let (code, stdout, stderr) = run_hop_trace(&["http://[::1"]).await;

    assert_eq!(code, 1);
    assert!(stdout.is_empty(), "stdout: {stdout}");
    assert!(stderr.contains("Invalid URL"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_bad_header_exits_two() {
    let (code, stdout, stderr) =
        run_hop_trace(&["example.com", "-H", "no colon here"]).await;

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid header"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_zero_max_redirects_exits_two() {
    let (code, _, stderr) = run_hop_trace(&["example.com", "--max-redirects", "0"]).await;

    assert_eq!(code, 2);
    assert!(stderr.contains("max_redirects"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_json_output_on_failure_includes_error() {
    let addr = closed_port_addr();
    let url = format!("http://{addr}/");
    let (code, stdout, _) = run_hop_trace(&[&url, "--output", "json"]).await;

    assert_eq!(code, 1);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("JSON report");
    assert_eq!(report["hops"].as_array().map(Vec::len), Some(1));
    assert_eq!(report["hops"][0]["status"], serde_json::Value::Null);
    assert!(report["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Request to")));
}
