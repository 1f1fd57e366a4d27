use math_api::api::routes;
use math_api::utils::monitor::SystemMonitor;
use math_api::MathService;
use serde_json::Value;
use std::sync::Arc;

/// Serves the real router on an ephemeral port and returns its base URL.
async fn spawn_server(monitor_enabled: bool) -> String {
    let router = routes::build_router(
        Arc::new(MathService::new()),
        Arc::new(SystemMonitor::new(monitor_enabled)),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_prime_endpoint_end_to_end() {
    let base = spawn_server(false).await;

    let cases = [
        ("7", "true"),
        ("4", "false"),
        ("1", "false"),
        ("0", "false"),
        ("-5", "false"),
        ("7919", "true"),
    ];

    for (n, expected) in cases {
        let response = reqwest::get(format!("{}/api/math/prime/{}", base, n))
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "prime/{}", n);
        assert_eq!(response.text().await.unwrap(), expected, "prime/{}", n);
    }
}

#[tokio::test]
async fn test_factorial_endpoint_end_to_end() {
    let base = spawn_server(false).await;

    let cases = [
        ("0", "1"),
        ("1", "1"),
        ("5", "120"),
        ("20", "2432902008176640000"),
    ];

    for (n, expected) in cases {
        let response = reqwest::get(format!("{}/api/math/factorial/{}", base, n))
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "factorial/{}", n);
        assert_eq!(response.text().await.unwrap(), expected, "factorial/{}", n);
    }
}

#[tokio::test]
async fn test_factorial_negative_input_returns_400_with_error_body() {
    let base = spawn_server(false).await;

    let response = reqwest::get(format!("{}/api/math/factorial/-3", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("-3"));
    assert!(body["suggestion"].as_str().unwrap().contains("non-negative"));
}

#[tokio::test]
async fn test_factorial_overflow_returns_422() {
    let base = spawn_server(false).await;

    let response = reqwest::get(format!("{}/api/math/factorial/21", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("64-bit"));
}

#[tokio::test]
async fn test_malformed_path_param_returns_400() {
    let base = spawn_server(false).await;

    for uri in ["/api/math/prime/abc", "/api/math/factorial/1.5"] {
        let response = reqwest::get(format!("{}{}", base, uri)).await.unwrap();
        assert_eq!(response.status(), 400, "{}", uri);
    }
}

#[tokio::test]
async fn test_repeated_calls_are_idempotent() {
    let base = spawn_server(false).await;

    let first = reqwest::get(format!("{}/api/math/prime/97", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let second = reqwest::get(format!("{}/api/math/prime/97", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(first, second);

    let first = reqwest::get(format!("{}/api/math/factorial/12", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let second = reqwest::get(format!("{}/api/math/factorial/12", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_health_endpoint() {
    let base = spawn_server(false).await;

    let response = reqwest::get(format!("{}/api/health", base)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_status_endpoint_reports_service_info() {
    let base = spawn_server(false).await;

    let response = reqwest::get(format!("{}/api/status", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["service"], "math-api");
    assert_eq!(body["status"], "running");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[cfg(feature = "monitor")]
#[tokio::test]
async fn test_status_endpoint_includes_memory_stats_when_monitoring() {
    let base = spawn_server(true).await;

    let response = reqwest::get(format!("{}/api/status", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert!(body["memory_mb"].is_u64());
    assert!(body["peak_memory_mb"].is_u64());
}
