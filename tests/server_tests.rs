//! Integration tests driving the HTTP surface end to end.
//!
//! Each test binds the router to an ephemeral port and talks to it over a
//! real socket, so status codes, headers, and 404 fallthrough are exercised
//! exactly as a container health check would see them.

use docker_copy_command::routes::create_router;
use docker_copy_command::routes::root::ROOT_BODY;

/// Bind the application to an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, create_router())
            .await
            .expect("Server error");
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn root_returns_fixed_line() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let content_type = response.headers()["content-type"]
        .to_str()
        .expect("content-type is not valid UTF-8")
        .to_string();
    assert!(
        content_type.starts_with("text/plain"),
        "unexpected content type: {content_type}"
    );

    assert_eq!(response.headers()["cache-control"], "no-store");
    // Spelled out rather than using the constant: this is the published
    // contract of the endpoint, and the constant must match it.
    assert_eq!(
        response.text().await.expect("Failed to read body"),
        "Docker Copy Command Application is Running"
    );
    assert_eq!(ROOT_BODY, "Docker Copy Command Application is Running");
}

#[tokio::test]
async fn unknown_path_falls_through_to_404() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/nonexistent"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    assert_ne!(response.text().await.expect("Failed to read body"), ROOT_BODY);
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    for i in 0..100 {
        let response = client
            .get(format!("{base}/"))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200, "status drifted at request {i}");
        assert_eq!(
            response.text().await.expect("Failed to read body"),
            ROOT_BODY,
            "body drifted at request {i}"
        );
    }
}
