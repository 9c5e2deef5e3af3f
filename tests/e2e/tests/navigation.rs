use e2e::test_server::TestServer;

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("CloserAI"), "Should render the brand");
    for id in ["fonctionnalités", "process", "pourquoi-nous", "pricing"] {
        assert!(body.contains(&format!("id=\"{id}\"")), "Missing section {id}");
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.endpoint("/api/health"))
        .await
        .expect("Failed to call health check");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("OK"));
}
