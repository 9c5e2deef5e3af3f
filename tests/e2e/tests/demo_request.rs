use e2e::test_server::TestServer;
use serde_json::json;

async fn post_lead(server: &TestServer, lead: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(server.endpoint("/api/demo-request"))
        .header("content-type", "application/json")
        .body(json!({ "lead": lead }).to_string())
        .send()
        .await
        .expect("Failed to post demo request")
}

#[tokio::test]
async fn test_complete_lead_is_accepted() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = post_lead(
        &server,
        json!({
            "company": "Bâtisseurs SA",
            "company_size": "11-50",
            "first_name": "Marie",
            "last_name": "Durand",
            "email": "marie@batisseurs.fr",
            "phone": "0612345678",
            "message": "Deux appels d'offres par mois"
        }),
    )
    .await;

    assert!(
        response.status().is_success(),
        "Console relay should accept the lead, got {}",
        response.status()
    );
}

#[tokio::test]
async fn test_lead_without_phone_is_rejected() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = post_lead(
        &server,
        json!({
            "company": "Bâtisseurs SA",
            "company_size": "1-10",
            "first_name": "Marie",
            "last_name": "Durand",
            "email": "marie@batisseurs.fr",
            "phone": ""
        }),
    )
    .await;

    assert!(!response.status().is_success());
}
