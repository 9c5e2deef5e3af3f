#![cfg(all(test, feature = "server"))]

use crate::test_support::{RecordingRelay, StateGuard};
use crate::types::{CompanySize, LeadDraft};

fn lead() -> LeadDraft {
    LeadDraft {
        company: "Sécurité Plus".to_string(),
        company_size: CompanySize::Small,
        first_name: "Yanis".to_string(),
        last_name: "Benali".to_string(),
        email: "yanis@securiteplus.fr".to_string(),
        phone: "0712345678".to_string(),
        message: String::new(),
    }
}

#[tokio::test]
async fn submit_forwards_complete_lead() {
    let relay = RecordingRelay::accepting();
    let _guard = StateGuard::install(relay.clone());

    crate::leads::submit(lead()).await.expect("lead accepted");

    assert_eq!(relay.count(), 1);
    let received = relay.received.lock().unwrap();
    assert_eq!(received[0].company, "Sécurité Plus");
}

#[tokio::test]
async fn submit_rejects_incomplete_lead_without_calling_relay() {
    let relay = RecordingRelay::accepting();
    let _guard = StateGuard::install(relay.clone());

    let incomplete = LeadDraft {
        email: " ".to_string(),
        ..lead()
    };
    let err = crate::leads::submit(incomplete).await.unwrap_err();

    assert!(err.to_string().contains("email"));
    assert_eq!(relay.count(), 0);
}

#[tokio::test]
async fn submit_surfaces_relay_failure() {
    let relay = RecordingRelay::failing();
    let _guard = StateGuard::install(relay.clone());

    let err = crate::leads::submit(lead()).await.unwrap_err();

    assert!(err.to_string().contains("relay unavailable"));
    assert_eq!(relay.count(), 1);
}

#[tokio::test]
async fn submit_without_state_fails() {
    let err = crate::leads::submit(lead()).await.unwrap_err();
    assert!(err.to_string().contains("set_global"));
}
