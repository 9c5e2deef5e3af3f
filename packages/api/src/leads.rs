use crate::types::LeadDraft;
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::{debug, info, warn};

/// Forward a demo request to the configured relay.
///
/// Returns once the relay has acknowledged the lead. Any relay failure is
/// reported as a single error; the caller decides whether to resubmit.
#[dioxus::prelude::post("/api/demo-request")]
pub async fn request_demo(lead: LeadDraft) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = lead;
        Err(ServerFnError::new("request_demo is server-only"))
    }

    #[cfg(feature = "server")]
    {
        submit(lead).await
    }
}

#[cfg(feature = "server")]
pub(crate) async fn submit(lead: LeadDraft) -> Result<(), ServerFnError> {
    let label = crate::relay::lead_label(&lead);
    debug!("leads.submit: lead={}", label);

    let missing = lead.missing_fields();
    if !missing.is_empty() {
        warn!("leads.submit: rejected lead={} missing={:?}", label, missing);
        return Err(ServerFnError::new(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    let state = crate::state::AppState::global().map_err(|e| ServerFnError::new(e.to_string()))?;
    state.relay.forward(&lead).await.map_err(|e| {
        warn!(
            "leads.submit: relay={} failed lead={} err={:#}",
            state.relay.name(),
            label,
            e
        );
        ServerFnError::new(e.to_string())
    })?;

    info!("leads.submit: relay={} ok lead={}", state.relay.name(), label);
    Ok(())
}
