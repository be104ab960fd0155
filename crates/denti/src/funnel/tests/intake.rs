use std::sync::Arc;

use super::common::{contact_payload, BrokenLeadRepository, MemoryLeadRepository};
use crate::funnel::repository::{LeadRepository, RepositoryError};
use crate::funnel::service::{LeadIntakeError, LeadIntakeService};

#[test]
fn submissions_receive_strictly_increasing_ids_from_one() {
    let repository = Arc::new(MemoryLeadRepository::default());
    let service = LeadIntakeService::new(repository.clone());

    for expected_id in 1..=3u64 {
        let lead = service
            .submit(contact_payload(&format!("lead {expected_id}")))
            .expect("submission stores");
        assert_eq!(lead.id, expected_id);
        assert_eq!(
            repository.list().expect("list succeeds").len(),
            expected_id as usize
        );
    }
}

#[test]
fn submitted_leads_are_listed_in_insertion_order() {
    let service = LeadIntakeService::new(Arc::new(MemoryLeadRepository::default()));

    service.submit(contact_payload("김민수")).expect("stores");
    service.submit(contact_payload("박지영")).expect("stores");

    let leads = service.list().expect("list succeeds");
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].payload_str("name"), Some("김민수"));
    assert_eq!(leads[1].payload_str("name"), Some("박지영"));
    assert!(leads[0].timestamp <= leads[1].timestamp);
}

#[test]
fn free_form_payloads_are_stored_untouched() {
    let service = LeadIntakeService::new(Arc::new(MemoryLeadRepository::default()));

    let mut payload = contact_payload("김민수");
    payload.insert(
        "unexpectedNested".to_string(),
        serde_json::json!({ "anything": ["goes", 1, null] }),
    );

    let lead = service.submit(payload.clone()).expect("stores");
    assert_eq!(lead.payload, payload);
    assert_eq!(lead.payload_number("score"), Some(20));
    assert_eq!(lead.payload_str("leadQuality"), Some("HOT"));
}

#[test]
fn client_supplied_id_and_timestamp_are_discarded() {
    let service = LeadIntakeService::new(Arc::new(MemoryLeadRepository::default()));

    let mut payload = contact_payload("김민수");
    payload.insert("id".to_string(), serde_json::json!(999));
    payload.insert("timestamp".to_string(), serde_json::json!("whenever"));

    let lead = service.submit(payload).expect("stores");
    assert_eq!(lead.id, 1);
    assert!(!lead.payload.contains_key("id"));
    assert!(!lead.payload.contains_key("timestamp"));

    // the flattened wire form carries the server-assigned values only
    let value = serde_json::to_value(&lead).expect("serializes");
    assert_eq!(value["id"], 1);
    assert_ne!(value["timestamp"], "whenever");
}

#[test]
fn lead_serialization_flattens_the_payload() {
    let service = LeadIntakeService::new(Arc::new(MemoryLeadRepository::default()));
    let lead = service.submit(contact_payload("김민수")).expect("stores");

    let value = serde_json::to_value(&lead).expect("serializes");
    assert_eq!(value["id"], 1);
    assert_eq!(value["name"], "김민수");
    assert_eq!(value["privacyConsent"], true);
    assert!(value["timestamp"].as_str().expect("timestamp is a string").contains('T'));
}

#[test]
fn repository_failures_surface_as_intake_errors() {
    let service = LeadIntakeService::new(Arc::new(BrokenLeadRepository));

    match service.submit(contact_payload("김민수")) {
        Err(LeadIntakeError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "store offline");
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }

    assert!(service.list().is_err());
}
