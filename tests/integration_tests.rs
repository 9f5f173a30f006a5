//! Integration tests for billetage-core

use billetage_core::{
    amount_in_words, catalog,
    utils::{MemoryStore, StrictCountValidator},
    BilletageError, SlipBuilder, SlipManager, SlipSummary,
};

#[tokio::test]
async fn test_complete_cash_count_workflow() {
    let store = MemoryStore::new();
    let mut manager = SlipManager::new(store);

    // Open a full XAF till-count slip with teller metadata
    let slip = manager
        .register_slip(
            SlipBuilder::new("CAISSE-01-0117".to_string())
                .denominations(&catalog::standard_xaf_faces())
                .reference("BRD-2024-0117".to_string())
                .metadata("teller".to_string(), "T042".to_string())
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(slip.lines.len(), 11);
    assert_eq!(slip.total(), 0);

    // Count the drawer: 30 x 10000, 9 x 5000, 1 x 2000, 1 x 1000 in notes,
    // 9 x 50 and 3 x 10 in coins
    manager.record_count(&slip.id, 0, "30").await.unwrap();
    manager.record_count(&slip.id, 1, "9").await.unwrap();
    manager.record_count(&slip.id, 2, "1").await.unwrap();
    manager.record_count(&slip.id, 3, "1").await.unwrap();
    manager.record_count(&slip.id, 7, "9").await.unwrap();
    let total = manager.record_count(&slip.id, 9, "3").await.unwrap();

    assert_eq!(total, 348_480);

    let summary = manager.finalize_slip(&slip.id).await.unwrap();
    assert_eq!(summary.total, 348_480);
    assert_eq!(
        summary.total_in_words,
        "trois cent quarante-huit mille quatre cent quatre-vingts"
    );
    assert_eq!(
        summary.receipt_line(),
        "348 480 XAF (trois cent quarante-huit mille quatre cent quatre-vingts)"
    );
    assert_eq!(summary.reference.as_deref(), Some("BRD-2024-0117"));
    assert_eq!(
        summary.metadata.get("teller").map(String::as_str),
        Some("T042")
    );
}

#[tokio::test]
async fn test_deposit_slip_scenario() {
    let store = MemoryStore::new();
    let mut manager = SlipManager::new(store);

    let slip = manager.open_slip(&[500, 100, 50]).await.unwrap();

    manager.set_count(&slip.id, 0, 2).await.unwrap();
    manager.set_count(&slip.id, 1, 5).await.unwrap();
    manager.set_count(&slip.id, 2, 10).await.unwrap();

    let summary = manager.finalize_slip(&slip.id).await.unwrap();
    assert_eq!(summary.lines[0].amount, 1000);
    assert_eq!(summary.lines[1].amount, 500);
    assert_eq!(summary.lines[2].amount, 500);
    assert_eq!(summary.total, 2000);
    assert_eq!(summary.total_in_words, "deux mille");
}

#[tokio::test]
async fn test_invalid_entry_coerces_to_zero() {
    let store = MemoryStore::new();
    let mut manager = SlipManager::new(store);

    let slip = manager.open_slip(&[10_000, 500, 100]).await.unwrap();

    manager.record_count(&slip.id, 0, "4").await.unwrap();
    manager.record_count(&slip.id, 1, "abc").await.unwrap();
    manager.record_count(&slip.id, 2, "-7").await.unwrap();

    let summary = manager.finalize_slip(&slip.id).await.unwrap();
    assert_eq!(summary.total, 40_000);

    // overwriting a good count with garbage clears the line
    manager.record_count(&slip.id, 0, "").await.unwrap();
    let summary = manager.finalize_slip(&slip.id).await.unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.total_in_words, "zéro");
}

#[tokio::test]
async fn test_strict_policy_blocks_invalid_entry() {
    let store = MemoryStore::new();
    let mut manager = SlipManager::with_validator(store, Box::new(StrictCountValidator));

    let slip = manager.open_slip(&[500]).await.unwrap();
    manager.record_count(&slip.id, 0, "6").await.unwrap();

    let rejected = manager.record_count(&slip.id, 0, "abc").await;
    assert!(matches!(rejected, Err(BilletageError::Validation(_))));

    // the slip keeps its last valid state
    let summary = manager.finalize_slip(&slip.id).await.unwrap();
    assert_eq!(summary.total, 3000);
}

#[tokio::test]
async fn test_reset_returns_slip_to_zero() {
    let store = MemoryStore::new();
    let mut manager = SlipManager::new(store);

    let slip = manager.open_slip(&[2000, 500]).await.unwrap();
    manager.set_count(&slip.id, 0, 8).await.unwrap();
    manager.set_count(&slip.id, 1, 1).await.unwrap();
    assert_eq!(
        manager.finalize_slip(&slip.id).await.unwrap().total,
        16_500
    );

    manager.reset_slip(&slip.id).await.unwrap();

    let summary = manager.finalize_slip(&slip.id).await.unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.total_in_words, "zéro");
    assert!(summary.lines.iter().all(|line| line.count == 0));
}

#[tokio::test]
async fn test_summary_payload_serialization() {
    let store = MemoryStore::new();
    let mut manager = SlipManager::new(store);

    let slip = manager
        .register_slip(
            SlipBuilder::new("slip1".to_string())
                .denominations(&[500, 100, 50])
                .reference("BRD-2024-0042".to_string())
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    manager.set_count(&slip.id, 0, 2).await.unwrap();
    manager.set_count(&slip.id, 1, 5).await.unwrap();
    manager.set_count(&slip.id, 2, 10).await.unwrap();

    let summary = manager.finalize_slip(&slip.id).await.unwrap();
    let payload = serde_json::to_value(&summary).unwrap();

    assert_eq!(payload["slip_id"], "slip1");
    assert_eq!(payload["reference"], "BRD-2024-0042");
    assert_eq!(payload["currency"], "XAF");
    assert_eq!(payload["total"], 2000);
    assert_eq!(payload["total_in_words"], "deux mille");
    assert_eq!(payload["lines"][0]["face_value"], 500);
    assert_eq!(payload["lines"][0]["count"], 2);
    assert_eq!(payload["lines"][0]["amount"], 1000);

    let decoded: SlipSummary = serde_json::from_value(payload).unwrap();
    assert_eq!(decoded, summary);
}

#[tokio::test]
async fn test_slip_lifecycle_in_store() {
    let store = MemoryStore::new();
    let mut manager = SlipManager::new(store);

    let first = manager.open_slip(&[500]).await.unwrap();
    let second = manager.open_slip(&[1000]).await.unwrap();
    assert_ne!(first.id, second.id);

    assert_eq!(manager.list_slips().await.unwrap().len(), 2);

    manager.delete_slip(&first.id).await.unwrap();
    assert_eq!(manager.list_slips().await.unwrap().len(), 1);
    assert!(manager.get_slip(&first.id).await.unwrap().is_none());

    assert!(matches!(
        manager.delete_slip(&first.id).await,
        Err(BilletageError::SlipNotFound(_))
    ));
}

#[test]
fn test_words_fixtures() {
    assert_eq!(amount_in_words(0), "zéro");
    assert_eq!(amount_in_words(21), "vingt et un");
    assert_eq!(amount_in_words(71), "soixante et onze");
    assert_eq!(amount_in_words(80), "quatre-vingts");
    assert_eq!(amount_in_words(81), "quatre-vingt-un");
    assert_eq!(amount_in_words(100), "cent");
    assert_eq!(amount_in_words(200), "deux cents");
    assert_eq!(amount_in_words(1000), "mille");
    assert_eq!(amount_in_words(2000), "deux mille");
    assert_eq!(amount_in_words(1_000_000), "un million");
    assert_eq!(
        amount_in_words(348_480),
        "trois cent quarante-huit mille quatre cent quatre-vingts"
    );
}
