//! Teller cash-count walkthrough

use billetage_core::utils::MemoryStore;
use billetage_core::{catalog, SlipBuilder, SlipManager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💶 Billetage Core - Cash Count Example\n");

    let store = MemoryStore::new();
    let mut manager = SlipManager::new(store);

    // 1. Open a till-count slip with the full XAF denomination grid
    println!("🧾 Opening cash-count slip...");
    let slip = manager
        .register_slip(
            SlipBuilder::new("CAISSE-01-0117".to_string())
                .denominations(&catalog::standard_xaf_faces())
                .reference("BRD-2024-0117".to_string())
                .metadata("teller".to_string(), "T042".to_string())
                .build()?,
        )
        .await?;

    for line in &slip.lines {
        println!("  ✓ Line for {} {}", line.face_value, slip.currency);
    }
    println!();

    // 2. Record the teller's counts, exactly as typed
    println!("🔢 Recording counts...\n");

    let entries = [
        (0, "30"),  // 30 x 10 000
        (1, "9"),   //  9 x  5 000
        (2, "3"),   //  3 x  2 000
        (3, "2"),   //  2 x  1 000
        (4, "2"),   //  2 x    500 (notes)
        (7, "9"),   //  9 x     50
        (9, "3x"),  // sloppy entry, parses as 3 x 10
        (10, "no"), // garbled entry, coerces to 0
    ];

    for (index, raw) in entries {
        let total = manager.record_count(&slip.id, index, raw).await?;
        let current = manager.get_slip_required(&slip.id).await?;
        let line = current.line(index)?;
        println!(
            "  ✓ {:>5} x {:>6} = {:>8}   (running total: {})",
            line.count,
            line.face_value,
            line.amount(),
            total
        );
    }
    println!();

    // 3. Reconcile into the receipt payload
    println!("🧮 Reconciling slip...\n");
    let summary = manager.finalize_slip(&slip.id).await?;

    for line in summary.lines.iter().filter(|line| line.count > 0) {
        println!(
            "  {:>6} x {:>5} = {:>8}",
            line.face_value, line.count, line.amount
        );
    }
    println!("  {}", "-".repeat(32));
    println!("  Total:   {}", summary.receipt_line());
    println!("  Payload: {}", serde_json::to_string(&summary)?);
    println!();

    // 4. Reset the slip for the next count
    println!("♻️  Resetting slip...");
    manager.reset_slip(&slip.id).await?;
    let summary = manager.finalize_slip(&slip.id).await?;
    println!("  Total after reset: {}", summary.receipt_line());

    Ok(())
}
