//! French amount-in-words examples

use std::str::FromStr;

use bigdecimal::BigDecimal;
use billetage_core::{amount_in_words, decimal_amount_in_words};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💶 Billetage Core - Amount In Words Examples\n");

    // 1. The irregular corners of French number naming
    println!("📖 Irregular forms:");
    for n in [0, 21, 71, 80, 81, 91, 100, 200, 1000, 348_480] {
        println!("  {:>9} → {}", n, amount_in_words(n));
    }
    println!();

    // 2. Receipt-sized amounts
    println!("🧾 Receipt amounts:");
    for n in [2_000u64, 25_500, 150_000, 1_000_000, 12_000_345] {
        println!("  {:>9} XAF → {}", n, amount_in_words(n));
    }
    println!();

    // 3. Monetary entry point: fractions are truncated, negatives rejected
    println!("🔍 Monetary entry point:");
    let amount = BigDecimal::from_str("2000.75")?;
    println!("  {} → {}", amount, decimal_amount_in_words(&amount)?);

    let negative = BigDecimal::from(-500);
    match decimal_amount_in_words(&negative) {
        Ok(words) => println!("  {} → {}", negative, words),
        Err(err) => println!("  {} → rejected: {}", negative, err),
    }

    Ok(())
}
