//! French number-to-words conversion for monetary amounts
//!
//! Spelled-out amounts appear on receipts and deposit slips next to the
//! numeric total, so the wording follows the conventions used on printed
//! financial documents: lowercase, space/hyphen separated, `et un` for 21,
//! 31, 41, 51 and 61, `soixante et onze` for 71, `quatre-vingts` for a bare
//! 80, and plural `cents`/`vingts` only when no numeral follows.

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

const ONES: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];

const TEENS: [&str; 10] = [
    "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
    "dix-neuf",
];

// 70..79 and 90..99 have no dedicated tens word; they reuse the 60 and 80
// bases joined with a teens word, so indexes 7 and 9 repeat the base.
const TENS: [&str; 10] = [
    "",
    "dix",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante",
    "quatre-vingt",
    "quatre-vingt",
];

/// Spell out a non-negative integer amount in French.
///
/// Total over all of `u64`; zero yields `"zéro"`. Intended for currency
/// magnitudes (observed usage stays below 10^9); above that the wording
/// composes recursively (`"... mille millions"`) rather than switching to
/// `milliard`.
pub fn amount_in_words(amount: u64) -> String {
    if amount == 0 {
        return "zéro".to_string();
    }
    to_words(amount, true)
}

/// Spell out a monetary amount in French.
///
/// Fractional amounts are truncated before conversion, matching how slips
/// round: the currency has no subunit, so fractions only ever come from
/// upstream rate arithmetic. Negative amounts are rejected rather than
/// spelled out.
pub fn decimal_amount_in_words(amount: &BigDecimal) -> Result<String, WordsError> {
    if *amount < BigDecimal::from(0) {
        return Err(WordsError::NegativeAmount(amount.to_string()));
    }

    let truncated = amount.with_scale_round(0, RoundingMode::Floor);
    let n = truncated
        .to_u64()
        .ok_or_else(|| WordsError::AmountTooLarge(amount.to_string()))?;

    Ok(amount_in_words(n))
}

// Recursive tiering: each arm spells its own magnitude and delegates the
// remainder back here. Never called with 0.
//
// `terminal` is true when no numeral follows this component in the final
// string; "cents" and "quatre-vingts" take their plural s only then
// ("deux cents" but "deux cent mille"). "millions" is a noun, not a
// numeral, so a multiplier in front of it still counts as terminal
// ("deux cents millions").
fn to_words(n: u64, terminal: bool) -> String {
    match n {
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => tens_words(n, terminal),
        100..=999 => {
            let hundreds = n / 100;
            let remainder = n % 100;
            let prefix = match (hundreds, remainder) {
                (1, _) => "cent".to_string(),
                (_, 0) if terminal => format!("{} cents", ONES[hundreds as usize]),
                _ => format!("{} cent", ONES[hundreds as usize]),
            };
            append_remainder(prefix, remainder, terminal)
        }
        1_000..=999_999 => {
            let thousands = n / 1_000;
            let remainder = n % 1_000;
            // "mille" is invariable and never preceded by "un"
            let prefix = if thousands == 1 {
                "mille".to_string()
            } else {
                format!("{} mille", to_words(thousands, false))
            };
            append_remainder(prefix, remainder, terminal)
        }
        _ => {
            let millions = n / 1_000_000;
            let remainder = n % 1_000_000;
            let prefix = if millions == 1 {
                "un million".to_string()
            } else {
                format!("{} millions", to_words(millions, true))
            };
            append_remainder(prefix, remainder, terminal)
        }
    }
}

fn append_remainder(prefix: String, remainder: u64, terminal: bool) -> String {
    if remainder == 0 {
        prefix
    } else {
        format!("{} {}", prefix, to_words(remainder, terminal))
    }
}

fn tens_words(n: u64, terminal: bool) -> String {
    let tens = n / 10;
    let unit = n % 10;

    match tens {
        // 70..79 and 90..99: base plus a teens word. 71 takes "et",
        // 91 does not.
        7 | 9 => {
            let teen = n - (tens - 1) * 10;
            if n == 71 {
                "soixante et onze".to_string()
            } else {
                format!("{}-{}", TENS[tens as usize], TEENS[(teen - 10) as usize])
            }
        }
        // a bare 80 in final position is pluralized; 81..89 hyphenate
        // without "et"
        8 => {
            if unit == 0 {
                if terminal {
                    "quatre-vingts".to_string()
                } else {
                    "quatre-vingt".to_string()
                }
            } else {
                format!("quatre-vingt-{}", ONES[unit as usize])
            }
        }
        _ => {
            if unit == 0 {
                TENS[tens as usize].to_string()
            } else if unit == 1 {
                format!("{} et un", TENS[tens as usize])
            } else {
                format!("{}-{}", TENS[tens as usize], ONES[unit as usize])
            }
        }
    }
}

/// Errors from the monetary entry point
#[derive(Debug, thiserror::Error)]
pub enum WordsError {
    #[error("Cannot spell out negative amount: {0}")]
    NegativeAmount(String),
    #[error("Amount too large to spell out: {0}")]
    AmountTooLarge(String),
}
