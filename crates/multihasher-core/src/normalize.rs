//! Input normalizer — fail-soft parsing of human-typed numeric strings
//!
//! Level and repetition counts arrive as live-typed text and may carry `K`
//! or `M` suffixes with decimal multipliers ("1.5K" → 1500). Malformed input
//! never errors; it falls back to 1 and the result is clamped to `max`.

/// Parse a raw numeric string into a bounded count in `[1, max]`.
///
/// Pure and deterministic. `K` multiplies the decimal prefix by 1,000,
/// `M` by 1,000,000; anything unparseable yields 1.
pub fn normalize(raw: &str, max: u32) -> u32 {
    let trimmed = raw.trim().to_uppercase();
    let value: i64 = if let Some(prefix) = trimmed.strip_suffix('K') {
        scaled(prefix, 1_000.0)
    } else if let Some(prefix) = trimmed.strip_suffix('M') {
        scaled(prefix, 1_000_000.0)
    } else {
        trimmed.parse::<i64>().unwrap_or(1)
    };
    value.clamp(1, max as i64) as u32
}

fn scaled(prefix: &str, factor: f64) -> i64 {
    match prefix.parse::<f64>() {
        Ok(n) => (n * factor) as i64,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(normalize("7", 1000), 7);
        assert_eq!(normalize(" 42 ", 1000), 42);
        assert_eq!(normalize("1000", 1000), 1000);
    }

    #[test]
    fn k_and_m_suffixes() {
        assert_eq!(normalize("5K", 100_000), 5_000);
        assert_eq!(normalize("5k", 100_000), 5_000);
        assert_eq!(normalize("1.5K", 100_000), 1_500);
        assert_eq!(normalize("2M", 100_000), 100_000); // clamped
        assert_eq!(normalize("0.05M", 100_000), 50_000);
    }

    #[test]
    fn malformed_input_defaults_to_one() {
        assert_eq!(normalize("abc", 1000), 1);
        assert_eq!(normalize("", 1000), 1);
        assert_eq!(normalize("K", 1000), 1);
        assert_eq!(normalize("1.2.3K", 1000), 1);
    }

    #[test]
    fn results_stay_in_range() {
        assert_eq!(normalize("0", 1000), 1);
        assert_eq!(normalize("-5", 1000), 1);
        assert_eq!(normalize("-1K", 1000), 1);
        assert_eq!(normalize("999999999", 1000), 1000);
    }
}
