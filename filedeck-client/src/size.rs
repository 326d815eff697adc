const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const STEP: u64 = 1024;

/// Format a byte count as `"<value> <unit>"` with two decimals.
///
/// Zero is rendered as `"0 B"`. Counts beyond the terabyte range stay in TB.
pub fn bytes_to_human_readable(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 B");
    }

    let mut exponent = 0;
    let mut scale = 1u64;
    while exponent + 1 < UNITS.len() && bytes / scale >= STEP {
        scale *= STEP;
        exponent += 1;
    }

    let value = bytes as f64 / scale as f64;
    format!("{value:.2} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn given_zero_when_formatted_then_plain_zero_bytes() {
        assert_eq!(bytes_to_human_readable(0), "0 B");
    }

    #[test]
    fn given_unit_boundaries_when_formatted_then_largest_unit_is_used() {
        assert_eq!(bytes_to_human_readable(1), "1.00 B");
        assert_eq!(bytes_to_human_readable(1023), "1023.00 B");
        assert_eq!(bytes_to_human_readable(1024), "1.00 KB");
        assert_eq!(bytes_to_human_readable(1536), "1.50 KB");
        assert_eq!(bytes_to_human_readable(1_048_576), "1.00 MB");
        assert_eq!(bytes_to_human_readable(1_073_741_824), "1.00 GB");
        assert_eq!(bytes_to_human_readable(1_099_511_627_776), "1.00 TB");
    }

    #[test]
    fn given_count_past_terabytes_when_formatted_then_unit_is_clamped() {
        assert_eq!(
            bytes_to_human_readable(1024 * 1_099_511_627_776),
            "1024.00 TB"
        );
    }
}
