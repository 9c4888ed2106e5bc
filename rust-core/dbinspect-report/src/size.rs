// SPDX-License-Identifier: PMPL-1.0-or-later
//! Human-scaled byte counts.

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;

/// Format a byte count as KiB below one MiB and as MiB from one MiB up,
/// always with three fractional digits.
///
/// ```rust
/// use dbinspect_report::size::format_size;
///
/// assert_eq!(format_size(0), "0.000KiB");
/// assert_eq!(format_size(1536), "1.500KiB");
/// assert_eq!(format_size(1 << 20), "1.000MiB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes < MIB {
        format!("{:.3}KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.3}MiB", bytes as f64 / MIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_size(0), "0.000KiB");
    }

    #[test]
    fn test_kib_range() {
        assert_eq!(format_size(1), "0.001KiB");
        assert_eq!(format_size(1024), "1.000KiB");
        assert_eq!(format_size(16 * 1024), "16.000KiB");
        assert_eq!(format_size(MIB - 1), "1023.999KiB");
    }

    #[test]
    fn test_mib_boundary_is_inclusive() {
        assert_eq!(format_size(MIB), "1.000MiB");
        assert_eq!(format_size(MIB + MIB / 2), "1.500MiB");
    }

    #[test]
    fn test_large_values() {
        assert_eq!(format_size(1 << 30), "1024.000MiB");
        assert!(format_size(u64::MAX).ends_with("MiB"));
    }

    proptest! {
        #[test]
        fn test_below_one_mib_is_kib(bytes in 0u64..MIB) {
            let formatted = format_size(bytes);
            prop_assert!(formatted.ends_with("KiB"), "{}", formatted);
        }

        #[test]
        fn test_from_one_mib_is_mib(bytes in MIB..u64::MAX) {
            let formatted = format_size(bytes);
            prop_assert!(formatted.ends_with("MiB"), "{}", formatted);
        }

        #[test]
        fn test_three_fractional_digits(bytes in any::<u64>()) {
            let formatted = format_size(bytes);
            let number = &formatted[..formatted.len() - 3];
            let (_, fraction) = number.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 3);
        }
    }
}
