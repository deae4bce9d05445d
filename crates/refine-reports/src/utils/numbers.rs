/// Format a count with thousands separators ("1234567" -> "1,234,567").
///
/// Refinement reports quote exact record counts, so no lossy K/M suffixes.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod test {
    use crate::utils::numbers::group_thousands;

    #[test]
    fn test_group_small() {
        assert_eq!(group_thousands(789), "789".to_string())
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(4_536), "4,536".to_string())
    }

    #[test]
    fn test_group_millions() {
        assert_eq!(group_thousands(2_336_123), "2,336,123".to_string())
    }

    #[test]
    fn test_group_boundary() {
        assert_eq!(group_thousands(1_000), "1,000".to_string());
        assert_eq!(group_thousands(999), "999".to_string());
        assert_eq!(group_thousands(0), "0".to_string());
    }
}
