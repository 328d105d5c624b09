//! CPF check-digit validation and canonical/display conversions.
//!
//! A CPF is an 11-digit Brazilian taxpayer ID: 9 base digits followed by two
//! check digits computed as weighted modular sums over the preceding digits.
//! Everything here is pure and panic-free; malformed input just fails
//! validation.

/// Strips every non-digit character from `raw`.
///
/// The result is the canonical storage form when 11 digits remain; shorter
/// results are returned as-is so callers can length-check.
pub fn normalize_cpf(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reformats a canonical 11-digit CPF as `DDD.DDD.DDD-DD`.
///
/// Inputs that are not 11 digits long are returned unchanged.
pub fn format_cpf(digits: &str) -> String {
    if digits.len() != 11 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Validates a CPF in any formatting (punctuation is stripped first).
///
/// Returns false for inputs that do not contain exactly 11 digits, for the
/// known-invalid all-repeated-digit sequences ("11111111111" etc.), and for
/// digit strings whose two trailing check digits do not match the weighted
/// mod-11 checksum of the preceding digits.
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }

    // Sequences like 000... or 111... satisfy the checksum but are not issued.
    // Only this single-repeated-digit pattern is blacklisted.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9]) && digits[10] == check_digit(&digits[..10])
}

/// Weighted mod-11 check digit over `base` (9 digits for the first check
/// digit, 10 for the second). The leading weight is `base.len() + 1`.
fn check_digit(base: &[u32]) -> u32 {
    let start = base.len() as u32 + 1;
    let sum: u32 = base
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (start - i as u32))
        .sum();

    let remainder = 11 - (sum % 11);
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpfs() {
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("85351346893"));
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("529.982.247-25"));
    }

    #[test]
    fn test_invalid_checksum() {
        assert!(!is_valid_cpf("12345678900"));
        assert!(!is_valid_cpf("52998224724"));
        assert!(!is_valid_cpf("52998224735"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("123"));
        assert!(!is_valid_cpf("123.456.78"));
        assert!(!is_valid_cpf("529982247250"));
    }

    #[test]
    fn test_repeated_digit_sequences() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_valid_cpf(&cpf), "{} should be invalid", cpf);
        }
        assert!(!is_valid_cpf("111.111.111-11"));
    }

    #[test]
    fn test_non_digit_noise() {
        assert!(!is_valid_cpf("abc.def.ghi-jk"));
        // Stripping noise can still leave a valid 11-digit sequence.
        assert!(is_valid_cpf("529 982 247 25"));
        assert!(is_valid_cpf("529-982-247.25"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_cpf("529.982.247-25"), "52998224725");
        assert_eq!(normalize_cpf("52998224725"), "52998224725");
        assert_eq!(normalize_cpf("123.456.78"), "12345678");
        assert_eq!(normalize_cpf("abc"), "");
    }

    #[test]
    fn test_format() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        // Non-canonical input passes through untouched.
        assert_eq!(format_cpf("12345678"), "12345678");
        assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
    }

    #[test]
    fn test_normalize_format_round_trip() {
        for cpf in ["52998224725", "85351346893", "11144477735"] {
            let canonical = normalize_cpf(cpf);
            assert_eq!(normalize_cpf(&format_cpf(&canonical)), canonical);
        }
    }
}
