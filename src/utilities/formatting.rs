/// Formats an integer with `,` as the thousands separator, e.g. `1,234,567`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(123456, "123,456")]
    #[case(1234567, "1,234,567")]
    fn inserts_separators(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_thousands(value), expected);
    }
}
