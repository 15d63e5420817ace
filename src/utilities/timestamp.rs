use chrono::Local;

/// Current local time formatted for use in file and directory names (`YYYYmmdd_HHMMSS`).
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_file_name_safe() {
        let stamp = timestamp();

        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'_');
        assert!(stamp
            .chars()
            .enumerate()
            .all(|(index, c)| index == 8 || c.is_ascii_digit()));
    }
}
