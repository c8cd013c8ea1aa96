use file_mint::pattern::{expand, sanitize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_substitution_preserves_surroundings() {
        // The decimal index lands exactly where the placeholder was
        for index in [1, 5, 10, 99, 1000] {
            assert_eq!(
                expand("Report_0_Draft", index),
                format!("Report_{index}_Draft")
            );
        }
    }

    #[test]
    fn test_only_first_placeholder_is_substituted() {
        // The '0' inside "30" is literal text and must survive
        assert_eq!(expand("Day_0_of_30", 4), "Day_4_of_30");
        assert_eq!(expand("0_0_0", 9), "9_0_0");
    }

    #[test]
    fn test_patterns_without_placeholder_get_index_suffix() {
        for index in [1, 7, 123] {
            let expanded = expand("Notes", index);
            assert!(
                expanded.ends_with(&format!("_{index}")),
                "'{expanded}' should end with the decimal index"
            );
        }
    }

    #[test]
    fn test_index_starts_at_one_regardless_of_pattern_digit() {
        // The placeholder is a marker, not a start value
        assert_eq!(expand("File_0", 1), "File_1");
    }

    #[test]
    fn test_sanitize_is_idempotent_over_samples() {
        let samples = [
            "Report_0_Draft",
            "Rep:ort_0",
            "  padded  ",
            "a/b\\c<d>e|f?g*h\"i",
            "",
        ];
        for sample in samples {
            let once = sanitize(sample);
            assert_eq!(
                sanitize(&once),
                once,
                "sanitize should be a fixed point for '{sample}'"
            );
            assert!(!once.is_empty(), "sanitize must never return empty");
        }
    }

    #[test]
    fn test_expanded_and_sanitized_names_stay_distinct() {
        // Sanitization must not collapse different indices into one name
        let mut names: Vec<String> = (1..=100)
            .map(|index| sanitize(&expand("Rep:ort_0", index)))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total, "No two indices may produce the same name");
    }
}
