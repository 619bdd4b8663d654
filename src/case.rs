/// Letter case applied to every line of the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Upper, // HELLO WORLD
    Lower, // hello world
}

impl CaseMode {
    /// Parse an interactive answer into a case mode
    ///
    /// The answer is trimmed and compared case-insensitively against
    /// the literal words "upper" and "lower".
    ///
    /// # Arguments
    /// * `answer` - Raw line typed by the user
    ///
    /// # Returns
    /// * `Option<CaseMode>` - The selected mode, or None if unrecognized
    pub fn from_answer(answer: &str) -> Option<CaseMode> {
        match answer.trim().to_lowercase().as_str() {
            "upper" => Some(CaseMode::Upper),
            "lower" => Some(CaseMode::Lower),
            _ => None,
        }
    }
}

/// Convert a string to the specified case mode
///
/// # Arguments
/// * `s` - The string to convert
/// * `mode` - The target case mode
///
/// # Returns
/// * `String` - The converted string
pub fn convert_case(s: &str, mode: &CaseMode) -> String {
    match mode {
        CaseMode::Upper => s.to_uppercase(),
        CaseMode::Lower => s.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_answer() {
        assert_eq!(CaseMode::from_answer("Upper"), Some(CaseMode::Upper));
        assert_eq!(CaseMode::from_answer("  lower \t"), Some(CaseMode::Lower));
        assert_eq!(CaseMode::from_answer("LOWER"), Some(CaseMode::Lower));
        assert_eq!(CaseMode::from_answer("up"), None);
        assert_eq!(CaseMode::from_answer("upper case"), None);
        assert_eq!(CaseMode::from_answer(""), None);
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(convert_case("Hello World", &CaseMode::Upper), "HELLO WORLD");
        assert_eq!(convert_case("FOO bar", &CaseMode::Lower), "foo bar");

        // Non-letters pass through untouched
        assert_eq!(convert_case("a1_b-2 !?", &CaseMode::Upper), "A1_B-2 !?");
        assert_eq!(convert_case("", &CaseMode::Lower), "");

        // Unicode mappings, including ones that change length
        assert_eq!(convert_case("Grüße", &CaseMode::Upper), "GRÜSSE");
        assert_eq!(convert_case("ΑΒΓ", &CaseMode::Lower), "αβγ");
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let samples = ["Hello World", "MiXeD cAsE 123", "straße", "ǅemal", ""];

        for mode in [CaseMode::Upper, CaseMode::Lower] {
            for s in samples {
                let once = convert_case(s, &mode);
                let twice = convert_case(&once, &mode);
                assert_eq!(once, twice, "{:?} is not idempotent for {:?}", mode, s);
            }
        }
    }
}
