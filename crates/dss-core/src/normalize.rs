//! Canonical comparison keys for free-text names.
//!
//! App names and data-type labels come from independently authored files, so
//! every cross-dataset comparison goes through [`normalize`]: lower-case,
//! `&` becomes `and`, and everything outside `[a-z0-9]` is dropped.
//! Distinct inputs may collide (`"Health & Fitness"` and `"health and fitness"`).

/// Reduce `s` to its comparison key.
#[must_use]
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars().flat_map(char::to_lowercase) {
        match ch {
            '&' => out.push_str("and"),
            'a'..='z' | '0'..='9' => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::normalize;

    #[rstest]
    #[case("Health & Fitness", "healthandfitness")]
    #[case("ACME-Chat", "acmechat")]
    #[case("  acme chat ", "acmechat")]
    #[case("Device or other IDs", "deviceorotherids")]
    #[case("Café 24/7!", "caf247")]
    #[case("", "")]
    fn normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn ampersand_and_word_collide() {
        assert_eq!(normalize("Health & Fitness"), normalize("health and fitness"));
    }

    #[rstest]
    #[case("Health & Fitness")]
    #[case("Photos and videos")]
    #[case("App info & performance")]
    fn is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn is_case_insensitive() {
        assert_eq!(normalize("LOCATION"), normalize("location"));
    }
}
