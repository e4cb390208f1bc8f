/// Canonical form used for storage and lookup: surrounding whitespace removed
/// and the whole address lower-cased, so `" A@Test.com "` and `"a@test.com"`
/// collide on the unique index.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_local_part_and_domain() {
        assert_eq!(normalize_email("A@Test.com"), "a@test.com");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_email("  ada@example.org\n"), "ada@example.org");
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize_email("   "), "");
        assert_eq!(normalize_email(""), "");
    }

    #[test]
    fn case_variants_share_a_canonical_form() {
        assert_eq!(
            normalize_email("Ada.Lovelace@Example.COM"),
            normalize_email("ada.lovelace@example.com ")
        );
    }
}
