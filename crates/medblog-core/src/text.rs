//! String helpers shared by posts and FAQs: slugs, tag lists and search terms.

/// Derive a URL slug from a post title.
///
/// The title is lowercased, everything except ASCII alphanumerics and
/// whitespace is dropped, and each run of whitespace becomes one hyphen.
/// Distinct titles can map to the same slug (`"Hello, World"` and
/// `"hello world"`); collisions are handled where posts are created.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Parse a comma-separated tag string.
///
/// Pieces are trimmed and empty ones dropped. Order and duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Join tags back into the form-field representation.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// A lowercased search term. An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match.
    pub fn found_in(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Hello, World! 2024"), "hello-world-2024");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Heart   health\tand\nsleep"), "heart-health-and-sleep");
        assert_eq!(slugify("  Padded title  "), "padded-title");
    }

    #[test]
    fn test_slugify_case_and_punctuation_collide() {
        assert_eq!(slugify("Blood Pressure"), slugify("blood pressure!"));
        assert_eq!(slugify("Blood Pressure"), slugify("BLOOD, PRESSURE"));
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café Ölçüm"), "caf-lm");
        assert_eq!(slugify("?!"), "");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        let title = "Vitamin D & Winter: What 2 Know";
        assert_eq!(slugify(title), slugify(title));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b ,, c"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags("x, x"), vec!["x", "x"]);
        assert!(parse_tags(" , ,").is_empty());
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_tags_round_trip_through_join() {
        let parsed = parse_tags(" cardio ,  nutrition,sleep hygiene ,");
        assert_eq!(parse_tags(&join_tags(&parsed)), parsed);
    }

    #[test]
    fn test_search_term_matching() {
        let term = SearchTerm::new("HeArT");
        assert!(term.found_in("Heart failure basics"));
        assert!(term.found_in("sweetheart"));
        assert!(!term.found_in("Kidney"));
        assert!(SearchTerm::new("").found_in("anything"));
    }
}
