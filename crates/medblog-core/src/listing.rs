//! Listing controls: category and sort selection that go to the data client,
//! and the free-text refinement applied in memory to whatever came back.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Faq, Post};
use crate::error::DomainError;
use crate::ports::{PostFilter, PostOrder};
use crate::text::SearchTerm;

/// Sort keys offered on the blog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    CreatedAt,
    Views,
    Likes,
}

impl SortKey {
    pub fn order(self) -> PostOrder {
        match self {
            SortKey::CreatedAt => PostOrder::Newest,
            SortKey::Views => PostOrder::MostViewed,
            SortKey::Likes => PostOrder::MostLiked,
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(SortKey::CreatedAt),
            "views" => Ok(SortKey::Views),
            "likes" => Ok(SortKey::Likes),
            other => Err(DomainError::Validation(format!("Unknown sort key: {other}"))),
        }
    }
}

/// Parse a category selector where `"all"` (or nothing) means no filter.
pub fn parse_category_filter(raw: Option<&str>) -> Result<Option<Category>, DomainError> {
    match raw {
        None | Some("") | Some("all") => Ok(None),
        Some(name) => name.parse().map(Some),
    }
}

/// Everything the blog listing screen lets a reader pick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub category: Option<Category>,
    pub sort: SortKey,
    pub term: String,
}

impl ListingQuery {
    /// The part of the query that is sent to the data client.
    pub fn filter(&self) -> PostFilter {
        PostFilter::published()
            .in_category(self.category)
            .ordered_by(self.sort.order())
    }
}

/// Anything that can be matched against a search term.
pub trait Searchable {
    fn matches(&self, term: &SearchTerm) -> bool;
}

impl Searchable for Post {
    fn matches(&self, term: &SearchTerm) -> bool {
        Post::matches(self, term)
    }
}

impl Searchable for Faq {
    fn matches(&self, term: &SearchTerm) -> bool {
        Faq::matches(self, term)
    }
}

/// Keep the items matching `term`, preserving order.
pub fn refine<T: Searchable>(items: Vec<T>, term: &str) -> Vec<T> {
    let term = SearchTerm::new(term);
    if term.is_empty() {
        return items;
    }
    items.into_iter().filter(|item| item.matches(&term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;
    use uuid::Uuid;

    fn post(title: &str, excerpt: &str, tags: &[&str]) -> Post {
        Post::new(
            Uuid::new_v4(),
            PostDraft {
                title: title.into(),
                excerpt: excerpt.into(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                published: true,
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<Post> {
        vec![
            post("Understanding Asthma", "Airways and triggers", &["lungs"]),
            post("Knee Replacement", "What to expect after surgery", &["ortho"]),
            post("Sleep Basics", "Why rest matters", &["Lifestyle", "LUNGS"]),
        ]
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let posts = sample();
        assert_eq!(refine(posts.clone(), ""), posts);
    }

    #[test]
    fn test_refine_matches_any_field() {
        let titles: Vec<_> = refine(sample(), "lungs")
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Understanding Asthma", "Sleep Basics"]);

        let titles: Vec<_> = refine(sample(), "SURGERY")
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Knee Replacement"]);
    }

    #[test]
    fn test_refine_is_idempotent() {
        let once = refine(sample(), "as");
        let twice = refine(once.clone(), "as");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("views".parse::<SortKey>().unwrap(), SortKey::Views);
        assert_eq!("likes".parse::<SortKey>().unwrap().order(), PostOrder::MostLiked);
        assert!("title".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!(parse_category_filter(None).unwrap(), None);
        assert_eq!(parse_category_filter(Some("all")).unwrap(), None);
        assert_eq!(
            parse_category_filter(Some("Health Tips")).unwrap(),
            Some(Category::HealthTips)
        );
        assert!(parse_category_filter(Some("Oncology")).is_err());
    }

    #[test]
    fn test_listing_filter_is_published_only() {
        let query = ListingQuery {
            category: Some(Category::Surgery),
            sort: SortKey::Likes,
            term: "knee".into(),
        };
        let filter = query.filter();
        assert_eq!(filter.published, Some(true));
        assert_eq!(filter.category, Some(Category::Surgery));
        assert_eq!(filter.order, PostOrder::MostLiked);
        assert_eq!(filter.limit, None);
    }
}
