use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The closed set of blog categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Medicine,
    Surgery,
    #[serde(rename = "Health Tips")]
    HealthTips,
    Research,
    Lifestyle,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Medicine,
        Category::Surgery,
        Category::HealthTips,
        Category::Research,
        Category::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medicine => "Medicine",
            Category::Surgery => "Surgery",
            Category::HealthTips => "Health Tips",
            Category::Research => "Research",
            Category::Lifestyle => "Lifestyle",
        }
    }

    /// Short blurb shown on the category overview.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Medicine => "General medical practices, diagnosis, and treatment approaches",
            Category::Surgery => "Surgical procedures, techniques, and post-operative care",
            Category::HealthTips => "Preventive care, lifestyle advice, and wellness guidance",
            Category::Research => "Latest medical research, studies, and clinical findings",
            Category::Lifestyle => {
                "Work-life balance, mental health, and social aspects of medicine"
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown category: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("Cardiology".parse::<Category>().is_err());
        assert!("health tips".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Category::HealthTips).unwrap();
        assert_eq!(json, "\"Health Tips\"");

        let parsed: Category = serde_json::from_str("\"Research\"").unwrap();
        assert_eq!(parsed, Category::Research);
    }
}
