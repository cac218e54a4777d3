//! Testimonial entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A visitor testimonial.
///
/// Created only by [`crate::ReviewStore::add`], never edited afterwards.
/// `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub text: String,
    pub date: NaiveDate,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
            date,
        }
    }

    /// Avatar text: first character of the first two words of the name.
    ///
    /// `"Marie, 72 ans"` gives `"M7"`, `"Antoine (fils de Gérard)"` gives `"A("`.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }

    /// Date as shown under the author name.
    pub fn display_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(name: &str) -> Review {
        Review::new(
            "c1",
            name,
            "text",
            NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
        )
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(review("Marie, 72 ans").initials(), "M7");
        assert_eq!(review("Nadia").initials(), "N");
        assert_eq!(review("Élodie Martin Dupont").initials(), "ÉM");
    }

    #[test]
    fn initials_ignore_repeated_whitespace() {
        assert_eq!(review("  Lucie    Bernard ").initials(), "LB");
    }

    #[test]
    fn serializes_date_as_iso_day() {
        let json = serde_json::to_value(review("Marie")).unwrap();
        assert_eq!(json["date"], "2025-08-12");
        assert_eq!(json["id"], "c1");
    }

    #[test]
    fn display_date_is_iso() {
        assert_eq!(review("Marie").display_date(), "2025-08-12");
    }
}
