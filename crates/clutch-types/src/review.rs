use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ratings::RATING_MAX;

/// A stored review. `date` is stamped by the store at submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Five-star strip for the rating, whole stars only.
    pub fn stars(&self) -> String {
        let full = self.rating.clamp(0.0, RATING_MAX).floor() as usize;
        let empty = RATING_MAX as usize - full;
        format!("{}{}", "★".repeat(full), "☆".repeat(empty))
    }
}

/// A review as submitted. Carries no date; the store assigns one.
#[derive(Clone, Debug, PartialEq)]
pub struct NewReview {
    pub user: String,
    pub rating: f64,
    pub comment: String,
}

impl NewReview {
    pub fn new(user: impl Into<String>, rating: f64, comment: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Stamp the submission with `date`.
    pub fn dated(self, date: NaiveDate) -> Review {
        Review {
            user: self.user,
            rating: self.rating,
            comment: self.comment,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dated_stamps_date() {
        let review = NewReview::new("Rahul", 4.2, "Great bike").dated(date(2025, 1, 15));
        assert_eq!(review.user, "Rahul");
        assert_eq!(review.date, date(2025, 1, 15));
    }

    #[test]
    fn date_uses_iso_wire_format() {
        let review = NewReview::new("Raj", 4.5, "Lovely thump!").dated(date(2025, 2, 10));
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["date"], "2025-02-10");
    }

    #[test]
    fn stars_floor_the_rating() {
        let review = NewReview::new("a", 4.7, "").dated(date(2025, 1, 1));
        assert_eq!(review.stars(), "★★★★☆");
        let review = NewReview::new("a", 0.0, "").dated(date(2025, 1, 1));
        assert_eq!(review.stars(), "☆☆☆☆☆");
    }
}
