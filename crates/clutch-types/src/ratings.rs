use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Lowest rating a record or review can carry.
pub const RATING_MIN: f64 = 0.0;
/// Highest rating a record or review can carry.
pub const RATING_MAX: f64 = 5.0;

/// Rating block of a record.
///
/// `performance`, `comfort` and `mileage` are entered by an admin.
/// `overall` is derived from reviews once any exist; before that it holds
/// whatever was entered at creation, and `None` means unavailable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(default)]
    pub performance: f64,
    #[serde(default)]
    pub comfort: f64,
    #[serde(default)]
    pub mileage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
}

impl Ratings {
    pub fn new(performance: f64, comfort: f64, mileage: f64, overall: Option<f64>) -> Self {
        Self {
            performance,
            comfort,
            mileage,
            overall,
        }
    }

    /// Overall rating to one decimal place, or `N/A`.
    pub fn overall_label(&self) -> String {
        match self.overall {
            Some(value) => format!("{value:.1}"),
            None => "N/A".to_string(),
        }
    }
}

/// Check that `value` is a finite rating within [`RATING_MIN`]..=[`RATING_MAX`].
pub fn validate_rating(value: f64) -> Result<f64, TypeError> {
    if value.is_finite() && (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(TypeError::RatingOutOfRange(value))
    }
}

/// Arithmetic mean of `ratings`, or `None` when there are none.
pub fn mean(ratings: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = ratings
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_label_formats_one_decimal() {
        let ratings = Ratings::new(4.5, 3.5, 4.0, Some(4.0));
        assert_eq!(ratings.overall_label(), "4.0");
        assert_eq!(Ratings::default().overall_label(), "N/A");
    }

    #[test]
    fn validate_rating_bounds() {
        assert_eq!(validate_rating(0.0), Ok(0.0));
        assert_eq!(validate_rating(5.0), Ok(5.0));
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(Vec::new()), None);
        assert_eq!(mean(vec![4.0, 5.0, 3.0]), Some(4.0));
    }

    #[test]
    fn missing_fields_default() {
        let ratings: Ratings = serde_json::from_str(r#"{"performance":4.2}"#).unwrap();
        assert_eq!(ratings.performance, 4.2);
        assert_eq!(ratings.comfort, 0.0);
        assert!(ratings.overall.is_none());
    }
}
