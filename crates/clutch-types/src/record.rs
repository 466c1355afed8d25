use serde::{Deserialize, Serialize};

use crate::id::BikeId;
use crate::ratings::{self, Ratings};
use crate::review::Review;
use crate::specs::Specs;

/// One catalog entry as persisted.
///
/// Optional collections default to empty when absent from stored JSON so
/// that hand-edited or older data still loads. `gallery` is normalised to
/// `[image]` at add time; use [`VehicleRecord::gallery_or_image`] when
/// reading records that may predate that rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: BikeId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expert_review: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub specs: Specs,
    #[serde(default)]
    pub ratings: Ratings,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl VehicleRecord {
    /// Gallery references, falling back to the primary image.
    pub fn gallery_or_image(&self) -> Vec<&str> {
        if self.gallery.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.gallery.iter().map(String::as_str).collect()
        }
    }

    /// Recompute `ratings.overall` as the mean of all review ratings.
    ///
    /// Leaves `overall` untouched when there are no reviews. Returns whether
    /// a recompute happened.
    pub fn refresh_overall(&mut self) -> bool {
        match ratings::mean(self.reviews.iter().map(|r| r.rating)) {
            Some(mean) => {
                self.ratings.overall = Some(mean);
                true
            }
            None => false,
        }
    }
}

/// Input to an add. Has no id: the store mints one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewRecord {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    /// `None` or an empty list defaults to `[image]`.
    pub gallery: Option<Vec<String>>,
    pub description: String,
    pub expert_review: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub specs: Specs,
    pub ratings: Ratings,
    /// `None` defaults to no reviews.
    pub reviews: Option<Vec<Review>>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            price,
            image: image.into(),
            ..Default::default()
        }
    }

    /// Build the stored record under `id`, applying the add-time defaults.
    pub fn into_record(self, id: BikeId) -> VehicleRecord {
        let gallery = match self.gallery {
            Some(gallery) if !gallery.is_empty() => gallery,
            _ => vec![self.image.clone()],
        };
        let mut record = VehicleRecord {
            id,
            name: self.name,
            brand: self.brand,
            category: self.category,
            price: self.price,
            image: self.image,
            gallery,
            description: self.description,
            expert_review: self.expert_review,
            pros: self.pros,
            cons: self.cons,
            specs: self.specs,
            ratings: self.ratings,
            reviews: self.reviews.unwrap_or_default(),
        };
        record.refresh_overall();
        record
    }
}
