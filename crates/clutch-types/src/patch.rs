use crate::id::BikeId;
use crate::ratings::Ratings;
use crate::record::VehicleRecord;
use crate::specs::Specs;

/// Shallow-merge update for a stored record.
///
/// Every `Some` field replaces the stored field wholesale; `None` keeps the
/// stored value. Nested blocks (`specs`, `ratings`) are replaced, never
/// merged key by key. Reviews are not patchable: they change only through
/// review submission.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordPatch {
    pub id: BikeId,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub description: Option<String>,
    pub expert_review: Option<String>,
    pub pros: Option<Vec<String>>,
    pub cons: Option<Vec<String>>,
    pub specs: Option<Specs>,
    pub ratings: Option<Ratings>,
}

impl RecordPatch {
    /// An empty patch targeting `id`.
    pub fn new(id: BikeId) -> Self {
        Self {
            id,
            name: None,
            brand: None,
            category: None,
            price: None,
            image: None,
            gallery: None,
            description: None,
            expert_review: None,
            pros: None,
            cons: None,
            specs: None,
            ratings: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn specs(mut self, specs: Specs) -> Self {
        self.specs = Some(specs);
        self
    }

    pub fn ratings(mut self, ratings: Ratings) -> Self {
        self.ratings = Some(ratings);
        self
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.brand.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.gallery.is_none()
            && self.description.is_none()
            && self.expert_review.is_none()
            && self.pros.is_none()
            && self.cons.is_none()
            && self.specs.is_none()
            && self.ratings.is_none()
    }

    /// Merge the present fields over `record`. The id is never touched.
    pub fn apply_to(self, record: &mut VehicleRecord) {
        fn replace<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        replace(&mut record.name, self.name);
        replace(&mut record.brand, self.brand);
        replace(&mut record.category, self.category);
        replace(&mut record.price, self.price);
        replace(&mut record.image, self.image);
        replace(&mut record.gallery, self.gallery);
        replace(&mut record.description, self.description);
        replace(&mut record.expert_review, self.expert_review);
        replace(&mut record.pros, self.pros);
        replace(&mut record.cons, self.cons);
        replace(&mut record.specs, self.specs);
        replace(&mut record.ratings, self.ratings);
    }
}
