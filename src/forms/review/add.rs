use super::ValidationErrors;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Validate)]
pub struct AddReview {
    #[validate(min_length = 1, message = "A Review Must Have a review")]
    pub review: Option<String>,
    #[validate(minimum = 1.0, message = "Rating Must be Greater than or equal to 1")]
    #[validate(maximum = 5.0, message = "Rating Must be Less than or equal to 5")]
    pub rating: Option<f64>,
    pub product: Option<Uuid>,
    pub user: Option<Uuid>,
}

impl AddReview {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.review.is_none() {
            errors.add("review", "A Review Must Have a review");
        }
        if self.rating.is_none() {
            errors.add("rating", "A Review Must Have a rating");
        }
        if self.product.is_none() {
            errors.add("product", "Review Must Belong To a Product");
        }
        if self.user.is_none() {
            errors.add("user", "Review Must Belong To a User");
        }
        if let Err(invalid) = self.validate() {
            errors.merge_serde_valid(invalid);
        }

        errors.into_result()
    }
}

impl TryFrom<AddReview> for models::Review {
    type Error = ValidationErrors;

    fn try_from(form: AddReview) -> Result<Self, Self::Error> {
        let checked = form.check();

        match (form.review, form.rating, form.product, form.user, checked) {
            (Some(review), Some(rating), Some(product), Some(user), Ok(())) => {
                Ok(models::Review::new(review, rating, product, user))
            }
            (.., checked) => Err(checked.err().unwrap_or_default()),
        }
    }
}
