use super::ValidationErrors;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

// Fields left out of the payload keep their stored value.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Validate)]
pub struct EditReview {
    #[validate(min_length = 1, message = "A Review Must Have a review")]
    pub review: Option<String>,
    #[validate(minimum = 1.0, message = "Rating Must be Greater than or equal to 1")]
    #[validate(maximum = 5.0, message = "Rating Must be Less than or equal to 5")]
    pub rating: Option<f64>,
    pub product: Option<Uuid>,
}

impl EditReview {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(invalid) = self.validate() {
            errors.merge_serde_valid(invalid);
        }

        errors.into_result()
    }

    pub fn update(self, review: &mut models::Review) {
        if let Some(text) = self.review {
            review.review = text;
        }

        if let Some(rating) = self.rating {
            review.rating = rating;
        }

        if let Some(product) = self.product {
            review.product = product;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_keeps_other_fields() {
        let product = Uuid::new_v4();
        let mut review = models::Review::new("Meh".to_string(), 2.0, product, Uuid::new_v4());
        let form = EditReview {
            rating: Some(4.0),
            ..Default::default()
        };

        assert!(form.check().is_ok());
        form.update(&mut review);

        assert_eq!(review.rating, 4.0);
        assert_eq!(review.review, "Meh");
        assert_eq!(review.product, product);
    }

    #[test]
    fn present_fields_are_validated() {
        let form = EditReview {
            rating: Some(0.0),
            review: Some(String::new()),
            ..Default::default()
        };

        let errors = form.check().unwrap_err();
        assert_eq!(errors.messages("rating"), ["Rating Must be Greater than or equal to 1"]);
        assert_eq!(errors.messages("review"), ["A Review Must Have a review"]);
        assert!(EditReview::default().check().is_ok());
    }
}
