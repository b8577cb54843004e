mod add;
mod edit;
mod errors;

pub use add::AddReview as Add;
pub use edit::EditReview as Edit;
pub use errors::ValidationErrors;
