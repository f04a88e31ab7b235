mod draft;
mod field;
mod form;
mod submission;
mod validation;

pub use draft::{COUNTRIES, Draft, INTERESTS};
pub use field::Field;
pub use form::{FormState, SubmitOutcome};
pub use submission::Submission;
pub use validation::{ErrorMap, validate};
