mod validation;

pub use validation::Validator;
pub(crate) use validation::{evaluate_check, with_dispatch};
