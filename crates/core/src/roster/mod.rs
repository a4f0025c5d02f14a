mod error;
mod operations;
mod types;

pub use error::ClassValidationError;
pub use operations::{check_membership, validate_new_class, MembershipCheck};
pub use types::{Student, SwimClass};
