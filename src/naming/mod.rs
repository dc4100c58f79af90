//! # Naming Policy
//!
//! Pure validation rules for version names, used by rename.

pub mod errors;
pub mod validator;

pub use errors::{NamingError, NamingResult};
pub use validator::{validate_name, MAX_NAME_LEN};
