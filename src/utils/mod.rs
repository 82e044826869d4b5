pub mod validate;

pub use validate::{validate_content, validate_title};
