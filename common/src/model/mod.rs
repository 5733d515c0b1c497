pub mod score;
pub mod source;
pub mod validation;
