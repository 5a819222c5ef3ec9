pub mod parse;
pub mod uri;
pub mod validate;
