pub mod errors;
pub mod parse;
