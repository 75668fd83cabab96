pub mod bracket;
pub mod parse;
