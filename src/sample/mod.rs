/// Module containing the C-style numeric prefix scanners
pub mod numeric;
/// Module containing the sample type and the payload parser
pub mod parser;
/// Module containing the built-in test pattern
pub mod pattern;
