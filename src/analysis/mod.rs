pub mod analyzer;
pub mod disease;
pub mod error;
pub mod freshness;
pub mod labels;
pub mod random;
pub mod result;
pub mod species;
#[cfg(test)]
mod tests;
