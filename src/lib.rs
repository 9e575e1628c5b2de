/// Field Guide - searchable catalog of bugs, animals, and plants
///
/// Core library providing the keyword index, tiered fuzzy matching,
/// image manifest handling, and detail lookup behind the guide.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
