//! Runeview library exports for testing

pub mod core;
pub mod tui;
pub mod unicode;

#[cfg(test)]
pub mod test_support;
