//! Size constants shared across the symkit crates

pub mod symmetric;
