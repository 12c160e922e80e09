//! Voyage application library
//!
//! The travel blog's posts module plus presentation helpers shared with the CLI.

pub mod modules;
pub mod utils;

pub use modules::posts::{catalog, feed, generator, models};
pub use modules::register_all;
