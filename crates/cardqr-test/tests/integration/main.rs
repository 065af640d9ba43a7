//! Cross-crate integration tests.

mod helpers;
mod payload;
mod pipeline;
mod validate;
