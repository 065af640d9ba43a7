//! `cardqr` command-line driver: reads a JSON payload request and prints the
//! text to encode.

pub mod error;
pub mod render;
pub mod request;
