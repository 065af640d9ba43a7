//! Shared configuration, constants, and error types for the `cardqr` workspace.

pub mod config;
pub mod constants;
pub mod error;
