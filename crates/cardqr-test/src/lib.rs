//! cardqr - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `cardqr_test::component::` paths.

pub mod component {
    pub use cardqr_core::*;
    pub use cardqr_rfc::rfc::*;
    pub use cardqr_service::payload;

    // Binary pipeline
    pub mod app {
        pub use cardqr_app::render;
        pub use cardqr_app::request;
    }
}
