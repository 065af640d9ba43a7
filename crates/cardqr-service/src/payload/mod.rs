//! QR payload construction.
//!
//! ## Usage
//!
//! ```rust
//! use cardqr_service::payload::{PayloadKind, PayloadRequest, build_payload};
//!
//! let request = PayloadRequest {
//!     kind: PayloadKind::Url,
//!     url: "example.com".to_string(),
//!     ..PayloadRequest::default()
//! };
//!
//! assert_eq!(build_payload(&request), "https://example.com");
//! ```

mod dispatch;
mod kind;
mod qr;

pub use dispatch::{Dispatcher, PayloadRequest, build_payload};
pub use kind::PayloadKind;
pub use qr::{ErrorCorrectionLevel, QrPayload};
