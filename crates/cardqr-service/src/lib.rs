//! Payload dispatch: turns a content-kind selector and its inputs into the
//! text handed to an external QR renderer.

pub mod error;
pub mod payload;
