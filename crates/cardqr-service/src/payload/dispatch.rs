//! Kind-based payload dispatch.

use cardqr_core::constants::{HTTP_SCHEME, HTTPS_URL_PREFIX, MAILTO_PREFIX, SMS_PREFIX};
use cardqr_rfc::rfc::vcard::{Clock, FormatVersion, MecardRecord, Serializer, SystemClock};
use serde::{Deserialize, Serialize};

use super::kind::PayloadKind;
use super::qr::{ErrorCorrectionLevel, QrPayload};

/// Everything a caller may supply for one payload.
///
/// Only the inputs relevant to `kind` are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PayloadRequest {
    pub kind: PayloadKind,
    pub contact: MecardRecord,
    pub vcard_version: FormatVersion,
    pub text: String,
    pub url: String,
    pub email: String,
    pub sms: String,
}

/// Builds payloads, rendering contact cards with the given clock.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<C = SystemClock> {
    serializer: Serializer<C>,
}

impl Dispatcher<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            serializer: Serializer::new(),
        }
    }
}

impl<C: Clock> Dispatcher<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            serializer: Serializer::with_clock(clock),
        }
    }

    /// ## Summary
    /// Returns the text payload for a request.
    #[must_use]
    pub fn build(&self, request: &PayloadRequest) -> String {
        tracing::debug!(kind = request.kind.as_str(), "Building payload");

        match request.kind {
            PayloadKind::Vcard => self
                .serializer
                .serialize(&request.contact, request.vcard_version),
            PayloadKind::Text => request.text.clone(),
            PayloadKind::Url => url_payload(&request.url),
            PayloadKind::Email => format!("{MAILTO_PREFIX}{}", request.email),
            PayloadKind::Sms => format!("{SMS_PREFIX}{}", request.sms),
        }
    }

    /// ## Summary
    /// Returns the payload together with the level it should be encoded at.
    #[must_use]
    pub fn build_qr(&self, request: &PayloadRequest, level: ErrorCorrectionLevel) -> QrPayload {
        QrPayload::new(self.build(request), level)
    }
}

/// Returns the URL unchanged when it already starts with `http`, otherwise
/// prefixed with `https://`.
fn url_payload(url: &str) -> String {
    if url.starts_with(HTTP_SCHEME) {
        url.to_string()
    } else {
        format!("{HTTPS_URL_PREFIX}{url}")
    }
}

/// ## Summary
/// Returns the text payload for a request using the system clock.
#[must_use]
pub fn build_payload(request: &PayloadRequest) -> String {
    Dispatcher::new().build(request)
}
