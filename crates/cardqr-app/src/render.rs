//! Request → payload pipeline with advisory diagnostics.

use cardqr_rfc::rfc::validation::{
    ContactField, ValidationReport, unsupported_fields, validate_contact,
};
use cardqr_rfc::rfc::vcard::Clock;
use cardqr_service::payload::{Dispatcher, PayloadKind, QrPayload};

use crate::request::{OutputDefaults, RequestDocument};

/// A rendered payload and what was noticed along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub payload: QrPayload,
    /// Validation outcome; only contact cards are validated.
    pub report: Option<ValidationReport>,
    /// Populated fields the chosen card format leaves out.
    pub dropped: Vec<ContactField>,
}

/// ## Summary
/// Resolves a request document, validates contact cards, and builds the payload.
///
/// Validation findings are logged and returned but never stop rendering.
#[must_use]
pub fn render<C: Clock>(
    dispatcher: &Dispatcher<C>,
    document: RequestDocument,
    defaults: &OutputDefaults,
) -> Rendered {
    let (request, level) = document.resolve(defaults);

    let (report, dropped) = if request.kind == PayloadKind::Vcard {
        let version = request.vcard_version;

        if let Some(notice) = version.compatibility_notice() {
            tracing::info!(%version, "{notice}");
        }

        let report = validate_contact(&request.contact, version);
        for message in report.messages() {
            tracing::warn!(%version, "{message}");
        }

        let dropped = unsupported_fields(&request.contact, version);
        if !dropped.is_empty() {
            let labels: Vec<&str> = dropped.iter().map(|f| f.label()).collect();
            tracing::info!(
                %version,
                fields = ?labels,
                "Fields not supported by this format will be omitted"
            );
        }

        (Some(report), dropped)
    } else {
        (None, Vec::new())
    };

    let payload = dispatcher.build_qr(&request, level);
    tracing::debug!(
        kind = request.kind.as_str(),
        bytes = payload.byte_len(),
        level = %payload.error_correction.as_char(),
        "Payload ready"
    );

    Rendered {
        payload,
        report,
        dropped,
    }
}
