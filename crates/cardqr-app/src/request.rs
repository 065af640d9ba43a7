//! Request documents read by the binary.

use cardqr_core::config::OutputConfig;
use cardqr_core::error::{CoreError, CoreResult};
use cardqr_rfc::rfc::vcard::{FormatVersion, MecardRecord};
use cardqr_service::payload::{ErrorCorrectionLevel, PayloadKind, PayloadRequest};
use serde::Deserialize;

use crate::error::AppResult;

/// Selectors used when a request document leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputDefaults {
    pub kind: PayloadKind,
    pub version: FormatVersion,
    pub error_correction: ErrorCorrectionLevel,
}

impl OutputDefaults {
    /// ## Summary
    /// Parses the configured output selectors.
    ///
    /// An unknown kind falls back to vcard like any other selector.
    ///
    /// ## Errors
    /// Returns a configuration error for an unknown version or level.
    pub fn from_config(config: &OutputConfig) -> CoreResult<Self> {
        let version = config
            .version
            .parse::<FormatVersion>()
            .map_err(|e| CoreError::ConfigError(format!("output.version: {e}")))?;
        let error_correction = config
            .error_correction
            .parse::<ErrorCorrectionLevel>()
            .map_err(|e| CoreError::ConfigError(format!("output.error_correction: {e}")))?;

        Ok(Self {
            kind: PayloadKind::from_selector(&config.kind),
            version,
            error_correction,
        })
    }
}

/// A payload request as written by a caller; unset selectors come from
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestDocument {
    pub kind: Option<PayloadKind>,
    pub vcard_version: Option<FormatVersion>,
    pub error_correction: Option<ErrorCorrectionLevel>,
    pub contact: MecardRecord,
    pub text: String,
    pub url: String,
    pub email: String,
    pub sms: String,
}

impl RequestDocument {
    /// ## Summary
    /// Parses a JSON request document.
    ///
    /// ## Errors
    /// Returns an error if the input is blank or not a valid request.
    pub fn parse(input: &str) -> AppResult<Self> {
        if input.trim().is_empty() {
            return Err(CoreError::InvalidInput("request document is empty".to_string()).into());
        }
        Ok(serde_json::from_str(input)?)
    }

    /// Fills unset selectors from `defaults`.
    #[must_use]
    pub fn resolve(self, defaults: &OutputDefaults) -> (PayloadRequest, ErrorCorrectionLevel) {
        let request = PayloadRequest {
            kind: self.kind.unwrap_or(defaults.kind),
            contact: self.contact,
            vcard_version: self.vcard_version.unwrap_or(defaults.version),
            text: self.text,
            url: self.url,
            email: self.email,
            sms: self.sms,
        };
        (
            request,
            self.error_correction.unwrap_or(defaults.error_correction),
        )
    }
}
