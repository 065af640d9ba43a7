//! Hand-off to the external QR renderer.

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// QR error-correction level.
///
/// Higher levels survive more damage at the cost of capacity. Capacity
/// limits are enforced by the renderer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "Q")]
    Quartile,
    #[default]
    #[serde(rename = "H")]
    High,
}

impl ErrorCorrectionLevel {
    /// Returns the single-letter level code.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Low => 'L',
            Self::Medium => 'M',
            Self::Quartile => 'Q',
            Self::High => 'H',
        }
    }

    /// Approximate share of codewords that can be restored, in percent.
    #[must_use]
    pub const fn recovery_percent(self) -> u8 {
        match self {
            Self::Low => 7,
            Self::Medium => 15,
            Self::Quartile => 25,
            Self::High => 30,
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low (7% recovery)",
            Self::Medium => "Medium (15% recovery)",
            Self::Quartile => "Quartile (25% recovery)",
            Self::High => "High (30% recovery)",
        }
    }
}

impl core::str::FromStr for ErrorCorrectionLevel {
    type Err = ServiceError;

    fn from_str(s: &str) -> ServiceResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::Low),
            "M" => Ok(Self::Medium),
            "Q" => Ok(Self::Quartile),
            "H" => Ok(Self::High),
            _ => Err(ServiceError::UnknownErrorCorrection(s.to_string())),
        }
    }
}

/// Text plus the error-correction level it should be encoded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub text: String,
    pub error_correction: ErrorCorrectionLevel,
}

impl QrPayload {
    #[must_use]
    pub fn new(text: impl Into<String>, error_correction: ErrorCorrectionLevel) -> Self {
        Self {
            text: text.into(),
            error_correction,
        }
    }

    /// Payload size in bytes once UTF-8 encoded.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}
