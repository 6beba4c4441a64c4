use serde::{Deserialize, Serialize};

/// A single decoded OBD-II response.
///
/// `value` is `None` when the frame was well formed but its PID (or mode)
/// has no known formula. That is a successful decode, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Request mode + PID as four upper-case hex chars (e.g., "010C").
    #[serde(rename = "pidCode")]
    pub pid_code: String,
    /// Human-readable name (e.g., "Engine RPM").
    pub label: String,
    /// Decoded numeric value. Always serialized, `null` when unsupported.
    pub value: Option<f64>,
    /// Unit of measurement (e.g., "rpm", "km/h"). Empty when unitless.
    pub unit: String,
    /// Textual value for non-numeric PIDs (e.g., the VIN).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Reading {
    pub fn numeric(
        pid_code: impl Into<String>,
        label: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            pid_code: pid_code.into(),
            label: label.into(),
            value: Some(value),
            unit: unit.into(),
            text: None,
        }
    }

    pub fn textual(
        pid_code: impl Into<String>,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            pid_code: pid_code.into(),
            label: label.into(),
            value: None,
            unit: String::new(),
            text: Some(text.into()),
        }
    }

    /// Placeholder for a recognized frame whose PID or mode has no formula.
    pub fn unsupported(pid_code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            pid_code: pid_code.into(),
            label: label.into(),
            value: None,
            unit: String::new(),
            text: None,
        }
    }

    /// True when the decoder recognized the frame but could not interpret it.
    pub fn is_unsupported(&self) -> bool {
        self.value.is_none() && self.text.is_none()
    }
}
