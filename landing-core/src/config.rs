use serde::Deserialize;

use crate::error::LandingError;

/// Timings and offsets used by the page behaviors. Every field can be
/// overridden from JSON; omitted fields keep their default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Simulated processing time of the query demo.
    pub analysis_delay_ms: u32,
    pub pulse_ms: u32,
    pub toast: ToastTimings,
    pub ripple_ms: u32,
    /// Sections count as reached this many pixels before their top edge.
    pub section_lead_px: f64,
    /// Height of the fixed navigation bar, subtracted from scroll targets.
    pub nav_height_px: f64,
    /// Scroll position after which the navigation background turns opaque.
    pub nav_solid_after_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    pub enter_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 1500,
            pulse_ms: 600,
            toast: ToastTimings::default(),
            ripple_ms: 600,
            section_lead_px: 200.0,
            nav_height_px: 80.0,
            nav_solid_after_px: 100.0,
        }
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_ms: 100,
            visible_ms: 4000,
            exit_ms: 300,
        }
    }
}

impl LandingConfig {
    /// Parses an override and rejects toast timings that would hide the
    /// toast before it slides in.
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        let config: Self = serde_json::from_str(raw).map_err(LandingError::Config)?;
        let toast = config.toast;
        if toast.enter_ms >= toast.visible_ms {
            return Err(LandingError::ToastTimings {
                enter_ms: toast.enter_ms,
                visible_ms: toast.visible_ms,
            });
        }
        Ok(config)
    }
}
