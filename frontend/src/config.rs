use std::rc::Rc;

use landing_core::LandingConfig;
use yew::prelude::*;

/// Builds the page configuration. A JSON override may be baked in at build
/// time through the `LANDING_CONFIG` environment variable.
pub fn load() -> LandingConfig {
    match option_env!("LANDING_CONFIG") {
        Some(raw) => LandingConfig::from_json(raw).unwrap_or_else(|e| {
            log::warn!("{}, falling back to defaults", e);
            LandingConfig::default()
        }),
        None => LandingConfig::default(),
    }
}

#[hook]
pub fn use_landing_config() -> Rc<LandingConfig> {
    use_context::<Rc<LandingConfig>>().unwrap_or_default()
}
