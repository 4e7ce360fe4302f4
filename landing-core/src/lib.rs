//! Client-side rules of the Ayenyo landing page, kept free of any browser
//! dependency so they can be exercised natively.

pub mod config;
pub mod effects;
pub mod error;
pub mod leads;
pub mod nav;
pub mod query;
pub mod toast;

pub use config::LandingConfig;
pub use error::LandingError;
