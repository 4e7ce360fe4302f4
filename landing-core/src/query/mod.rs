//! Query demo widget: classifier, canned responses, state machine and the
//! view model the results region is drawn from.

mod category;
mod render;
mod responses;
mod widget;

pub use category::QueryCategory;
pub use render::{RenderedResult, ResponseView, CHECKMARK};
pub use responses::{ResponsePayload, ResponseTable, INSIGHTS_PER_PAYLOAD};
pub use widget::{QueryDemo, SubmitOutcome, Ticket, WidgetState};

/// Preset questions offered next to the input field.
pub const EXAMPLE_QUERIES: [&str; 3] = [
    "Latest diabetes treatments for patients with heart disease",
    "Post-operative care protocols after cardiac surgery",
    "Recent advances in melanoma immunotherapy",
];
