use super::{QueryCategory, ResponseTable, WidgetState};

pub const CHECKMARK: &str = "✓";

/// Which of the three mutually exclusive panels of the results region is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseView {
    Placeholder,
    Analyzing,
    Result(RenderedResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub category: QueryCategory,
    pub summary: String,
    /// One line per insight, already prefixed with the checkmark.
    pub insights: Vec<String>,
}

impl ResponseView {
    pub fn render(state: &WidgetState, table: &ResponseTable) -> Self {
        match state {
            WidgetState::Idle => ResponseView::Placeholder,
            WidgetState::Analyzing { .. } => ResponseView::Analyzing,
            WidgetState::Result { category, .. } => {
                let payload = table.payload(*category);
                ResponseView::Result(RenderedResult {
                    category: *category,
                    summary: payload.summary.clone(),
                    insights: payload
                        .insights
                        .iter()
                        .map(|insight| format!("{CHECKMARK} {insight}"))
                        .collect(),
                })
            }
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        matches!(self, ResponseView::Placeholder)
    }

    pub fn shows_analyzing(&self) -> bool {
        matches!(self, ResponseView::Analyzing)
    }

    pub fn result(&self) -> Option<&RenderedResult> {
        match self {
            ResponseView::Result(result) => Some(result),
            _ => None,
        }
    }
}
