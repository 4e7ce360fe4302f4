use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::QueryCategory;
use crate::error::LandingError;

/// Every canned payload carries exactly this many insights.
pub const INSIGHTS_PER_PAYLOAD: usize = 4;

const BUILTIN_RESPONSES: &str = include_str!("../../data/responses.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponsePayload {
    pub summary: String,
    pub insights: Vec<String>,
}

/// Read-only mapping from category to its canned payload.
///
/// Built once at startup and shared by reference afterwards. Construction
/// guarantees that every category has a payload, so lookups cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseTable {
    payloads: HashMap<QueryCategory, ResponsePayload>,
}

impl ResponseTable {
    /// Loads the payloads bundled with the crate.
    pub fn builtin() -> Result<Self, LandingError> {
        Self::from_json(BUILTIN_RESPONSES)
    }

    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        let entries: BTreeMap<String, ResponsePayload> =
            serde_json::from_str(raw).map_err(LandingError::ResponseParse)?;

        let mut payloads = HashMap::with_capacity(entries.len());
        for (key, payload) in entries {
            let category = QueryCategory::from_key(&key)
                .ok_or_else(|| LandingError::UnknownCategory(key.clone()))?;
            if payload.insights.len() != INSIGHTS_PER_PAYLOAD {
                return Err(LandingError::InsightCount {
                    category,
                    expected: INSIGHTS_PER_PAYLOAD,
                    found: payload.insights.len(),
                });
            }
            payloads.insert(category, payload);
        }

        if let Some(missing) = QueryCategory::ALL
            .into_iter()
            .find(|category| !payloads.contains_key(category))
        {
            return Err(LandingError::MissingCategory(missing));
        }

        log::debug!("Loaded {} canned responses", payloads.len());
        Ok(Self { payloads })
    }

    pub fn payload(&self, category: QueryCategory) -> &ResponsePayload {
        // from_json refuses tables with a missing category
        &self.payloads[&category]
    }
}
