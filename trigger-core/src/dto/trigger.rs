//! Trigger DTOs

use serde::{Deserialize, Serialize};

use crate::domain::http::HttpTrigger;

/// Summary of a registered HTTP trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSummary {
    /// Function name the trigger is registered under
    pub name: String,

    /// Route the trigger answers on (e.g., "/api/http_trigger")
    pub route: String,
}

impl From<&HttpTrigger> for TriggerSummary {
    fn from(trigger: &HttpTrigger) -> Self {
        TriggerSummary {
            name: trigger.name.to_string(),
            route: trigger.route.to_string(),
        }
    }
}
