use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Diet names grouped for presenting selectable options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietSelection {
    pub hard: Vec<String>,
    pub soft: Vec<String>,
}
