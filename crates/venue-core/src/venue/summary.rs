use serde::{Deserialize, Serialize};

use super::{Score, SmokingPolicy, VenueKey};

/// Public view of a venue. Vote counters and bounds are never exposed.
///
/// Field names on the wire match [`super::ReviewForm`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VenueSummary {
    #[serde(rename = "GoogleMapsId")]
    pub key: VenueKey,
    pub air_quality_smokers: Score,
    pub air_quality_nonsmokers: Score,
    pub smoking_policy: SmokingPolicy,
}
