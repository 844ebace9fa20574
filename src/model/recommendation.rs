//! Recommendation results as displayed to the user.

use super::identifiers::MemberId;

/// Separator used by the recommendation service between formations.
pub const FORMATION_SEPARATOR: &str = ", ";

/// Recommended formations for one member, in service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationResult {
    /// Member the formations were predicted for.
    pub member_id: MemberId,
    /// Trimmed formation names. Never empty.
    pub formations: Vec<String>,
}

impl RecommendationResult {
    /// Build a result from the raw delimited string returned by the service.
    pub fn from_raw(member_id: MemberId, raw: &str) -> Self {
        Self {
            member_id,
            formations: parse_formations(raw),
        }
    }
}

/// Split a delimited formations string into display tags.
///
/// Each segment is trimmed but empty segments are kept, so `""` yields
/// `[""]` and `"A, , B"` yields `["A", "", "B"]`. The query controller
/// never passes an empty string here: an empty field is reported as
/// "no formation found" before parsing.
pub fn parse_formations(raw: &str) -> Vec<String> {
    raw.split(FORMATION_SEPARATOR)
        .map(|segment| segment.trim().to_string())
        .collect()
}
