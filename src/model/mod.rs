//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod outcome;
pub mod recommendation;

// Re-export for convenience
pub use error::{
    AppError, LookupError, TransportError, CONNECTION_ERROR_MESSAGE, GENERIC_FAILURE_MESSAGE,
    VALIDATION_MESSAGE,
};
pub use identifiers::{is_valid_member_id, sanitize_digits, InvalidMemberId, MemberId};
pub use key_action::KeyAction;
pub use outcome::{HealthStatus, NotificationKind, OperationOutcome};
pub use recommendation::{parse_formations, RecommendationResult, FORMATION_SEPARATOR};
