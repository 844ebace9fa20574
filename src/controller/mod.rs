//! Controllers driving the rendering port from service replies.
//!
//! Both controllers are plain async objects: they own no display state and
//! report everything through [`crate::port::RenderPort`].

pub mod health;
pub mod query;
pub mod sequence;

pub use health::{interpret_health, HealthMonitor};
pub use query::{interpret_lookup, QueryController};
pub use sequence::{RequestSequence, Ticket};
