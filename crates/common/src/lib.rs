//! Shared types for the smoke-test service.
//!
//! Holds the JSON payloads returned by the responder and the [`Clock`]
//! seam that supplies their timestamps.

pub mod clock;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use types::{GREETING_MESSAGE, GreetingPayload, HealthStatus, Timestamp};
