//! JSON payloads served by the responder and their timestamp type.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Serialize, Serializer};

/// Fixed greeting returned by `GET /`.
pub const GREETING_MESSAGE: &str = "Hello from AWS ECS Fargate!";

/// A UTC instant rendered as ISO-8601 with millisecond precision.
///
/// Serializes the same way JavaScript's `Date.prototype.toISOString` does,
/// e.g. `2026-10-16T09:30:00.123Z`. Sub-millisecond digits are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from milliseconds since the Unix epoch.
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the underlying datetime.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: Timestamp,
}

impl HealthStatus {
    /// The only status the liveness probe ever reports.
    pub const HEALTHY: &'static str = "healthy";

    pub fn healthy(timestamp: Timestamp) -> Self {
        Self {
            status: Self::HEALTHY,
            timestamp,
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingPayload {
    pub message: &'static str,
    pub version: String,
    pub environment: String,
    pub timestamp: Timestamp,
}

impl GreetingPayload {
    pub fn new(
        version: impl Into<String>,
        environment: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            message: GREETING_MESSAGE,
            version: version.into(),
            environment: environment.into(),
            timestamp,
        }
    }
}
