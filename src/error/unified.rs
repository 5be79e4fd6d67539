//! Error classification.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Broad error kind for routing failure handling.
///
/// Every kind is terminal for the call that produced it and non-fatal for
/// the process; there is no retryable/fatal split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Connection, timeout or non-2xx status.
    Transport,
    /// Body was not JSON or lacked `choices[0].message.content`.
    ResponseParse,
    /// Invalid client configuration.
    Configuration,
}
