//! Replay Utility
//!
//! Renders the recorded call history of a tracked operation.

use std::fmt;

use crate::error::{CacheError, Result};
use crate::store::KvStore;
use crate::tracking::{inputs_key, outputs_key};

// == Replay Report ==
/// Call count and recorded (input, output) pairs of one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub name: String,
    pub calls: i64,
    pub entries: Vec<(String, String)>,
}

impl ReplayReport {
    /// Prints the report to stdout.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} was called {} times:", self.name, self.calls)?;
        for (input, output) in &self.entries {
            writeln!(f, "{}(*{}) -> {}", self.name, input, output)?;
        }
        Ok(())
    }
}

// == Replay ==
/// Reads the counter and history lists recorded for `name`.
///
/// An operation that was never called reports zero calls. Inputs and outputs
/// are paired by position up to the shorter list; any excess is dropped.
pub async fn replay<S: KvStore + ?Sized>(store: &S, name: &str) -> Result<ReplayReport> {
    let calls = match store.get(name).await? {
        Some(raw) => String::from_utf8(raw)?.trim().parse::<i64>()?,
        None => 0,
    };

    let inputs = store.lrange(&inputs_key(name), 0, -1).await?;
    let outputs = store.lrange(&outputs_key(name), 0, -1).await?;

    let entries = inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| {
            Ok::<_, CacheError>((String::from_utf8(input)?, String::from_utf8(output)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ReplayReport {
        name: name.to_string(),
        calls,
        entries,
    })
}
