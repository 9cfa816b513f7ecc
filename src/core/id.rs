//! Shared identifier generator for dishes and orders

use crate::core::error::ApiError;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Mutex;
use uuid::Uuid;

/// Issues record ids that are unique for the life of the process.
///
/// Dishes and orders draw from the same generator, so an id is never reused
/// across resource types. Ids are 32 lowercase hex characters.
#[derive(Debug, Default)]
pub struct IdGenerator {
    issued: Mutex<HashSet<String>>,
}

impl IdGenerator {
    /// Create a generator with no known ids
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a fresh id that collides with nothing issued or reserved
    pub fn next_id(&self) -> Result<String, ApiError> {
        let mut issued = self.issued.lock().map_err(ApiError::lock)?;
        loop {
            let candidate = Uuid::new_v4().simple().to_string();
            if issued.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
    }

    /// Register an id assigned elsewhere (seed data)
    ///
    /// Returns `false` when the id was already known.
    pub fn reserve(&self, id: &str) -> Result<bool, ApiError> {
        let mut issued = self.issued.lock().map_err(ApiError::lock)?;
        Ok(issued.insert(id.to_string()))
    }

    /// Number of ids issued or reserved so far
    pub fn issued(&self) -> usize {
        self.issued.lock().map(|set| set.len()).unwrap_or(0)
    }
}

/// The payload id, rendered for messages, when it conflicts with `route_id`
///
/// Absent, null, `false`, `0` and `""` mean "no id given". A string id
/// conflicts when it differs from the route id; any other present value
/// (a number, say) never equals a route id and always conflicts.
pub fn conflicting_id(payload: Option<&Value>, route_id: &str) -> Option<String> {
    match payload? {
        Value::Null | Value::Bool(false) => None,
        Value::String(id) if id.is_empty() || id == route_id => None,
        Value::String(id) => Some(id.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}
