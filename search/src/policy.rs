//! Search policy: engine tolerances and sizing.

use crate::error::SearchError;
use crate::geometry::EPSILON;

/// Default initial capacity of the root dominance table.
pub const DEFAULT_ROOT_TABLE_CAPACITY: usize = 65_535;

/// Default initial capacity of the node pool.
pub const DEFAULT_POOL_CAPACITY: usize = 1_024;

/// Configuration of an [`AnyaSearch`](crate::engine::AnyaSearch) engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPolicy {
    /// Tie band of the root dominance rule (inclusive).
    pub epsilon: f64,
    /// Initial capacity of the root dominance table.
    pub root_table_capacity: usize,
    /// Initial capacity of the node pool.
    pub pool_capacity: usize,
}

impl SearchPolicy {
    /// Check the policy before any search runs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidEpsilon`] if `epsilon` is negative, NaN
    /// or infinite.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SearchError::InvalidEpsilon {
                value: self.epsilon,
            });
        }
        Ok(())
    }

    /// Build a policy from a JSON object. Absent keys keep their defaults.
    ///
    /// Recognised keys: `epsilon` (number), `root_table_capacity` and
    /// `pool_capacity` (non-negative integers).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicyDocument`] if the value is not an
    /// object, contains an unknown key, or a key has the wrong type, and
    /// [`SearchError::InvalidEpsilon`] if the resulting policy does not
    /// validate.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, SearchError> {
        let obj = value
            .as_object()
            .ok_or_else(|| SearchError::InvalidPolicyDocument {
                detail: "expected a JSON object".into(),
            })?;

        let mut policy = Self::default();
        for (key, field) in obj {
            match key.as_str() {
                "epsilon" => {
                    policy.epsilon = field.as_f64().ok_or_else(|| type_error(key, "a number"))?;
                }
                "root_table_capacity" => {
                    policy.root_table_capacity = as_capacity(key, field)?;
                }
                "pool_capacity" => {
                    policy.pool_capacity = as_capacity(key, field)?;
                }
                other => {
                    return Err(SearchError::InvalidPolicyDocument {
                        detail: format!("unknown key `{other}`"),
                    });
                }
            }
        }
        policy.validate()?;
        Ok(policy)
    }

    /// JSON echo of the policy for reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "epsilon": self.epsilon,
            "pool_capacity": self.pool_capacity,
            "root_table_capacity": self.root_table_capacity,
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            root_table_capacity: DEFAULT_ROOT_TABLE_CAPACITY,
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}

fn type_error(key: &str, expected: &str) -> SearchError {
    SearchError::InvalidPolicyDocument {
        detail: format!("`{key}` must be {expected}"),
    }
}

fn as_capacity(key: &str, field: &serde_json::Value) -> Result<usize, SearchError> {
    field
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| type_error(key, "a non-negative integer"))
}
