//! Stage name registry.
//!
//! Each script type declares the stages it knows about in a [`StageRegistry`]:
//! an ordered, deduplicated list of stage names. The registry records which
//! stages exist (for help text and stage selection), not the order they will
//! execute in; execution order is whatever order the script invokes its
//! stages.
//!
//! A script type that wants every instance to see the same declared stage
//! list constructs the registry once (e.g. in a `static OnceLock`) and hands
//! it to each instance. The registry only ever grows; there is no removal.

use crate::error::DriverError;

/// Ordered set of declared stage names, insertion order preserved.
#[derive(Debug, Clone, Default)]
pub struct StageRegistry {
    names: Vec<String>,
}

impl StageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stage name.
    ///
    /// Registering a name that is already present is a no-op, not an error;
    /// the name keeps the position of its first registration.
    ///
    /// # Errors
    /// Returns [`DriverError::InvalidStageName`] if `name` is not a valid
    /// identifier.
    pub fn register(&mut self, name: &str) -> Result<(), DriverError> {
        if !is_valid_stage_name(name) {
            return Err(DriverError::InvalidStageName {
                name: name.to_string(),
            });
        }
        if !self.names.iter().any(|existing| existing == name) {
            self.names.push(name.to_string());
        }
        Ok(())
    }

    /// All registered stage names, in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether `name` has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Number of registered stages.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Check whether a stage name is a valid identifier.
///
/// A valid name is non-empty, starts with an ASCII letter or underscore, and
/// contains only ASCII letters, digits, and underscores.
pub fn is_valid_stage_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
