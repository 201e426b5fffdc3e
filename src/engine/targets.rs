//! Target identity and the accessor seam for animated objects.

use std::collections::BTreeMap;

use crate::animation::value::Value;

/// Identity-stable reference to an animatable target.
///
/// The engine never inspects targets; it only passes references through the
/// accessor pair. Identity stability matters for stagger ordering.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TargetId(pub u64);

/// Opaque property identifier resolved by the accessor (`"x"`, `"rotation"`,
/// `"borderRadius"`).
///
/// Embedders register the properties each target type supports; the engine
/// performs no reflection.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PropId(pub String);

impl PropId {
    /// Build a property identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for PropId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for PropId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Capability pair the engine requires from its embedder.
///
/// Reads feed lazy start-value resolution; writes push interpolated values
/// out. A failed read is reported per tween and contained by the scheduler.
pub trait PropertyTargets {
    /// Current value of `property` on `target`, if resolvable.
    fn get(&self, target: TargetId, property: &PropId) -> Option<Value>;

    /// Write an interpolated value to `target`.
    fn set(&mut self, target: TargetId, property: &PropId, value: Value);
}

/// Map-backed accessor for tests and embedders without a retained scene.
#[derive(Clone, Debug, Default)]
pub struct MemoryTargets {
    values: BTreeMap<(TargetId, PropId), Value>,
}

impl MemoryTargets {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an initial property value.
    pub fn insert(&mut self, target: TargetId, property: impl Into<PropId>, value: Value) {
        self.values.insert((target, property.into()), value);
    }

    /// Read back a stored value.
    pub fn value(&self, target: TargetId, property: impl Into<PropId>) -> Option<Value> {
        self.values.get(&(target, property.into())).copied()
    }
}

impl PropertyTargets for MemoryTargets {
    fn get(&self, target: TargetId, property: &PropId) -> Option<Value> {
        self.values.get(&(target, property.clone())).copied()
    }

    fn set(&mut self, target: TargetId, property: &PropId, value: Value) {
        self.values.insert((target, property.clone()), value);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/targets.rs"]
mod tests;