//! The coordinate-space registry.

use crate::models::{Space, SpaceKind};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Catalogue of registered coordinate spaces, one append-only bucket
/// per kind.
///
/// Spaces are immutable once registered; there is no update or delete.
/// Labels are unique within a kind, and a derived space must name a
/// parent that is already registered (so parent chains cannot cycle).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceRegistry {
    #[serde(rename = "time_coordinate_spaces", default)]
    time: Vec<Space>,
    #[serde(rename = "geom1d_coordinate_spaces", default)]
    geom1d: Vec<Space>,
    #[serde(rename = "geom3d_coordinate_spaces", default)]
    geom3d: Vec<Space>,
}

impl SpaceRegistry {
    /// Lists the registered spaces of one kind, in creation order.
    #[must_use]
    pub fn list(&self, kind: SpaceKind) -> &[Space] {
        self.bucket(kind)
    }

    /// Iterates over every registered space, time spaces first.
    pub fn iter_all(&self) -> impl Iterator<Item = &Space> {
        self.time.iter().chain(&self.geom1d).chain(&self.geom3d)
    }

    /// Looks up a space by kind and label.
    #[must_use]
    pub fn find(&self, kind: SpaceKind, label: &str) -> Option<&Space> {
        self.bucket(kind).iter().find(|s| s.label == label)
    }

    /// Number of registered spaces across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len() + self.geom1d.len() + self.geom3d.len()
    }

    /// Whether no spaces are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that a space can be inserted: the label is free within
    /// its kind and, for derived spaces, the parent is registered.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` on a label collision or an
    /// unregistered parent.
    pub fn validate(&self, space: &Space) -> Result<()> {
        if space.label.trim().is_empty() {
            return Err(Error::InvalidInput("space label cannot be empty".to_string()));
        }
        if self.find(space.kind, &space.label).is_some() {
            return Err(Error::InvalidInput(format!(
                "a {} space named '{}' already exists",
                space.kind, space.label
            )));
        }
        if let Some(parent) = &space.parent {
            if self.find(space.kind, &parent.label).is_none() {
                return Err(Error::InvalidInput(format!(
                    "parent space '{}' is not registered",
                    parent.label
                )));
            }
        }
        Ok(())
    }

    /// Appends a validated space to its kind bucket.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if [`validate`](Self::validate) fails.
    pub fn insert(&mut self, space: Space) -> Result<()> {
        self.validate(&space)?;
        self.bucket_mut(space.kind).push(space);
        Ok(())
    }

    /// Creates and registers a standard space.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` on a label collision.
    pub fn standard_space(
        &mut self,
        kind: SpaceKind,
        label: impl Into<String>,
        order_created: u64,
    ) -> Result<Space> {
        let space = Space::standard(kind, label, order_created);
        self.insert(space.clone())?;
        Ok(space)
    }

    /// Creates and registers a derived space under an already-registered
    /// parent.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the parent is missing, the label
    /// collides, or the basis/origin dimensionality is wrong.
    pub fn derived_space(
        &mut self,
        kind: SpaceKind,
        label: impl Into<String>,
        parent_label: &str,
        origin: Vec<f64>,
        basis: Vec<f64>,
        order_created: u64,
    ) -> Result<Space> {
        let parent = self
            .find(kind, parent_label)
            .cloned()
            .ok_or_else(|| {
                Error::InvalidInput(format!("parent space '{parent_label}' is not registered"))
            })?;
        let space = Space::derived(kind, label, parent, origin, basis, order_created)?;
        self.insert(space.clone())?;
        Ok(space)
    }

    fn bucket(&self, kind: SpaceKind) -> &Vec<Space> {
        match kind {
            SpaceKind::Time => &self.time,
            SpaceKind::Geom1D => &self.geom1d,
            SpaceKind::Geom3D => &self.geom3d,
        }
    }

    fn bucket_mut(&mut self, kind: SpaceKind) -> &mut Vec<Space> {
        match kind {
            SpaceKind::Time => &mut self.time,
            SpaceKind::Geom1D => &mut self.geom1d,
            SpaceKind::Geom3D => &mut self.geom3d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_space_appends_in_order() {
        let mut reg = SpaceRegistry::default();
        reg.standard_space(SpaceKind::Time, "t0", 0).unwrap();
        reg.standard_space(SpaceKind::Time, "t1", 1).unwrap();

        let labels: Vec<&str> = reg
            .list(SpaceKind::Time)
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, ["t0", "t1"]);
        assert!(reg.list(SpaceKind::Geom3D).is_empty());
    }

    #[test]
    fn test_label_unique_within_kind() {
        let mut reg = SpaceRegistry::default();
        reg.standard_space(SpaceKind::Time, "t0", 0).unwrap();
        assert!(reg.standard_space(SpaceKind::Time, "t0", 1).is_err());
        // Same label in a different kind is fine.
        assert!(reg.standard_space(SpaceKind::Geom1D, "t0", 1).is_ok());
    }

    #[test]
    fn test_derived_space_requires_registered_parent() {
        let mut reg = SpaceRegistry::default();
        let missing = reg.derived_space(SpaceKind::Time, "t1", "t0", vec![0.0], vec![1.0], 0);
        assert!(missing.is_err());

        reg.standard_space(SpaceKind::Time, "t0", 0).unwrap();
        let derived = reg
            .derived_space(SpaceKind::Time, "t1", "t0", vec![3.0], vec![2.0], 1)
            .unwrap();
        assert_eq!(derived.origin.as_deref(), Some([3.0].as_slice()));
        assert_eq!(derived.basis.as_deref(), Some([2.0].as_slice()));
    }

    #[test]
    fn test_find_is_kind_scoped() {
        let mut reg = SpaceRegistry::default();
        reg.standard_space(SpaceKind::Geom3D, "world", 0).unwrap();
        assert!(reg.find(SpaceKind::Geom3D, "world").is_some());
        assert!(reg.find(SpaceKind::Time, "world").is_none());
    }
}
