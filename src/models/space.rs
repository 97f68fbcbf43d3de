//! Coordinate space types.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three classes of coordinate space understood by the checker.
///
/// The serialized form uses the checker's classical space names so the
/// wire shape matches what the service expects in `createSpace` bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    /// Time coordinate spaces (scalar basis and origin).
    #[serde(rename = "Classical Time Coordinate Space")]
    Time,
    /// One-dimensional geometric spaces (scalar basis and origin).
    #[serde(rename = "Classical Geom1D Coordinate Space")]
    Geom1D,
    /// Three-dimensional geometric spaces (3x3 basis, 3-vector origin).
    #[serde(rename = "Classical Geom3D Coordinate Space")]
    Geom3D,
}

impl SpaceKind {
    /// Returns all space kinds in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Time, Self::Geom1D, Self::Geom3D]
    }

    /// Returns the short kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Geom1D => "Geom1D",
            Self::Geom3D => "Geom3D",
        }
    }

    /// Returns the user-facing menu label for this kind.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Time => "Time Coordinate Space",
            Self::Geom1D => "Geom1D Coordinate Space",
            Self::Geom3D => "Geom3D Coordinate Space",
        }
    }

    /// Number of basis components a derived space of this kind carries.
    ///
    /// Geom3D bases are 3x3 matrices stored row-major.
    #[must_use]
    pub const fn basis_len(self) -> usize {
        match self {
            Self::Time | Self::Geom1D => 1,
            Self::Geom3D => 9,
        }
    }

    /// Number of origin components a derived space of this kind carries.
    #[must_use]
    pub const fn origin_len(self) -> usize {
        match self {
            Self::Time | Self::Geom1D => 1,
            Self::Geom3D => 3,
        }
    }
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named coordinate frame, standard (root) or derived from a parent
/// via an affine basis and origin.
///
/// A standard space has no parent and carries neither origin nor basis.
/// A derived space references a parent of the same kind and carries
/// both, with dimensionality fixed by the kind. Spaces are immutable
/// once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Display label, unique within a kind.
    pub label: String,
    /// The space class.
    #[serde(rename = "space")]
    pub kind: SpaceKind,
    /// Parent space for derived spaces, `None` for standard spaces.
    pub parent: Option<Box<Space>>,
    /// Origin coordinates relative to the parent; present iff derived.
    pub origin: Option<Vec<f64>>,
    /// Basis coordinates relative to the parent; present iff derived.
    pub basis: Option<Vec<f64>>,
    /// Creation-order stamp shared with interpretations.
    pub order_created: u64,
}

impl Space {
    /// Creates a standard (root) space.
    #[must_use]
    pub fn standard(kind: SpaceKind, label: impl Into<String>, order_created: u64) -> Self {
        Self {
            label: label.into(),
            kind,
            parent: None,
            origin: None,
            basis: None,
            order_created,
        }
    }

    /// Creates a derived space from a parent, basis, and origin.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the parent kind differs or the
    /// basis/origin dimensionality does not match the kind.
    pub fn derived(
        kind: SpaceKind,
        label: impl Into<String>,
        parent: Self,
        origin: Vec<f64>,
        basis: Vec<f64>,
        order_created: u64,
    ) -> Result<Self> {
        if parent.kind != kind {
            return Err(Error::InvalidInput(format!(
                "parent space '{}' is {}, expected {}",
                parent.label, parent.kind, kind
            )));
        }
        if basis.len() != kind.basis_len() {
            return Err(Error::InvalidInput(format!(
                "{} basis needs {} components, got {}",
                kind,
                kind.basis_len(),
                basis.len()
            )));
        }
        if origin.len() != kind.origin_len() {
            return Err(Error::InvalidInput(format!(
                "{} origin needs {} components, got {}",
                kind,
                kind.origin_len(),
                origin.len()
            )));
        }
        Ok(Self {
            label: label.into(),
            kind,
            parent: Some(Box::new(parent)),
            origin: Some(origin),
            basis: Some(basis),
            order_created,
        })
    }

    /// Returns true for standard (root) spaces.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
