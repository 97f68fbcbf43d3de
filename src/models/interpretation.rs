//! Interpretation types: the tagged union of physical-semantic values
//! that can be attached to a code span.

use super::space::{Space, SpaceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name sentinel used when the annotated node is an identifier and the
/// checker supplies the name itself.
pub const IDENTIFIER_NAME: &str = "<identifier>";

/// The interpretation kinds offered by the wizard, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpKind {
    /// A span of time in a time space.
    Duration,
    /// A point in a time space.
    Time,
    /// A dimensionless scalar.
    Scalar,
    /// A map between two time spaces.
    TimeTransform,
    /// A 1-D displacement vector.
    Displacement1D,
    /// A 1-D position.
    Position1D,
    /// A map between two 1-D geometric spaces.
    Geom1DTransform,
    /// A 3-D displacement vector.
    Displacement3D,
    /// A 3-D position.
    Position3D,
    /// A 3-D orientation (quaternion or rotation matrix).
    Orientation3D,
    /// A 3-D rotation (quaternion or rotation matrix).
    Rotation3D,
    /// A 3-D pose: orientation plus position.
    Pose3D,
    /// A map between two 3-D geometric spaces.
    Geom3DTransform,
    /// A pose tagged with a time stamp.
    TimeStampedPose3D,
    /// A transform tagged with a time stamp.
    TimeStampedGeom3DTransform,
    /// An index into an existing time series.
    SeriesValue,
    /// Definition of a new time series (identifier nodes only).
    CreateSeries,
}

impl InterpKind {
    /// Returns the menu/tag label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Duration => "Duration",
            Self::Time => "Time",
            Self::Scalar => "Scalar",
            Self::TimeTransform => "Time Transform",
            Self::Displacement1D => "Displacement1D",
            Self::Position1D => "Position1D",
            Self::Geom1DTransform => "Geom1D Transform",
            Self::Displacement3D => "Displacement3D",
            Self::Position3D => "Position3D",
            Self::Orientation3D => "Orientation3D",
            Self::Rotation3D => "Rotation3D",
            Self::Pose3D => "Pose3D",
            Self::Geom3DTransform => "Geom3D Transform",
            Self::TimeStampedPose3D => "TimeStamped Pose3D",
            Self::TimeStampedGeom3DTransform => "TimeStamped Geom3D Transform",
            Self::SeriesValue => "TimeSeries Value",
            Self::CreateSeries => "Create a Time Series",
        }
    }

    /// Returns the wizard menu for a node.
    ///
    /// "Create a Time Series" is offered only for identifier nodes.
    #[must_use]
    pub fn menu(is_identifier: bool) -> Vec<Self> {
        let mut kinds = vec![
            Self::Duration,
            Self::Time,
            Self::Scalar,
            Self::TimeTransform,
            Self::Displacement1D,
            Self::Position1D,
            Self::Geom1DTransform,
            Self::Displacement3D,
            Self::Position3D,
            Self::Orientation3D,
            Self::Rotation3D,
            Self::Pose3D,
            Self::Geom3DTransform,
            Self::TimeStampedPose3D,
            Self::TimeStampedGeom3DTransform,
            Self::SeriesValue,
        ];
        if is_identifier {
            kinds.push(Self::CreateSeries);
        }
        kinds
    }

    /// The space class this kind draws its space argument(s) from, if any.
    #[must_use]
    pub const fn space_class(self) -> Option<SpaceKind> {
        match self {
            Self::Duration | Self::Time | Self::TimeTransform => Some(SpaceKind::Time),
            Self::Displacement1D | Self::Position1D | Self::Geom1DTransform => {
                Some(SpaceKind::Geom1D)
            },
            Self::Displacement3D
            | Self::Position3D
            | Self::Orientation3D
            | Self::Rotation3D
            | Self::Pose3D
            | Self::Geom3DTransform => Some(SpaceKind::Geom3D),
            Self::Scalar
            | Self::TimeStampedPose3D
            | Self::TimeStampedGeom3DTransform
            | Self::SeriesValue
            | Self::CreateSeries => None,
        }
    }

    /// Whether this kind takes a domain/codomain space pair.
    #[must_use]
    pub const fn takes_space_pair(self) -> bool {
        matches!(
            self,
            Self::TimeTransform | Self::Geom1DTransform | Self::Geom3DTransform
        )
    }

    /// Numeric value arity for this kind, given the node type tag.
    ///
    /// Orientation3D and Rotation3D are quaternion-valued (4 components)
    /// when the node type tag names an R4 carrier, matrix-valued
    /// (9 components) otherwise. Pose3D is 9 orientation components
    /// followed by 3 position components.
    #[must_use]
    pub fn value_arity(self, node_type: &str) -> usize {
        match self {
            Self::Duration
            | Self::Time
            | Self::Scalar
            | Self::Displacement1D
            | Self::Position1D => 1,
            Self::Displacement3D | Self::Position3D => 3,
            Self::Orientation3D | Self::Rotation3D => {
                if node_type.contains("R4") {
                    4
                } else {
                    9
                }
            },
            Self::Pose3D => 12,
            Self::TimeTransform
            | Self::Geom1DTransform
            | Self::Geom3DTransform
            | Self::TimeStampedPose3D
            | Self::TimeStampedGeom3DTransform
            | Self::SeriesValue
            | Self::CreateSeries => 0,
        }
    }
}

impl fmt::Display for InterpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed physical-semantic value attached to a code span.
///
/// The shared fields mirror the checker's wire shape; the body carries
/// the variant-specific payload under the `interp_type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Human-readable display label.
    pub label: String,
    /// Originating name, or [`IDENTIFIER_NAME`] for identifier nodes.
    pub name: String,
    /// Type tag of the annotated AST node.
    pub node_type: String,
    /// Position in the session-wide creation order.
    pub order_created: u64,
    /// Variant payload.
    #[serde(flatten)]
    pub body: InterpBody,
}

/// Variant-specific payload of an [`Interpretation`].
///
/// Value vectors have variant-fixed length (see
/// [`InterpKind::value_arity`]). Composite variants box a Time
/// sub-interpretation and a Pose3D / Geom3D Transform sub-interpretation
/// and may reference the time series they were appended to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "interp_type")]
pub enum InterpBody {
    /// A span of time.
    Duration {
        /// The time space the value is expressed in.
        space: Space,
        /// Single-component value vector.
        value: Vec<f64>,
    },
    /// A point in time.
    Time {
        /// The time space the value is expressed in.
        space: Space,
        /// Single-component value vector.
        value: Vec<f64>,
    },
    /// A dimensionless scalar.
    Scalar {
        /// Single-component value vector.
        value: Vec<f64>,
    },
    /// A map between two time spaces.
    #[serde(rename = "Time Transform")]
    TimeTransform {
        /// Source space.
        domain: Space,
        /// Target space.
        codomain: Space,
    },
    /// A 1-D displacement.
    Displacement1D {
        /// The 1-D geometric space.
        space: Space,
        /// Single-component value vector.
        value: Vec<f64>,
    },
    /// A 1-D position.
    Position1D {
        /// The 1-D geometric space.
        space: Space,
        /// Single-component value vector.
        value: Vec<f64>,
    },
    /// A map between two 1-D geometric spaces.
    #[serde(rename = "Geom1D Transform")]
    Geom1DTransform {
        /// Source space.
        domain: Space,
        /// Target space.
        codomain: Space,
    },
    /// A 3-D displacement.
    Displacement3D {
        /// The 3-D geometric space.
        space: Space,
        /// Three-component value vector.
        value: Vec<f64>,
    },
    /// A 3-D position.
    Position3D {
        /// The 3-D geometric space.
        space: Space,
        /// Three-component value vector.
        value: Vec<f64>,
    },
    /// A 3-D orientation.
    Orientation3D {
        /// The 3-D geometric space.
        space: Space,
        /// Four (quaternion) or nine (matrix) components.
        value: Vec<f64>,
    },
    /// A 3-D rotation.
    Rotation3D {
        /// The 3-D geometric space.
        space: Space,
        /// Four (quaternion) or nine (matrix) components.
        value: Vec<f64>,
    },
    /// A 3-D pose.
    Pose3D {
        /// The 3-D geometric space.
        space: Space,
        /// Nine orientation components followed by three position components.
        value: Vec<f64>,
    },
    /// A map between two 3-D geometric spaces.
    #[serde(rename = "Geom3D Transform")]
    Geom3DTransform {
        /// Source space.
        domain: Space,
        /// Target space.
        codomain: Space,
    },
    /// A pose tagged with a time stamp.
    #[serde(rename = "TimeStamped Pose3D")]
    TimeStampedPose3D {
        /// The time stamp (a Time interpretation).
        timestamp: Box<Interpretation>,
        /// The pose (a Pose3D interpretation).
        value: Box<Interpretation>,
        /// Name of the series this value belongs to, if appended to one.
        series_name: Option<String>,
    },
    /// A transform tagged with a time stamp.
    #[serde(rename = "TimeStamped Geom3D Transform")]
    TimeStampedGeom3DTransform {
        /// The time stamp (a Time interpretation).
        timestamp: Box<Interpretation>,
        /// The transform (a Geom3D Transform interpretation).
        value: Box<Interpretation>,
        /// Name of the series this value belongs to, if appended to one.
        series_name: Option<String>,
    },
    /// An index into a named time series: either a specific time or the
    /// latest value when `time_value` is `None`.
    #[serde(rename = "TimeSeries Value")]
    SeriesIndex {
        /// The time to index at, or `None` for the latest value.
        time_value: Option<f64>,
        /// Name of the indexed series.
        series_name: String,
    },
    /// Definition of a Pose3D time series.
    #[serde(rename = "Pose3D Time Series")]
    Pose3DSeries {
        /// The shared time space.
        time_space: Space,
        /// The shared 3-D geometric space.
        space: Space,
        /// Accumulated time-stamped values.
        values: Vec<Interpretation>,
    },
    /// Definition of a Geom3D Transform time series.
    #[serde(rename = "Geom3D Transform Time Series")]
    Geom3DTransformSeries {
        /// The shared time space.
        time_space: Space,
        /// The domain of every transform in the series.
        domain: Space,
        /// The codomain of every transform in the series.
        codomain: Space,
        /// Accumulated time-stamped values.
        values: Vec<Interpretation>,
    },
}

impl Interpretation {
    /// Returns the `interp_type` tag of this interpretation.
    #[must_use]
    pub const fn interp_type(&self) -> &'static str {
        match &self.body {
            InterpBody::Duration { .. } => "Duration",
            InterpBody::Time { .. } => "Time",
            InterpBody::Scalar { .. } => "Scalar",
            InterpBody::TimeTransform { .. } => "Time Transform",
            InterpBody::Displacement1D { .. } => "Displacement1D",
            InterpBody::Position1D { .. } => "Position1D",
            InterpBody::Geom1DTransform { .. } => "Geom1D Transform",
            InterpBody::Displacement3D { .. } => "Displacement3D",
            InterpBody::Position3D { .. } => "Position3D",
            InterpBody::Orientation3D { .. } => "Orientation3D",
            InterpBody::Rotation3D { .. } => "Rotation3D",
            InterpBody::Pose3D { .. } => "Pose3D",
            InterpBody::Geom3DTransform { .. } => "Geom3D Transform",
            InterpBody::TimeStampedPose3D { .. } => "TimeStamped Pose3D",
            InterpBody::TimeStampedGeom3DTransform { .. } => "TimeStamped Geom3D Transform",
            InterpBody::SeriesIndex { .. } => "TimeSeries Value",
            InterpBody::Pose3DSeries { .. } => "Pose3D Time Series",
            InterpBody::Geom3DTransformSeries { .. } => "Geom3D Transform Time Series",
        }
    }

    /// Returns the flat numeric value vector for value-carrying variants.
    #[must_use]
    pub fn value(&self) -> Option<&[f64]> {
        match &self.body {
            InterpBody::Duration { value, .. }
            | InterpBody::Time { value, .. }
            | InterpBody::Scalar { value }
            | InterpBody::Displacement1D { value, .. }
            | InterpBody::Position1D { value, .. }
            | InterpBody::Displacement3D { value, .. }
            | InterpBody::Position3D { value, .. }
            | InterpBody::Orientation3D { value, .. }
            | InterpBody::Rotation3D { value, .. }
            | InterpBody::Pose3D { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns true when this interpretation defines a time series.
    #[must_use]
    pub const fn is_series_definition(&self) -> bool {
        matches!(
            self.body,
            InterpBody::Pose3DSeries { .. } | InterpBody::Geom3DTransformSeries { .. }
        )
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
