//! Time series: named, typed sequences of time-stamped interpretations.

use super::interpretation::{InterpBody, Interpretation};
use super::space::Space;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The typed shape of a time series.
///
/// The `interp_type` tag matches the series-definition interpretation
/// variants, keeping the wire shape the checker expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "interp_type")]
pub enum SeriesSpec {
    /// Every value is a pose in one shared 3-D space.
    #[serde(rename = "Pose3D Time Series")]
    Pose3D {
        /// The shared 3-D geometric space.
        space: Space,
    },
    /// Every value is a transform between two shared 3-D spaces.
    #[serde(rename = "Geom3D Transform Time Series")]
    Geom3DTransform {
        /// The domain of every transform.
        domain: Space,
        /// The codomain of every transform.
        codomain: Space,
    },
}

impl SeriesSpec {
    /// Returns the series-kind tag.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Pose3D { .. } => "Pose3D Time Series",
            Self::Geom3DTransform { .. } => "Geom3D Transform Time Series",
        }
    }
}

/// A named, typed, ordered sequence of time-stamped interpretation
/// values sharing one time space and one set of geometric spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Registry-unique series name.
    pub name: String,
    /// The time space every value's time stamp is expressed in.
    pub time_space: Space,
    /// The typed shape of the series.
    #[serde(flatten)]
    pub spec: SeriesSpec,
    /// Accumulated time-stamped values, oldest first.
    pub values: Vec<Interpretation>,
    /// Creation-order stamp shared with interpretations.
    pub order_created: u64,
}

impl TimeSeries {
    /// Builds the series-definition interpretation for this series,
    /// suitable for attaching to an identifier term.
    #[must_use]
    pub fn to_interpretation(&self, node_type: &str) -> Interpretation {
        let body = match &self.spec {
            SeriesSpec::Pose3D { space } => InterpBody::Pose3DSeries {
                time_space: self.time_space.clone(),
                space: space.clone(),
                values: self.values.clone(),
            },
            SeriesSpec::Geom3DTransform { domain, codomain } => InterpBody::Geom3DTransformSeries {
                time_space: self.time_space.clone(),
                domain: domain.clone(),
                codomain: codomain.clone(),
                values: self.values.clone(),
            },
        };
        Interpretation {
            label: String::new(),
            name: self.name.clone(),
            node_type: node_type.to_string(),
            order_created: self.order_created,
            body,
        }
    }

    /// Extracts a series from a series-definition interpretation, or
    /// `None` for any other variant.
    #[must_use]
    pub fn from_interpretation(interp: &Interpretation) -> Option<Self> {
        let (time_space, spec, values) = match &interp.body {
            InterpBody::Pose3DSeries {
                time_space,
                space,
                values,
            } => (
                time_space.clone(),
                SeriesSpec::Pose3D {
                    space: space.clone(),
                },
                values.clone(),
            ),
            InterpBody::Geom3DTransformSeries {
                time_space,
                domain,
                codomain,
                values,
            } => (
                time_space.clone(),
                SeriesSpec::Geom3DTransform {
                    domain: domain.clone(),
                    codomain: codomain.clone(),
                },
                values.clone(),
            ),
            _ => return None,
        };
        Some(Self {
            name: interp.name.clone(),
            time_space,
            spec,
            values,
            order_created: interp.order_created,
        })
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.spec.kind_label())
    }
}
