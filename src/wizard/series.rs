//! Time-series wizards: series creation and value appending.

use super::builder::BuiltInterpretation;
use super::{ask_pose_values, pick_space, QuestionAsker};
use crate::models::{InterpBody, Interpretation, SeriesSpec, SpaceKind, TimeSeries};
use crate::registry::SpaceRegistry;

/// Runs the series-creation wizard: series kind, name, shared time
/// space, and the geometric space(s) every value will live in.
///
/// Returns a draft series with no values, or `None` on cancellation.
pub fn build_series(
    spaces: &SpaceRegistry,
    order_created: u64,
    ask: &mut dyn QuestionAsker,
) -> Option<TimeSeries> {
    let kinds = vec![
        "Pose3D Time Series".to_string(),
        "Geom3D Transform Time Series".to_string(),
    ];
    let kind = ask.pick_one("Select a time series kind", &kinds)?;

    let name = ask.pick_text("Name of time series?", None)?;
    if name.is_empty() {
        return None;
    }

    let time_space = pick_space(spaces, SpaceKind::Time, "Select a time coordinate space", ask)?;

    let spec = if kind == 0 {
        let space = pick_space(spaces, SpaceKind::Geom3D, "Select a coordinate space", ask)?;
        SeriesSpec::Pose3D { space }
    } else {
        let domain = pick_space(spaces, SpaceKind::Geom3D, "Select Domain Space", ask)?;
        let codomain = pick_space(spaces, SpaceKind::Geom3D, "Select Codomain Space", ask)?;
        SeriesSpec::Geom3DTransform { domain, codomain }
    };

    Some(TimeSeries {
        name,
        time_space,
        spec,
        values: Vec::new(),
        order_created,
    })
}

/// Runs the append-value wizard for an existing series.
///
/// The series' own spaces are reused, so only the time stamp and — for
/// pose series — the twelve pose components are prompted for. The
/// result is a time-stamped composite carrying the series name as its
/// back-reference; it consumes three creation-order slots (time stamp,
/// inner value, composite).
pub fn build_series_value(
    series: &TimeSeries,
    order_start: u64,
    ask: &mut dyn QuestionAsker,
) -> Option<BuiltInterpretation> {
    let t = ask.pick_number("Time of Value?")?;
    let timestamp = Interpretation {
        label: String::new(),
        name: String::new(),
        node_type: String::new(),
        order_created: order_start,
        body: InterpBody::Time {
            space: series.time_space.clone(),
            value: vec![t],
        },
    };

    let (inner_body, wrap_pose) = match &series.spec {
        SeriesSpec::Pose3D { space } => {
            let values = ask_pose_values(ask)?;
            (
                InterpBody::Pose3D {
                    space: space.clone(),
                    value: values,
                },
                true,
            )
        },
        SeriesSpec::Geom3DTransform { domain, codomain } => (
            InterpBody::Geom3DTransform {
                domain: domain.clone(),
                codomain: codomain.clone(),
            },
            false,
        ),
    };
    let inner = Interpretation {
        label: String::new(),
        name: String::new(),
        node_type: String::new(),
        order_created: order_start + 1,
        body: inner_body,
    };

    let body = if wrap_pose {
        InterpBody::TimeStampedPose3D {
            timestamp: Box::new(timestamp),
            value: Box::new(inner),
            series_name: Some(series.name.clone()),
        }
    } else {
        InterpBody::TimeStampedGeom3DTransform {
            timestamp: Box::new(timestamp),
            value: Box::new(inner),
            series_name: Some(series.name.clone()),
        }
    };

    Some(BuiltInterpretation {
        interpretation: Interpretation {
            label: String::new(),
            name: String::new(),
            node_type: String::new(),
            order_created: order_start + 2,
            body,
        },
        orders_consumed: 3,
    })
}
