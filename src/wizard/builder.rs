//! The interpretation builder: turns a sequence of user answers into
//! exactly one well-typed interpretation, or nothing on cancellation.

use super::series::build_series;
use super::{ask_pose_values, format_label, join_values, pick_space, QuestionAsker};
use crate::models::{
    InterpBody, InterpKind, Interpretation, SpaceKind, IDENTIFIER_NAME,
};
use crate::registry::{SeriesRegistry, SpaceRegistry};

/// Inputs of one builder run.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    /// Whether the annotated node is an identifier: identifiers skip
    /// the name prompt and may define time series.
    pub is_identifier: bool,
    /// Type tag of the annotated node; selects quaternion vs matrix
    /// arity for orientation-like kinds.
    pub node_type: &'a str,
    /// Creation-order number the first produced value will carry.
    pub order_start: u64,
}

/// A completed builder run.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltInterpretation {
    /// The assembled interpretation.
    pub interpretation: Interpretation,
    /// Creation-order slots the run consumed: 1 for simple variants,
    /// 3 for the time-stamped composites.
    pub orders_consumed: u64,
}

/// Builds interpretations from wizard answers.
///
/// Holds read-only registry views; the caller owns all mutation, so a
/// cancelled run leaves no trace anywhere.
pub struct InterpretationBuilder<'a> {
    spaces: &'a SpaceRegistry,
    series: &'a SeriesRegistry,
}

impl<'a> InterpretationBuilder<'a> {
    /// Creates a builder over the given registries.
    #[must_use]
    pub const fn new(spaces: &'a SpaceRegistry, series: &'a SeriesRegistry) -> Self {
        Self { spaces, series }
    }

    /// Runs the wizard. Returns `None` if the user cancels at any step.
    pub fn build(
        &self,
        ctx: &BuildContext<'_>,
        ask: &mut dyn QuestionAsker,
    ) -> Option<BuiltInterpretation> {
        let menu = InterpKind::menu(ctx.is_identifier);
        let labels: Vec<String> = menu.iter().map(|k| k.label().to_string()).collect();
        let kind = *menu.get(ask.pick_one("Select an interpretation", &labels)?)?;

        let name = if ctx.is_identifier {
            IDENTIFIER_NAME.to_string()
        } else {
            let picked = ask.pick_text("Name of interpretation?", None)?;
            if picked.is_empty() {
                return None;
            }
            picked
        };

        match kind {
            InterpKind::Scalar => self.build_scalar(ctx, &name, ask),
            InterpKind::Duration
            | InterpKind::Time
            | InterpKind::Displacement1D
            | InterpKind::Position1D
            | InterpKind::Displacement3D
            | InterpKind::Position3D
            | InterpKind::Orientation3D
            | InterpKind::Rotation3D
            | InterpKind::Pose3D => self.build_spatial(ctx, kind, &name, ask),
            InterpKind::TimeTransform
            | InterpKind::Geom1DTransform
            | InterpKind::Geom3DTransform => self.build_transform(ctx, kind, &name, ask),
            InterpKind::TimeStampedPose3D | InterpKind::TimeStampedGeom3DTransform => {
                self.build_time_stamped(ctx, kind, &name, ask)
            },
            InterpKind::SeriesValue => self.build_series_index(ctx, &name, ask),
            InterpKind::CreateSeries => self.build_series_definition(ctx, ask),
        }
    }

    fn build_scalar(
        &self,
        ctx: &BuildContext<'_>,
        name: &str,
        ask: &mut dyn QuestionAsker,
    ) -> Option<BuiltInterpretation> {
        let value = ask.pick_number("Value?")?;
        let label = format_label(
            ctx.is_identifier,
            name,
            InterpKind::Scalar.label(),
            &join_values(&[value]),
        );
        Some(Self::finish(ctx, label, name, InterpBody::Scalar { value: vec![value] }))
    }

    fn build_spatial(
        &self,
        ctx: &BuildContext<'_>,
        kind: InterpKind,
        name: &str,
        ask: &mut dyn QuestionAsker,
    ) -> Option<BuiltInterpretation> {
        let class = kind.space_class()?;
        let space = pick_space(self.spaces, class, "Select a coordinate space", ask)?;
        let values = Self::ask_values(kind, ctx.node_type, ask)?;

        let args = if kind == InterpKind::Pose3D {
            format!("{},orientation,position", space.label)
        } else {
            format!("{},{}", space.label, join_values(&values))
        };
        let label = format_label(ctx.is_identifier, name, kind.label(), &args);

        let body = match kind {
            InterpKind::Duration => InterpBody::Duration { space, value: values },
            InterpKind::Time => InterpBody::Time { space, value: values },
            InterpKind::Displacement1D => InterpBody::Displacement1D { space, value: values },
            InterpKind::Position1D => InterpBody::Position1D { space, value: values },
            InterpKind::Displacement3D => InterpBody::Displacement3D { space, value: values },
            InterpKind::Position3D => InterpBody::Position3D { space, value: values },
            InterpKind::Orientation3D => InterpBody::Orientation3D { space, value: values },
            InterpKind::Rotation3D => InterpBody::Rotation3D { space, value: values },
            InterpKind::Pose3D => InterpBody::Pose3D { space, value: values },
            _ => return None,
        };
        Some(Self::finish(ctx, label, name, body))
    }

    fn build_transform(
        &self,
        ctx: &BuildContext<'_>,
        kind: InterpKind,
        name: &str,
        ask: &mut dyn QuestionAsker,
    ) -> Option<BuiltInterpretation> {
        let class = kind.space_class()?;
        let domain = pick_space(self.spaces, class, "Select Domain Space", ask)?;
        // domain == codomain is permitted: the identity frame change is
        // a legitimate transform.
        let codomain = pick_space(self.spaces, class, "Select Codomain Space", ask)?;

        let args = format!("{},{}", domain.label, codomain.label);
        let label = format_label(ctx.is_identifier, name, kind.label(), &args);

        let body = match kind {
            InterpKind::TimeTransform => InterpBody::TimeTransform { domain, codomain },
            InterpKind::Geom1DTransform => InterpBody::Geom1DTransform { domain, codomain },
            InterpKind::Geom3DTransform => InterpBody::Geom3DTransform { domain, codomain },
            _ => return None,
        };
        Some(Self::finish(ctx, label, name, body))
    }

    fn build_time_stamped(
        &self,
        ctx: &BuildContext<'_>,
        kind: InterpKind,
        name: &str,
        ask: &mut dyn QuestionAsker,
    ) -> Option<BuiltInterpretation> {
        let time_space = pick_space(
            self.spaces,
            SpaceKind::Time,
            "Select a time coordinate space",
            ask,
        )?;
        let t = ask.pick_number("Time of Value?")?;
        let time_label = format_label(
            ctx.is_identifier,
            name,
            InterpKind::Time.label(),
            &format!("{},{}", time_space.label, join_values(&[t])),
        );
        let timestamp = Interpretation {
            label: time_label,
            name: name.to_string(),
            node_type: ctx.node_type.to_string(),
            order_created: ctx.order_start,
            body: InterpBody::Time {
                space: time_space,
                value: vec![t],
            },
        };

        let (inner, series_variant_is_pose) = match kind {
            InterpKind::TimeStampedPose3D => {
                let space = pick_space(
                    self.spaces,
                    SpaceKind::Geom3D,
                    "Select a coordinate space",
                    ask,
                )?;
                let values = ask_pose_values(ask)?;
                let label = format_label(
                    ctx.is_identifier,
                    name,
                    InterpKind::Pose3D.label(),
                    &format!("{},orientation,position", space.label),
                );
                (
                    Interpretation {
                        label,
                        name: name.to_string(),
                        node_type: ctx.node_type.to_string(),
                        order_created: ctx.order_start + 1,
                        body: InterpBody::Pose3D { space, value: values },
                    },
                    true,
                )
            },
            InterpKind::TimeStampedGeom3DTransform => {
                let domain =
                    pick_space(self.spaces, SpaceKind::Geom3D, "Select Domain Space", ask)?;
                let codomain =
                    pick_space(self.spaces, SpaceKind::Geom3D, "Select Codomain Space", ask)?;
                let label = format_label(
                    ctx.is_identifier,
                    name,
                    InterpKind::Geom3DTransform.label(),
                    &format!("{},{}", domain.label, codomain.label),
                );
                (
                    Interpretation {
                        label,
                        name: name.to_string(),
                        node_type: ctx.node_type.to_string(),
                        order_created: ctx.order_start + 1,
                        body: InterpBody::Geom3DTransform { domain, codomain },
                    },
                    false,
                )
            },
            _ => return None,
        };

        let body = if series_variant_is_pose {
            InterpBody::TimeStampedPose3D {
                timestamp: Box::new(timestamp),
                value: Box::new(inner),
                series_name: None,
            }
        } else {
            InterpBody::TimeStampedGeom3DTransform {
                timestamp: Box::new(timestamp),
                value: Box::new(inner),
                series_name: None,
            }
        };
        Some(BuiltInterpretation {
            interpretation: Interpretation {
                label: String::new(),
                name: name.to_string(),
                node_type: ctx.node_type.to_string(),
                order_created: ctx.order_start + 2,
                body,
            },
            orders_consumed: 3,
        })
    }

    fn build_series_index(
        &self,
        ctx: &BuildContext<'_>,
        name: &str,
        ask: &mut dyn QuestionAsker,
    ) -> Option<BuiltInterpretation> {
        let names = self.series.names();
        let idx = ask.pick_one("Select a time series", &names)?;
        let series = self.series.list().get(idx)?;

        let modes = vec![
            "Get Latest Value from Time Series".to_string(),
            "Provide Specific Time".to_string(),
        ];
        let time_value = match ask.pick_one("Index the series how?", &modes)? {
            0 => None,
            _ => Some(ask.pick_number("Enter value of Time Series Index:")?),
        };

        Some(Self::finish(
            ctx,
            String::new(),
            name,
            InterpBody::SeriesIndex {
                time_value,
                series_name: series.name.clone(),
            },
        ))
    }

    fn build_series_definition(
        &self,
        ctx: &BuildContext<'_>,
        ask: &mut dyn QuestionAsker,
    ) -> Option<BuiltInterpretation> {
        let series = build_series(self.spaces, ctx.order_start, ask)?;
        Some(BuiltInterpretation {
            interpretation: series.to_interpretation(ctx.node_type),
            orders_consumed: 1,
        })
    }

    fn ask_values(
        kind: InterpKind,
        node_type: &str,
        ask: &mut dyn QuestionAsker,
    ) -> Option<Vec<f64>> {
        if kind == InterpKind::Pose3D {
            return ask_pose_values(ask);
        }
        let arity = kind.value_arity(node_type);
        if arity == 1 {
            return Some(vec![ask.pick_number("Value?")?]);
        }
        let mut values = Vec::with_capacity(arity);
        for i in 0..arity {
            values.push(ask.pick_number(&format!("Value at index {i}?"))?);
        }
        Some(values)
    }

    fn finish(
        ctx: &BuildContext<'_>,
        label: String,
        name: &str,
        body: InterpBody,
    ) -> BuiltInterpretation {
        BuiltInterpretation {
            interpretation: Interpretation {
                label,
                name: name.to_string(),
                node_type: ctx.node_type.to_string(),
                order_created: ctx.order_start,
                body,
            },
            orders_consumed: 1,
        }
    }
}
