//! Integration tests for the interpretation wizard.
#![allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

mod common;

use common::{Answer, ScriptedAsker};
use peirce_annotate::models::{InterpBody, InterpKind, SpaceKind};
use peirce_annotate::registry::{SeriesRegistry, SpaceRegistry};
use peirce_annotate::wizard::{BuildContext, InterpretationBuilder};
use test_case::test_case;

fn registries() -> (SpaceRegistry, SeriesRegistry) {
    let mut spaces = SpaceRegistry::default();
    spaces.standard_space(SpaceKind::Time, "t0", 0).unwrap();
    spaces.standard_space(SpaceKind::Time, "t1", 1).unwrap();
    spaces.standard_space(SpaceKind::Geom1D, "x", 2).unwrap();
    spaces.standard_space(SpaceKind::Geom3D, "world", 3).unwrap();
    spaces.standard_space(SpaceKind::Geom3D, "sensor", 4).unwrap();
    (spaces, SeriesRegistry::default())
}

fn ctx(is_identifier: bool, node_type: &'static str, order_start: u64) -> BuildContext<'static> {
    BuildContext {
        is_identifier,
        node_type,
        order_start,
    }
}

#[test]
fn test_time_interpretation_end_to_end() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut ask = ScriptedAsker::new([
        Answer::Pick("Time"),
        Answer::Text("foo"),
        Answer::Pick("t0"),
        Answer::Num("5"),
    ]);

    let built = builder.build(&ctx(false, "REAL1_EXPR", 0), &mut ask).unwrap();
    assert_eq!(built.interpretation.label, "foo Time(t0,5)");
    assert_eq!(built.interpretation.name, "foo");
    assert_eq!(built.interpretation.value(), Some([5.0].as_slice()));
    assert_eq!(built.orders_consumed, 1);
}

#[test]
fn test_identifier_skips_name_prompt_and_label_prefix() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut ask = ScriptedAsker::new([
        Answer::Pick("Duration"),
        Answer::Pick("t1"),
        Answer::Num("2.5"),
    ]);

    let built = builder
        .build(&ctx(true, "IDENT_REAL1_VAR", 7), &mut ask)
        .unwrap();
    assert_eq!(built.interpretation.label, "Duration(t1,2.5)");
    assert_eq!(built.interpretation.name, "<identifier>");
    assert_eq!(built.interpretation.order_created, 7);
    assert!(!ask.prompts.iter().any(|p| p.contains("Name")));
}

#[test_case("REAL3_MATRIX", 9; "matrix carrier asks nine values")]
#[test_case("GEOMR4_VAR", 4; "r4 carrier asks four values")]
fn test_orientation_arity_tracks_node_type(node_type: &'static str, expected: usize) {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut answers = vec![Answer::Pick("Orientation3D"), Answer::Pick("world")];
    answers.extend(std::iter::repeat_n(Answer::Num("1"), expected));
    let mut ask = ScriptedAsker::new(answers);

    let built = builder.build(&ctx(true, node_type, 0), &mut ask).unwrap();
    assert_eq!(ask.number_prompts, expected);
    assert_eq!(built.interpretation.value().map(<[f64]>::len), Some(expected));
}

#[test]
fn test_every_simple_variant_matches_declared_arity() {
    let kinds = [
        InterpKind::Duration,
        InterpKind::Time,
        InterpKind::Scalar,
        InterpKind::Displacement1D,
        InterpKind::Position1D,
        InterpKind::Displacement3D,
        InterpKind::Position3D,
        InterpKind::Orientation3D,
        InterpKind::Rotation3D,
        InterpKind::Pose3D,
    ];
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);

    for kind in kinds {
        let arity = kind.value_arity("REAL_EXPR");
        let mut answers = vec![Answer::Pick(kind.label()), Answer::Text("v")];
        if kind.space_class() == Some(SpaceKind::Time) {
            answers.push(Answer::Pick("t0"));
        } else if kind.space_class() == Some(SpaceKind::Geom1D) {
            answers.push(Answer::Pick("x"));
        } else if kind.space_class() == Some(SpaceKind::Geom3D) {
            answers.push(Answer::Pick("world"));
        }
        answers.extend(std::iter::repeat_n(Answer::Num("0.5"), arity));
        let mut ask = ScriptedAsker::new(answers);

        let built = builder
            .build(&ctx(false, "REAL_EXPR", 0), &mut ask)
            .unwrap_or_else(|| panic!("{kind} did not complete"));
        assert_eq!(
            built.interpretation.value().map(<[f64]>::len),
            Some(arity),
            "wrong vector length for {kind}"
        );
        assert_eq!(built.orders_consumed, 1);
    }
}

#[test]
fn test_transform_takes_domain_then_codomain() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut ask = ScriptedAsker::new([
        Answer::Pick("Geom3D Transform"),
        Answer::Text("wt"),
        Answer::Pick("world"),
        Answer::Pick("sensor"),
    ]);

    let built = builder.build(&ctx(false, "FUN", 0), &mut ask).unwrap();
    assert_eq!(built.interpretation.label, "wt Geom3D Transform(world,sensor)");
    match &built.interpretation.body {
        InterpBody::Geom3DTransform { domain, codomain } => {
            assert_eq!(domain.label, "world");
            assert_eq!(codomain.label, "sensor");
        },
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_transform_permits_equal_domain_and_codomain() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut ask = ScriptedAsker::new([
        Answer::Pick("Time Transform"),
        Answer::Text("id"),
        Answer::Pick("t0"),
        Answer::Pick("t0"),
    ]);
    assert!(builder.build(&ctx(false, "FUN", 0), &mut ask).is_some());
}

#[test]
fn test_time_stamped_pose_consumes_three_consecutive_orders() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut answers = vec![
        Answer::Pick("TimeStamped Pose3D"),
        Answer::Text("track"),
        Answer::Pick("t0"),
        Answer::Num("1"),
        Answer::Pick("world"),
    ];
    answers.extend(std::iter::repeat_n(Answer::Num("0"), 12));
    let mut ask = ScriptedAsker::new(answers);

    let built = builder.build(&ctx(false, "POSE", 10), &mut ask).unwrap();
    assert_eq!(built.orders_consumed, 3);
    assert_eq!(built.interpretation.order_created, 12);
    match &built.interpretation.body {
        InterpBody::TimeStampedPose3D {
            timestamp,
            value,
            series_name,
        } => {
            assert_eq!(timestamp.order_created, 10);
            assert_eq!(timestamp.interp_type(), "Time");
            assert_eq!(value.order_created, 11);
            assert_eq!(value.interp_type(), "Pose3D");
            assert_eq!(value.value().map(<[f64]>::len), Some(12));
            assert!(series_name.is_none());
        },
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_junk_numeric_input_aborts_the_run() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut ask = ScriptedAsker::new([
        Answer::Pick("Time"),
        Answer::Text("foo"),
        Answer::Pick("t0"),
        Answer::Num("abc"),
    ]);
    assert!(builder.build(&ctx(false, "REAL1_EXPR", 0), &mut ask).is_none());
}

#[test]
fn test_cancel_at_each_step_returns_none() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);

    let scripts: Vec<Vec<Answer>> = vec![
        vec![Answer::Cancel],
        vec![Answer::Pick("Time"), Answer::Cancel],
        vec![Answer::Pick("Time"), Answer::Text("foo"), Answer::Cancel],
        vec![
            Answer::Pick("Time"),
            Answer::Text("foo"),
            Answer::Pick("t0"),
            Answer::Cancel,
        ],
        // Empty name counts as backing out.
        vec![Answer::Pick("Time"), Answer::Text("")],
    ];
    for script in scripts {
        let mut ask = ScriptedAsker::new(script.clone());
        assert!(
            builder.build(&ctx(false, "REAL1_EXPR", 0), &mut ask).is_none(),
            "script {script:?} should cancel"
        );
    }
}

#[test]
fn test_series_definition_only_for_identifiers() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);

    // Non-identifier menu rejects the label outright.
    let mut ask = ScriptedAsker::new([Answer::Pick("Create a Time Series")]);
    assert!(builder.build(&ctx(false, "REAL1_EXPR", 0), &mut ask).is_none());

    let mut ask = ScriptedAsker::new([
        Answer::Pick("Create a Time Series"),
        Answer::Pick("Pose3D Time Series"),
        Answer::Text("track"),
        Answer::Pick("t0"),
        Answer::Pick("world"),
    ]);
    let built = builder
        .build(&ctx(true, "IDENT_POSE3D_VAR", 5), &mut ask)
        .unwrap();
    assert!(built.interpretation.is_series_definition());
    assert_eq!(built.interpretation.name, "track");
    assert_eq!(built.orders_consumed, 1);
}

#[test]
fn test_series_index_references_series_by_name() {
    let (spaces, mut series) = registries();
    let mut builder_input = ScriptedAsker::new([
        Answer::Pick("Create a Time Series"),
        Answer::Pick("Pose3D Time Series"),
        Answer::Text("track"),
        Answer::Pick("t0"),
        Answer::Pick("world"),
    ]);
    let def = InterpretationBuilder::new(&spaces, &series)
        .build(&ctx(true, "IDENT", 0), &mut builder_input)
        .unwrap();
    series
        .create_series(peirce_annotate::TimeSeries::from_interpretation(&def.interpretation).unwrap())
        .unwrap();

    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut ask = ScriptedAsker::new([
        Answer::Pick("TimeSeries Value"),
        Answer::Text("v"),
        Answer::Pick("track"),
        Answer::Pick("Provide Specific Time"),
        Answer::Num("3.5"),
    ]);
    let built = builder.build(&ctx(false, "POSE", 1), &mut ask).unwrap();
    match &built.interpretation.body {
        InterpBody::SeriesIndex {
            time_value,
            series_name,
        } => {
            assert_eq!(*time_value, Some(3.5));
            assert_eq!(series_name, "track");
        },
        other => panic!("unexpected body: {other:?}"),
    }

    // Latest-value mode carries no time.
    let mut ask = ScriptedAsker::new([
        Answer::Pick("TimeSeries Value"),
        Answer::Text("v"),
        Answer::Pick("track"),
        Answer::Pick("Get Latest Value from Time Series"),
    ]);
    let built = builder.build(&ctx(false, "POSE", 2), &mut ask).unwrap();
    match &built.interpretation.body {
        InterpBody::SeriesIndex { time_value, .. } => assert!(time_value.is_none()),
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn test_pose_label_abbreviates_components() {
    let (spaces, series) = registries();
    let builder = InterpretationBuilder::new(&spaces, &series);
    let mut answers = vec![
        Answer::Pick("Pose3D"),
        Answer::Text("p"),
        Answer::Pick("world"),
    ];
    answers.extend(std::iter::repeat_n(Answer::Num("1"), 12));
    let mut ask = ScriptedAsker::new(answers);

    let built = builder.build(&ctx(false, "POSE", 0), &mut ask).unwrap();
    assert_eq!(
        built.interpretation.label,
        "p Pose3D(world,orientation,position)"
    );
}
