//! Property-based tests for input parsing and wizard arities.
#![allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

mod common;

use common::{Answer, ScriptedAsker};
use peirce_annotate::models::{InterpKind, SpaceKind};
use peirce_annotate::registry::{SeriesRegistry, SpaceRegistry};
use peirce_annotate::wizard::{parse_number, BuildContext, InterpretationBuilder};
use proptest::prelude::*;

proptest! {
    /// Any finite float round-trips through the numeric prompt parser.
    #[test]
    fn prop_parse_number_accepts_finite_floats(x in proptest::num::f64::NORMAL) {
        let parsed = parse_number(&x.to_string());
        prop_assert!(parsed.is_some());
        prop_assert_eq!(parsed.unwrap(), x);
    }

    /// Alphabetic junk is always rejected, never coerced.
    #[test]
    fn prop_parse_number_rejects_alphabetic_text(s in "[a-zA-Z]{1,16}") {
        // "inf"/"infinity"/"nan" parse as floats but are non-finite;
        // everything else fails the parse outright. Both must reject.
        prop_assert_eq!(parse_number(&s), None);
    }

    /// Orientation arity is 4 exactly when the node type tag names an
    /// R4 carrier, and the built vector always matches it.
    #[test]
    fn prop_orientation_vector_matches_tag(prefix in "[A-Z0-9_]{0,8}", r4 in any::<bool>()) {
        let node_type = if r4 {
            format!("{prefix}R4")
        } else {
            prefix.replace("R4", "R_")
        };
        let expected = if node_type.contains("R4") { 4 } else { 9 };
        prop_assert_eq!(InterpKind::Orientation3D.value_arity(&node_type), expected);

        let mut spaces = SpaceRegistry::default();
        spaces.standard_space(SpaceKind::Geom3D, "world", 0).unwrap();
        let series = SeriesRegistry::default();
        let builder = InterpretationBuilder::new(&spaces, &series);

        let mut answers = vec![Answer::Pick("Orientation3D"), Answer::Pick("world")];
        answers.extend(std::iter::repeat_n(Answer::Num("1"), expected));
        let mut ask = ScriptedAsker::new(answers);
        let ctx = BuildContext {
            is_identifier: true,
            node_type: &node_type,
            order_start: 0,
        };
        let built = builder.build(&ctx, &mut ask).unwrap();
        prop_assert_eq!(built.interpretation.value().map(<[f64]>::len), Some(expected));
    }
}
