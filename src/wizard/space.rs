//! The coordinate-space wizard.

use super::{pick_space, QuestionAsker};
use crate::models::{Space, SpaceKind};
use crate::registry::SpaceRegistry;

/// Runs the space-creation wizard: kind, name, standard vs derived,
/// and for derived spaces a parent plus basis/origin coordinates.
///
/// Returns a draft `Space` not yet registered, or `None` if the user
/// cancels at any step. The caller validates, submits remotely, and
/// registers on success.
pub fn build_space(
    registry: &SpaceRegistry,
    order_created: u64,
    ask: &mut dyn QuestionAsker,
) -> Option<Space> {
    let kinds = SpaceKind::all();
    let kind_labels: Vec<String> = kinds.iter().map(|k| k.menu_label().to_string()).collect();
    let kind = *kinds.get(ask.pick_one("Select a space kind", &kind_labels)?)?;

    let label = ask.pick_text(
        &format!("Name of {}?", kind.menu_label()),
        Some("new space"),
    )?;
    if label.is_empty() {
        return None;
    }

    let derivations = vec![
        format!("Standard {}", kind.menu_label()),
        format!("Derived {}", kind.menu_label()),
    ];
    match ask.pick_one("Standard or derived?", &derivations)? {
        0 => Some(Space::standard(kind, label, order_created)),
        _ => {
            let parent = pick_space(registry, kind, "Select a Parent Space", ask)?;
            let basis = ask_basis(kind, ask)?;
            let origin = ask_origin(kind, ask)?;
            Space::derived(kind, label, parent, origin, basis, order_created).ok()
        },
    }
}

fn ask_basis(kind: SpaceKind, ask: &mut dyn QuestionAsker) -> Option<Vec<f64>> {
    if kind == SpaceKind::Geom3D {
        let mut basis = Vec::with_capacity(9);
        for i in 0..3 {
            for j in 0..3 {
                basis.push(ask.pick_number(&format!(
                    "Coordinate of Basis Vector {i}, Column {j}?"
                ))?);
            }
        }
        Some(basis)
    } else {
        Some(vec![ask.pick_number("Coordinate of Basis?")?])
    }
}

fn ask_origin(kind: SpaceKind, ask: &mut dyn QuestionAsker) -> Option<Vec<f64>> {
    if kind == SpaceKind::Geom3D {
        let mut origin = Vec::with_capacity(3);
        for i in 0..3 {
            origin.push(ask.pick_number(&format!("Coordinate of Origin at Index {i}?"))?);
        }
        Some(origin)
    } else {
        Some(vec![ask.pick_number("Coordinate of Origin?")?])
    }
}
