//! Display projection of the state and its derived outputs.

use chromatone_contracts::{ColorAdapter, Representable};
use serde_json::{Map, Value};

use super::serialize;
use crate::engine::DerivationEngine;
use crate::error::Result;
use crate::state::DerivationState;

/// A tree of values to project.
///
/// `Repr` leaves project themselves. Maps and sequences are walked, and
/// plain values are copied.
pub enum ReprNode<'a> {
    Repr(&'a dyn Representable),
    Map(Vec<(String, ReprNode<'a>)>),
    Seq(Vec<ReprNode<'a>>),
    Value(Value),
}

impl std::fmt::Debug for ReprNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReprNode({})", to_representation(self))
    }
}

pub fn to_representation(node: &ReprNode<'_>) -> Value {
    match node {
        ReprNode::Repr(item) => item.repr(),
        ReprNode::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, child)| (key.clone(), to_representation(child)))
                .collect::<Map<_, _>>(),
        ),
        ReprNode::Seq(items) => {
            Value::Array(items.iter().map(to_representation).collect())
        }
        ReprNode::Value(value) => value.clone(),
    }
}

/// The full record plus every derived output, as JSON text.
pub fn export<A: ColorAdapter + ?Sized>(
    state: &DerivationState,
    engine: &DerivationEngine<'_, A>,
) -> Result<String> {
    let derived = engine.derive(state);

    let mut entries = match serde_json::to_value(serialize(state, &[]))? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key, ReprNode::Value(value)))
            .collect(),
        _ => Vec::new(),
    };
    entries.extend([
        ("grays".to_string(), ReprNode::Repr(&derived.grays)),
        ("lumAdjusted".to_string(), ReprNode::Repr(&derived.lum_adjusted)),
        ("tones".to_string(), ReprNode::Repr(&derived.tones)),
        ("palette".to_string(), ReprNode::Repr(&derived.palette)),
        ("shades".to_string(), ReprNode::Repr(&derived.shades)),
        ("tints".to_string(), ReprNode::Repr(&derived.tints)),
    ]);

    Ok(serde_json::to_string(&to_representation(&ReprNode::Map(entries)))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromatone_model::{Color, StepColor};
    use serde_json::json;

    #[test]
    fn walks_maps_and_sequences() {
        let base = Color::from_u8(0x33, 0x66, 0x99);
        let step = StepColor::new(50, Color::WHITE);
        let tree = ReprNode::Map(vec![
            ("base".into(), ReprNode::Repr(&base)),
            (
                "items".into(),
                ReprNode::Seq(vec![
                    ReprNode::Repr(&step),
                    ReprNode::Value(json!(3)),
                ]),
            ),
        ]);

        assert_eq!(
            to_representation(&tree),
            json!({
                "base": "#336699",
                "items": [{"color": "#ffffff", "value": 50}, 3],
            })
        );
    }
}
