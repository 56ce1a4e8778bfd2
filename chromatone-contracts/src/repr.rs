use chromatone_model::{Color, GrayEntry, StepColor};
use serde_json::{Value, json};

/// Display/export projection of a value.
///
/// Colors project to hex strings. Composite swatches project to small JSON
/// objects whose colors are hex strings.
pub trait Representable {
    fn repr(&self) -> Value;
}

impl Representable for Color {
    fn repr(&self) -> Value {
        Value::String(self.to_hex())
    }
}

impl Representable for GrayEntry {
    fn repr(&self) -> Value {
        json!({
            "color": self.color.to_hex(),
            "ratioFactor": self.ratio_factor,
        })
    }
}

impl Representable for StepColor {
    fn repr(&self) -> Value {
        json!({
            "color": self.color.to_hex(),
            "value": self.value,
        })
    }
}

impl<T: Representable> Representable for [T] {
    fn repr(&self) -> Value {
        Value::Array(self.iter().map(Representable::repr).collect())
    }
}

impl<T: Representable> Representable for Vec<T> {
    fn repr(&self) -> Value {
        self.as_slice().repr()
    }
}
