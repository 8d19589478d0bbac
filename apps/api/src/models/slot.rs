use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A bookable slot with its remaining capacity.
///
/// The slot file is written by hand or by other tooling, so `id` is kept as
/// the raw JSON value (string or number) and any extra attributes ride along
/// untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    id: Value,
    #[serde(deserialize_with = "deserialize_remaining")]
    pub remaining: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Slot {
    pub fn new(id: impl Into<String>, remaining: i64) -> Self {
        Self {
            id: Value::String(id.into()),
            remaining,
            extra: Map::new(),
        }
    }

    /// The slot id in the string form used for matching.
    pub fn id(&self) -> String {
        match &self.id {
            Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        }
    }

    pub fn has_id(&self, slot_id: &str) -> bool {
        self.id() == slot_id
    }
}

/// Accepts `3`, `3.0` and `"3"`.
fn deserialize_remaining<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_integer_like(&value)
        .ok_or_else(|| de::Error::custom(format!("remaining must be an integer, got {value}")))
}

fn parse_integer_like(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}
