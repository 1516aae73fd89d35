use serde::Deserialize;
use serde_json::Value;

/// A text field the recognition API may send either as a plain string or
/// wrapped in an object carrying a `value` property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum TextField {
    Plain(String),
    Wrapped(String),
    #[default]
    Absent,
}

impl From<Value> for TextField {
    fn from(value: Value) -> Self {
        Self::from_json(Some(&value))
    }
}

impl TextField {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(text)) => TextField::Plain(text.clone()),
            Some(Value::Object(fields)) => match fields.get("value") {
                Some(Value::String(text)) => TextField::Wrapped(text.clone()),
                _ => TextField::Absent,
            },
            _ => TextField::Absent,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            TextField::Plain(text) | TextField::Wrapped(text) => text,
            TextField::Absent => String::new(),
        }
    }
}
