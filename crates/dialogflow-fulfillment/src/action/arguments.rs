use serde_json::Value;

/// Value fields of an argument, in the order they are looked up
const VALUE_FIELDS: [&str; 6] = [
    "textValue",
    "boolValue",
    "datetimeValue",
    "placeValue",
    "extension",
    "structuredValue",
];

/// Arguments of the current input, e.g. the answer to a question.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    arguments: Vec<Value>,
}

impl Arguments {
    /// Read the arguments of the first entry of `inputs`
    pub fn new(inputs: &Value) -> Self {
        let arguments = inputs
            .get(0)
            .and_then(|input| input.get("arguments"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Arguments { arguments }
    }

    /// The value of the named argument, or the raw argument when it has no
    /// known value field
    pub fn get(&self, name: &str) -> Option<&Value> {
        let argument = self
            .arguments
            .iter()
            .find(|argument| argument.get("name").and_then(Value::as_str) == Some(name))?;

        VALUE_FIELDS
            .iter()
            .find_map(|field| argument.get(*field))
            .or(Some(argument))
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}
