use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifespan given to contexts created from a bare name
pub const DEFAULT_LIFESPAN: u32 = 1;

/// A named piece of conversation state carried between turns.
///
/// `lifespan` and `parameters` are `None` only when a context was built from a
/// mapping whose values had the wrong type; see [`Context::from_mapping`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    name: String,
    lifespan: Option<u32>,
    parameters: Option<Map<String, Value>>,
}

impl Context {
    /// Create a context with the default lifespan and no parameters
    pub fn new<S: Into<String>>(name: S) -> Self {
        Context {
            name: name.into(),
            lifespan: Some(DEFAULT_LIFESPAN),
            parameters: Some(Map::new()),
        }
    }

    pub fn with_lifespan(mut self, lifespan: u32) -> Self {
        self.lifespan = Some(lifespan);
        self
    }

    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Build a context from a `{name, lifespan?, parameters?}` mapping.
    ///
    /// Returns `None` when there is no string `name`. A `lifespan` that is not
    /// a whole non-negative number, or `parameters` that are not an object, are
    /// kept as `None` instead of failing.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Option<Self> {
        let name = mapping.get("name")?.as_str()?;

        let lifespan = match mapping.get("lifespan") {
            None | Some(Value::Null) => Some(DEFAULT_LIFESPAN),
            Some(value) => numeric_lifespan(value),
        };

        let parameters = match mapping.get("parameters") {
            None | Some(Value::Null) => Some(Map::new()),
            Some(Value::Object(parameters)) => Some(parameters.clone()),
            // An empty list is how an empty mapping looks coming from loosely typed callers
            Some(Value::Array(items)) if items.is_empty() => Some(Map::new()),
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item.clone()))
                    .collect(),
            ),
            Some(_) => None,
        };

        Some(Context {
            name: name.to_string(),
            lifespan,
            parameters,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lifespan(&self) -> Option<u32> {
        self.lifespan
    }

    pub fn parameters(&self) -> Option<&Map<String, Value>> {
        self.parameters.as_ref()
    }

    /// Look up a single parameter by name
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.as_ref()?.get(name)
    }

    /// Lifespan worth sending back, zero counts as unset
    pub(crate) fn rendered_lifespan(&self) -> Option<u32> {
        self.lifespan.filter(|lifespan| *lifespan > 0)
    }

    /// Parameters worth sending back, empty counts as unset
    pub(crate) fn rendered_parameters(&self) -> Option<&Map<String, Value>> {
        self.parameters
            .as_ref()
            .filter(|parameters| !parameters.is_empty())
    }
}

fn numeric_lifespan(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .and_then(|lifespan| u32::try_from(lifespan).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    }
}
