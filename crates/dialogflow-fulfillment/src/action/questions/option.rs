use serde_json::{json, Map, Value};

use crate::action::responses::image_object;

/// A selectable entry of a carousel or list.
///
/// The `key` comes back in the `OPTION` argument when the user picks it; the
/// synonyms are extra phrases that select it by voice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectOption {
    key: String,
    title: Option<String>,
    description: Option<String>,
    synonyms: Vec<String>,
    image_url: Option<String>,
    accessibility_text: Option<String>,
}

impl SelectOption {
    pub fn new<S: Into<String>>(key: S) -> Self {
        SelectOption {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = key.into();
        self
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    pub fn image<S: Into<String>>(mut self, url: S, accessibility_text: Option<&str>) -> Self {
        self.image_url = Some(url.into());
        self.accessibility_text = accessibility_text.map(str::to_string);
        self
    }

    pub fn render(&self) -> Value {
        let mut out = Map::new();
        out.insert(
            "optionInfo".to_string(),
            json!({"key": self.key, "synonyms": self.synonyms}),
        );
        if let Some(title) = &self.title {
            out.insert("title".to_string(), json!(title));
        }
        if let Some(description) = &self.description {
            out.insert("description".to_string(), json!(description));
        }
        if let Some(url) = &self.image_url {
            out.insert(
                "image".to_string(),
                image_object(url, self.accessibility_text.as_deref()),
            );
        }
        Value::Object(out)
    }
}
