use serde_json::{json, Map, Value};

use crate::action::ResponseItem;

/// A playable audio file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaObject {
    url: String,
    name: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    image: Option<String>,
}

impl MediaObject {
    pub fn new<S: Into<String>>(url: S) -> Self {
        MediaObject {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon<S: Into<String>>(mut self, icon: S) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Large image shown while playing
    pub fn image<S: Into<String>>(mut self, image: S) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn render(&self) -> Value {
        let mut out = Map::new();
        out.insert("contentUrl".to_string(), json!(self.url));
        if let Some(name) = &self.name {
            out.insert("name".to_string(), json!(name));
        }
        if let Some(description) = &self.description {
            out.insert("description".to_string(), json!(description));
        }
        if let Some(icon) = &self.icon {
            out.insert("icon".to_string(), json!({"url": icon}));
        }
        if let Some(image) = &self.image {
            out.insert("largeImage".to_string(), json!({"url": image}));
        }
        Value::Object(out)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaResponse {
    media_objects: Vec<MediaObject>,
}

impl MediaResponse {
    pub fn new(media_object: Option<MediaObject>) -> Self {
        MediaResponse {
            media_objects: media_object.into_iter().collect(),
        }
    }

    pub fn add(mut self, media_object: MediaObject) -> Self {
        self.media_objects.push(media_object);
        self
    }
}

impl ResponseItem for MediaResponse {
    fn render_rich_response_item(&self) -> Option<Value> {
        let mut media_response = Map::new();
        media_response.insert("mediaType".to_string(), json!("AUDIO"));
        if !self.media_objects.is_empty() {
            let objects: Vec<Value> = self.media_objects.iter().map(MediaObject::render).collect();
            media_response.insert("mediaObjects".to_string(), json!(objects));
        }
        Some(json!({"mediaResponse": media_response}))
    }
}
