use serde_json::{json, Map, Value};

use super::{system_intent, SelectOption};
use crate::action::ResponseItem;

/// Let the user pick one of several image tiles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Carousel {
    image_display_options: Option<String>,
    options: Vec<SelectOption>,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// One of `DEFAULT`, `WHITE` or `CROPPED`
    pub fn image_display_options<S: Into<String>>(mut self, options: S) -> Self {
        self.image_display_options = Some(options.into());
        self
    }

    pub fn add_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }
}

impl ResponseItem for Carousel {
    fn render_rich_response_item(&self) -> Option<Value> {
        None
    }

    fn render_system_intent(&self) -> Option<Value> {
        let mut carousel_select = Map::new();
        if let Some(options) = &self.image_display_options {
            carousel_select.insert("imageDisplayOptions".to_string(), json!(options));
        }
        let items: Vec<Value> = self.options.iter().map(SelectOption::render).collect();
        carousel_select.insert("items".to_string(), json!(items));

        Some(system_intent(
            "actions.intent.OPTION",
            "OptionValueSpec",
            json!({"carouselSelect": carousel_select}),
        ))
    }
}
