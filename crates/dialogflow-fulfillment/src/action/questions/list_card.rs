use serde_json::{json, Map, Value};

use super::{system_intent, SelectOption};
use crate::action::ResponseItem;

/// Let the user pick one entry of a vertical list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListCard {
    title: Option<String>,
    options: Vec<SelectOption>,
}

impl ListCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }
}

impl ResponseItem for ListCard {
    fn render_rich_response_item(&self) -> Option<Value> {
        None
    }

    fn render_system_intent(&self) -> Option<Value> {
        let mut list_select = Map::new();
        if let Some(title) = &self.title {
            list_select.insert("title".to_string(), json!(title));
        }
        let items: Vec<Value> = self.options.iter().map(SelectOption::render).collect();
        list_select.insert("items".to_string(), json!(items));

        Some(system_intent(
            "actions.intent.OPTION",
            "OptionValueSpec",
            json!({"listSelect": list_select}),
        ))
    }
}
