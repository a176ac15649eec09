use serde_json::{json, Map, Value};

use super::image_object;
use crate::action::ResponseItem;

/// One tile of a browsing carousel, linking to a web page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseCarouselOption {
    title: Option<String>,
    description: Option<String>,
    footer: Option<String>,
    url: String,
    image_url: Option<String>,
    accessibility_text: Option<String>,
}

impl BrowseCarouselOption {
    pub fn new<S: Into<String>>(url: S) -> Self {
        BrowseCarouselOption {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn footer<S: Into<String>>(mut self, footer: S) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Page opened when the tile is selected
    pub fn url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = url.into();
        self
    }

    pub fn image<S: Into<String>>(mut self, url: S, accessibility_text: Option<&str>) -> Self {
        self.image_url = Some(url.into());
        self.accessibility_text = accessibility_text.map(str::to_string);
        self
    }

    pub fn render(&self) -> Value {
        let mut out = Map::new();
        if let Some(title) = &self.title {
            out.insert("title".to_string(), json!(title));
        }
        if let Some(description) = &self.description {
            out.insert("description".to_string(), json!(description));
        }
        if let Some(footer) = &self.footer {
            out.insert("footer".to_string(), json!(footer));
        }
        if let Some(url) = &self.image_url {
            out.insert(
                "image".to_string(),
                image_object(url, self.accessibility_text.as_deref()),
            );
        }
        out.insert("openUrlAction".to_string(), json!({"url": self.url}));
        Value::Object(out)
    }
}

/// A horizontally scrolling set of web links.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseCarousel {
    image_display_options: Option<String>,
    options: Vec<BrowseCarouselOption>,
}

impl BrowseCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// One of `DEFAULT`, `WHITE` or `CROPPED`
    pub fn image_display_options<S: Into<String>>(mut self, options: S) -> Self {
        self.image_display_options = Some(options.into());
        self
    }

    pub fn add_option(mut self, option: BrowseCarouselOption) -> Self {
        self.options.push(option);
        self
    }
}

impl ResponseItem for BrowseCarousel {
    fn render_rich_response_item(&self) -> Option<Value> {
        let mut carousel_browse = Map::new();
        if let Some(options) = &self.image_display_options {
            carousel_browse.insert("imageDisplayOptions".to_string(), json!(options));
        }
        let items: Vec<Value> = self.options.iter().map(BrowseCarouselOption::render).collect();
        carousel_browse.insert("items".to_string(), json!(items));

        Some(json!({"carouselBrowse": carousel_browse}))
    }
}
