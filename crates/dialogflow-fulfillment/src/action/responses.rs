pub mod basic_card;
pub mod browse_carousel;
pub mod image;
pub mod link_out_suggestion;
pub mod media_response;
pub mod simple_response;
pub mod suggestions;

pub use basic_card::BasicCard;
pub use browse_carousel::{BrowseCarousel, BrowseCarouselOption};
pub use image::Image;
pub use link_out_suggestion::LinkOutSuggestion;
pub use media_response::{MediaObject, MediaResponse};
pub use simple_response::SimpleResponse;
pub use suggestions::Suggestions;

use serde_json::{json, Value};

use crate::rich_message::DEFAULT_ACCESSIBILITY_TEXT;

/// `{url, accessibilityText}` image object used by cards and options
pub(crate) fn image_object(url: &str, accessibility_text: Option<&str>) -> Value {
    json!({
        "url": url,
        "accessibilityText": accessibility_text.unwrap_or(DEFAULT_ACCESSIBILITY_TEXT),
    })
}
