pub mod arguments;
pub mod conversation;
pub mod device;
pub mod questions;
pub mod responses;
pub mod surface;
pub mod user;

pub use arguments::Arguments;
pub use conversation::Conversation;
pub use device::{Coordinates, Device, Location};
pub use surface::Surface;
pub use user::{User, UserName, UserStorage};

use serde_json::Value;
use std::fmt::Debug;

/// An item of an Actions on Google rich response.
///
/// Items render into at most one entry of `richResponse.items`. Chips and
/// questions contribute elsewhere in the response through the other methods.
pub trait ResponseItem: Debug + Send + Sync {
    /// The single `richResponse.items` entry, if this item has one
    fn render_rich_response_item(&self) -> Option<Value>;

    /// Suggestion chip titles
    fn render_suggestions(&self) -> Option<Vec<String>> {
        None
    }

    fn render_link_out_suggestion(&self) -> Option<Value> {
        None
    }

    /// The system intent that collects the answer to a question
    fn render_system_intent(&self) -> Option<Value> {
        None
    }
}
