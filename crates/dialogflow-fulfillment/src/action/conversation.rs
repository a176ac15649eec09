use serde_json::{json, Value};

use super::responses::SimpleResponse;
use super::{Arguments, Device, ResponseItem, Surface, User};

/// Something said in a conversation: plain speech or any response item.
#[derive(Debug)]
pub enum Prompt {
    Text(String),
    Item(Box<dyn ResponseItem>),
}

impl From<&str> for Prompt {
    fn from(text: &str) -> Self {
        Prompt::Text(text.to_string())
    }
}

impl From<String> for Prompt {
    fn from(text: String) -> Self {
        Prompt::Text(text)
    }
}

impl<T: ResponseItem + 'static> From<T> for Prompt {
    fn from(item: T) -> Self {
        Prompt::Item(Box::new(item))
    }
}

impl From<Prompt> for Box<dyn ResponseItem> {
    fn from(prompt: Prompt) -> Self {
        match prompt {
            Prompt::Text(text) => Box::new(SimpleResponse::new(text)),
            Prompt::Item(item) => item,
        }
    }
}

/// An Actions on Google conversation turn.
///
/// Built from the `payload` of the original request, it exposes what the
/// request says about the surface, device, user and current input, and
/// collects the items of the response. Hand it to
/// [`WebhookClient::reply`](crate::WebhookClient::reply) to send it.
#[derive(Debug)]
pub struct Conversation {
    conversation_id: Option<String>,
    surface: Surface,
    available_surfaces: Vec<Surface>,
    device: Device,
    user: User,
    arguments: Arguments,
    messages: Vec<Box<dyn ResponseItem>>,
    /// Index into `messages` of the question asked this turn
    question: Option<usize>,
    expect_user_response: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Conversation::new(&Value::Null)
    }
}

impl Conversation {
    pub fn new(payload: &Value) -> Self {
        let available_surfaces = payload
            .get("availableSurfaces")
            .and_then(Value::as_array)
            .map(|surfaces| surfaces.iter().map(Surface::new).collect())
            .unwrap_or_default();

        Conversation {
            conversation_id: payload
                .pointer("/conversation/conversationId")
                .and_then(Value::as_str)
                .map(String::from),
            surface: payload.get("surface").map(Surface::new).unwrap_or_default(),
            available_surfaces,
            device: payload.get("device").map(Device::new).unwrap_or_default(),
            user: payload.get("user").map(User::new).unwrap_or_default(),
            arguments: payload.get("inputs").map(Arguments::new).unwrap_or_default(),
            messages: Vec::new(),
            question: None,
            expect_user_response: true,
        }
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Other surfaces of the user the conversation could move to
    pub fn available_surfaces(&self) -> &[Surface] {
        &self.available_surfaces
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Say something and keep the microphone open
    pub fn ask<P: Into<Prompt>>(&mut self, prompt: P) -> &mut Self {
        self.push(prompt.into());
        self.expect_user_response = true;
        self
    }

    /// Say something and end the conversation
    pub fn close<P: Into<Prompt>>(&mut self, prompt: P) -> &mut Self {
        self.push(prompt.into());
        self.expect_user_response = false;
        self
    }

    pub fn expects_user_response(&self) -> bool {
        self.expect_user_response
    }

    fn push(&mut self, prompt: Prompt) {
        let item: Box<dyn ResponseItem> = prompt.into();
        if item.render_system_intent().is_some() {
            if self.question.is_some() {
                tracing::warn!("Conversation already has a question, replacing it with {:?}", item);
            }
            self.question = Some(self.messages.len());
        }
        self.messages.push(item);
    }

    /// Render the `google` payload of the response
    pub fn render(&self) -> Value {
        let mut items = Vec::new();
        let mut suggestions = Vec::new();
        let mut link_out_suggestion = None;

        for message in &self.messages {
            if let Some(item) = message.render_rich_response_item() {
                items.push(item);
            }
            if let Some(chips) = message.render_suggestions() {
                suggestions.extend(chips.into_iter().map(|title| json!({"title": title})));
            }
            if let Some(link_out) = message.render_link_out_suggestion() {
                link_out_suggestion = Some(link_out);
            }
        }

        let mut rich_response = json!({"items": items});
        if !suggestions.is_empty() {
            rich_response["suggestions"] = json!(suggestions);
        }
        if let Some(link_out) = link_out_suggestion {
            rich_response["linkOutSuggestion"] = link_out;
        }

        let mut out = json!({
            "expectUserResponse": self.expect_user_response,
            "richResponse": rich_response,
        });

        if let Some(system_intent) = self
            .question
            .and_then(|index| self.messages.get(index))
            .and_then(|question| question.render_system_intent())
        {
            out["systemIntent"] = system_intent;
        }

        if self.user.storage().is_changed() {
            out["userStorage"] = json!(self.user.storage().to_wire());
        }

        out
    }
}
