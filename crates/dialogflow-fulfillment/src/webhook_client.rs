use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::action::Conversation;
use crate::context::Context;
use crate::errors::{WebhookError, WebhookResult};
use crate::rich_message::{AgentVersion, OutgoingMessage, Payload, Platform, RichMessage, Text};

/// Separator between the session and the context name in v2 context names
const CONTEXTS_SEGMENT: &str = "/contexts/";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct V1Request {
    result: V1Result,
    session_id: String,
    original_request: Option<Map<String, Value>>,
    lang: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct V1Result {
    metadata: V1Metadata,
    action: Option<String>,
    parameters: Option<Map<String, Value>>,
    contexts: Option<Vec<RawContext>>,
    resolved_query: Option<String>,
    source: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct V1Metadata {
    intent_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct V2Request {
    query_result: V2QueryResult,
    session: String,
    original_detect_intent_request: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct V2QueryResult {
    intent: V2Intent,
    action: Option<String>,
    parameters: Option<Map<String, Value>>,
    output_contexts: Option<Vec<RawContext>>,
    query_text: Option<String>,
    language_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct V2Intent {
    display_name: Option<String>,
}

/// A context as sent in requests; v1 calls the lifespan `lifespan`, v2 `lifespanCount`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawContext {
    name: String,
    #[serde(alias = "lifespanCount")]
    lifespan: Option<u32>,
    parameters: Option<Map<String, Value>>,
}

impl RawContext {
    fn into_context(self, name: String) -> Context {
        Context::new(name)
            .with_lifespan(self.lifespan.unwrap_or(0))
            .with_parameters(self.parameters.unwrap_or_default())
    }
}

/// What a handler can reply with.
#[derive(Debug)]
pub enum Reply {
    /// Plain text, sent as a text message
    Text(String),
    Rich(Box<dyn RichMessage>),
    /// An Actions on Google conversation, sent as the platform payload
    Conversation(Conversation),
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Reply::Text(text)
    }
}

impl From<Conversation> for Reply {
    fn from(conversation: Conversation) -> Self {
        Reply::Conversation(conversation)
    }
}

impl From<Box<dyn RichMessage>> for Reply {
    fn from(message: Box<dyn RichMessage>) -> Self {
        Reply::Rich(message)
    }
}

impl<T: RichMessage + 'static> From<T> for Reply {
    fn from(message: T) -> Self {
        Reply::Rich(Box::new(message))
    }
}

/// The ways an outgoing context can be given.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextSpec {
    /// Just a name, with the default lifespan and no parameters
    Name(String),
    /// A `{name, lifespan?, parameters?}` JSON mapping
    Mapping(Value),
    Context(Context),
}

impl From<&str> for ContextSpec {
    fn from(name: &str) -> Self {
        ContextSpec::Name(name.to_string())
    }
}

impl From<String> for ContextSpec {
    fn from(name: String) -> Self {
        ContextSpec::Name(name)
    }
}

impl From<Value> for ContextSpec {
    fn from(mapping: Value) -> Self {
        ContextSpec::Mapping(mapping)
    }
}

impl From<Map<String, Value>> for ContextSpec {
    fn from(mapping: Map<String, Value>) -> Self {
        ContextSpec::Mapping(Value::Object(mapping))
    }
}

impl From<Context> for ContextSpec {
    fn from(context: Context) -> Self {
        ContextSpec::Context(context)
    }
}

impl TryFrom<ContextSpec> for Context {
    type Error = WebhookError;

    fn try_from(spec: ContextSpec) -> WebhookResult<Self> {
        match spec {
            ContextSpec::Name(name) => Ok(Context::new(name)),
            ContextSpec::Mapping(Value::Object(mapping)) => Context::from_mapping(&mapping)
                .ok_or_else(|| WebhookError::InvalidContext("Context must have a name".to_string())),
            ContextSpec::Mapping(Value::String(name)) => Ok(Context::new(name)),
            ContextSpec::Mapping(other) => Err(WebhookError::InvalidContext(format!(
                "Context must be a name, a mapping or a Context, got {}",
                other
            ))),
            ContextSpec::Context(context) => Ok(context),
        }
    }
}

/// A single webhook request and the response being built for it.
///
/// The agent version is fixed by the request (`result` for v1, `queryResult`
/// for v2) and picks the format the response is rendered in.
#[derive(Debug)]
pub struct WebhookClient {
    agent_version: AgentVersion,
    intent: String,
    action: Option<String>,
    session: String,
    parameters: Map<String, Value>,
    contexts: Option<Vec<Context>>,
    request_source: Option<String>,
    original_request: Option<Map<String, Value>>,
    query: String,
    locale: String,
    messages: Vec<OutgoingMessage>,
    text: Option<String>,
    outgoing_contexts: Vec<Context>,
}

impl WebhookClient {
    /// Parse a webhook request body.
    ///
    /// Fails with [`WebhookError::InvalidRequest`] when the body is neither a
    /// v1 nor a v2 request, or when its fields have the wrong JSON types.
    pub fn new(data: &Value) -> WebhookResult<Self> {
        if has_object(data, "result") {
            Self::parse_v1(data)
        } else if has_object(data, "queryResult") {
            Self::parse_v2(data)
        } else {
            Err(WebhookError::InvalidRequest(
                "expected a `result` (v1) or `queryResult` (v2) object".to_string(),
            ))
        }
    }

    /// Alias of [`WebhookClient::new`]
    pub fn from_data(data: &Value) -> WebhookResult<Self> {
        Self::new(data)
    }

    fn parse_v1(data: &Value) -> WebhookResult<Self> {
        let request: V1Request = serde_json::from_value(data.clone())
            .map_err(|e| WebhookError::InvalidRequest(e.to_string()))?;
        let result = request.result;

        let contexts = result.contexts.map(|contexts| {
            contexts
                .into_iter()
                .map(|context| {
                    let name = context.name.clone();
                    context.into_context(name)
                })
                .collect()
        });

        let mut original_request = None;
        let mut request_source = None;

        if let Some(mut original) = request.original_request {
            // v1 calls the platform payload `data`, renamed to match v2's `payload`
            if let Some(payload) = original.remove("data") {
                original.insert("payload".to_string(), payload);
                original_request = Some(original.clone());
            }

            request_source = string_at(&original, &["source"])
                .or_else(|| string_at(&original, &["payload", "source"]));
        }

        if request_source.is_none() {
            request_source = result.source.filter(|source| !source.is_empty());
        }

        tracing::debug!(
            intent = ?result.metadata.intent_name,
            source = ?request_source,
            "Parsed v1 webhook request"
        );

        Ok(WebhookClient {
            agent_version: AgentVersion::V1,
            intent: result.metadata.intent_name.unwrap_or_default(),
            action: result.action,
            session: request.session_id,
            parameters: result.parameters.unwrap_or_default(),
            contexts,
            request_source,
            original_request,
            query: result.resolved_query.unwrap_or_default(),
            locale: request.lang,
            messages: Vec::new(),
            text: None,
            outgoing_contexts: Vec::new(),
        })
    }

    fn parse_v2(data: &Value) -> WebhookResult<Self> {
        let request: V2Request = serde_json::from_value(data.clone())
            .map_err(|e| WebhookError::InvalidRequest(e.to_string()))?;
        let session = request.session;
        let query_result = request.query_result;

        let contexts = query_result.output_contexts.map(|contexts| {
            contexts
                .into_iter()
                .map(|context| {
                    let name = context_name_from_v2(&session, &context.name);
                    context.into_context(name)
                })
                .collect()
        });

        let request_source = request.original_detect_intent_request.as_ref().and_then(|original| {
            string_at(original, &["source"]).or_else(|| string_at(original, &["payload", "source"]))
        });

        tracing::debug!(
            intent = ?query_result.intent.display_name,
            source = ?request_source,
            "Parsed v2 webhook request"
        );

        Ok(WebhookClient {
            agent_version: AgentVersion::V2,
            intent: query_result.intent.display_name.unwrap_or_default(),
            action: query_result.action,
            session,
            parameters: query_result.parameters.unwrap_or_default(),
            contexts,
            request_source,
            original_request: request.original_detect_intent_request,
            query: query_result.query_text.unwrap_or_default(),
            locale: query_result.language_code.unwrap_or_default(),
            messages: Vec::new(),
            text: None,
            outgoing_contexts: Vec::new(),
        })
    }

    pub fn agent_version(&self) -> AgentVersion {
        self.agent_version
    }

    /// Display name of the matched intent
    pub fn intent(&self) -> &str {
        &self.intent
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Incoming contexts, `None` when the request had no context list
    pub fn contexts(&self) -> Option<&[Context]> {
        self.contexts.as_deref()
    }

    /// First incoming context with this name
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts
            .as_ref()?
            .iter()
            .find(|context| context.name() == name)
    }

    /// Platform the request came from (`google`, `slack`, ...), if the request said
    pub fn request_source(&self) -> Option<&str> {
        self.request_source.as_deref()
    }

    /// Platform responses are rendered for, `unspecified` when the request didn't say
    pub fn platform(&self) -> Platform {
        Platform::from_source(self.request_source.as_deref())
    }

    /// The request made to Dialogflow by the platform integration or API client
    pub fn original_request(&self) -> Option<&Map<String, Value>> {
        self.original_request.as_ref()
    }

    /// What the user said or typed
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether replies can use rich messages or only plain text reaches the user
    pub fn supports_rich_message(&self) -> bool {
        self.platform().supports_rich_message()
    }

    /// The Actions on Google conversation, for requests coming from the Google Assistant
    pub fn action_conversation(&self) -> Option<Conversation> {
        if !self.platform().is_google() {
            return None;
        }
        let payload = self.original_request.as_ref()?.get("payload")?;
        Some(Conversation::new(payload))
    }

    /// Add a reply to the response.
    ///
    /// When the platform can't show rich messages the reply's fallback text is
    /// also sent as the response's plain text.
    pub fn reply<R: Into<Reply>>(&mut self, reply: R) -> &mut Self {
        let platform = self.platform();
        let supports_rich_message = platform.supports_rich_message();

        let message: Box<dyn RichMessage> = match reply.into() {
            Reply::Text(text) => {
                if !supports_rich_message {
                    self.text = Some(text.clone());
                }
                Box::new(Text::new(text))
            }
            Reply::Rich(message) => {
                if !supports_rich_message {
                    if let Some(fallback) = message.fallback_text() {
                        self.text = Some(fallback.to_string());
                    }
                }
                message
            }
            Reply::Conversation(conversation) => Box::new(Payload::new(conversation.render())),
        };

        if message.is_payload() && self.messages.iter().any(OutgoingMessage::is_payload) {
            tracing::warn!("Response already has a payload, only the last one will be sent");
        }

        self.messages
            .push(OutgoingMessage::new(message, self.agent_version, platform));
        self
    }

    pub fn messages(&self) -> &[OutgoingMessage] {
        &self.messages
    }

    pub fn outgoing_contexts(&self) -> &[Context] {
        &self.outgoing_contexts
    }

    /// First outgoing context with this name
    pub fn outgoing_context(&self, name: &str) -> Option<&Context> {
        self.outgoing_contexts
            .iter()
            .find(|context| context.name() == name)
    }

    /// Add an outgoing context from a name, a `{name, lifespan, parameters}`
    /// mapping or a [`Context`].
    pub fn set_outgoing_context<C: Into<ContextSpec>>(&mut self, context: C) -> WebhookResult<&mut Self> {
        let context = Context::try_from(context.into())?;
        self.outgoing_contexts.push(context);
        Ok(self)
    }

    /// Remove every outgoing context with this name
    pub fn clear_outgoing_context(&mut self, name: &str) -> &mut Self {
        self.outgoing_contexts.retain(|context| context.name() != name);
        self
    }

    pub fn clear_outgoing_contexts(&mut self) -> &mut Self {
        self.outgoing_contexts.clear();
        self
    }

    /// Replace all outgoing contexts
    pub fn set_outgoing_contexts(&mut self, contexts: Vec<Context>) -> &mut Self {
        self.outgoing_contexts = contexts;
        self
    }

    /// Render the response in the format of the request's agent version
    pub fn render(&self) -> Value {
        match self.agent_version {
            AgentVersion::V1 => self.render_v1(),
            AgentVersion::V2 => self.render_v2(),
        }
    }

    fn render_v1(&self) -> Value {
        let mut out = json!({});
        let mut messages = Vec::new();

        for message in &self.messages {
            if message.is_payload() {
                out["data"] = message.render();
            } else {
                messages.push(message.render());
            }
        }

        out["messages"] = json!(messages);

        if let Some(text) = self.plain_text() {
            out["speech"] = json!(text);
        }

        let contexts: Vec<Value> = self
            .outgoing_contexts
            .iter()
            .map(|context| render_context(context, context.name().to_string(), "lifespan"))
            .collect();
        out["contextOut"] = json!(contexts);

        out
    }

    fn render_v2(&self) -> Value {
        let mut out = json!({});
        let mut messages = Vec::new();

        for message in &self.messages {
            if message.is_payload() {
                out["payload"] = message.render();
            } else {
                messages.push(message.render());
            }
        }

        if !messages.is_empty() {
            out["fulfillmentMessages"] = json!(messages);
        }

        if let Some(text) = self.plain_text() {
            out["fulfillmentText"] = json!(text);
        }

        let contexts: Vec<Value> = self
            .outgoing_contexts
            .iter()
            .map(|context| {
                let name = context_name_to_v2(&self.session, context.name());
                render_context(context, name, "lifespanCount")
            })
            .collect();
        out["outputContexts"] = json!(contexts);

        out
    }

    fn plain_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

fn render_context(context: &Context, name: String, lifespan_key: &str) -> Value {
    let mut out = json!({"name": name});
    if let Some(lifespan) = context.rendered_lifespan() {
        out[lifespan_key] = json!(lifespan);
    }
    if let Some(parameters) = context.rendered_parameters() {
        out["parameters"] = json!(parameters);
    }
    out
}

/// `{session}/contexts/{name}`
pub fn context_name_to_v2(session: &str, name: &str) -> String {
    format!("{}{}{}", session, CONTEXTS_SEGMENT, name)
}

/// Bare context name from a v2 `{session}/contexts/{name}` name.
///
/// Names under a different session keep everything after their last
/// `/contexts/`; names without it are returned unchanged.
pub fn context_name_from_v2(session: &str, name: &str) -> String {
    let prefix = format!("{}{}", session, CONTEXTS_SEGMENT);
    if let Some(bare) = name.strip_prefix(&prefix) {
        return bare.to_string();
    }
    match name.rfind(CONTEXTS_SEGMENT) {
        Some(index) => name[index + CONTEXTS_SEGMENT.len()..].to_string(),
        None => name.to_string(),
    }
}

/// A present, non-null top level key
fn has_object(data: &Value, key: &str) -> bool {
    data.get(key).filter(|value| !value.is_null()).is_some()
}

fn string_at(map: &Map<String, Value>, path: &[&str]) -> Option<String> {
    let (first, rest) = path.split_first()?;
    let mut value = map.get(*first)?;
    for key in rest {
        value = value.get(*key)?;
    }
    value
        .as_str()
        .filter(|source| !source.is_empty())
        .map(String::from)
}
