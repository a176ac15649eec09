use anyhow::Result;
use indoc::indoc;
use serde_json::{json, Value};

use dialogflow_fulfillment::action::questions::Permission;
use dialogflow_fulfillment::action::responses::{BasicCard, Suggestions};
use dialogflow_fulfillment::errors::WebhookError;
use dialogflow_fulfillment::rich_message::{Card, Image, Payload, Suggestion, Text};
use dialogflow_fulfillment::{AgentVersion, Context, WebhookClient};

const V2_GREETING: &str = indoc! {r#"
    {
        "responseId": "e4a2f1c6-0c0b-4f3e-a1c1-3f0a9c7d2b11",
        "queryResult": {
            "queryText": "hi",
            "parameters": {},
            "allRequiredParamsPresent": true,
            "intent": {
                "name": "projects/p/agent/intents/0b9f",
                "displayName": "greeting"
            },
            "intentDetectionConfidence": 1,
            "languageCode": "en"
        },
        "session": "projects/p/agent/sessions/s1"
    }
"#};

const V1_WITH_CONTEXT: &str = indoc! {r#"
    {
        "id": "2b6c6b1e-41a0-4c1f-9a40-5c8bb4a0a7f3",
        "lang": "en",
        "sessionId": "s1",
        "result": {
            "source": "agent",
            "resolvedQuery": "hi",
            "action": "input.welcome",
            "parameters": {},
            "contexts": [
                {"name": "c1", "lifespan": 1, "parameters": {}}
            ],
            "metadata": {"intentName": "greeting"}
        }
    }
"#};

const V2_GOOGLE: &str = indoc! {r#"
    {
        "queryResult": {
            "queryText": "what can I do",
            "parameters": {"topic": "math"},
            "intent": {"displayName": "help"},
            "outputContexts": [
                {
                    "name": "projects/p/agent/sessions/s2/contexts/actions_capability_screen_output",
                    "lifespanCount": 0
                },
                {
                    "name": "projects/p/agent/sessions/s2/contexts/topic",
                    "lifespanCount": 5,
                    "parameters": {"topic": "math"}
                }
            ],
            "languageCode": "en-us"
        },
        "originalDetectIntentRequest": {
            "source": "google",
            "version": "2",
            "payload": {
                "isInSandbox": true,
                "surface": {
                    "capabilities": [
                        {"name": "actions.capability.SCREEN_OUTPUT"},
                        {"name": "actions.capability.AUDIO_OUTPUT"}
                    ]
                },
                "inputs": [
                    {
                        "rawInputs": [{"query": "what can I do", "inputType": "VOICE"}],
                        "arguments": [{"name": "text", "textValue": "what can I do"}],
                        "intent": "actions.intent.TEXT"
                    }
                ],
                "user": {
                    "userId": "u-1",
                    "locale": "en-US",
                    "lastSeen": "2024-11-02T10:15:30Z",
                    "userStorage": "{\"data\":{\"visits\":2}}"
                },
                "conversation": {"conversationId": "c-9", "type": "ACTIVE"}
            }
        },
        "session": "projects/p/agent/sessions/s2"
    }
"#};

fn parse(fixture: &str) -> Result<WebhookClient> {
    let data: Value = serde_json::from_str(fixture)?;
    Ok(WebhookClient::new(&data)?)
}

#[test]
fn test_v2_text_reply_without_platform() -> Result<()> {
    let mut agent = parse(V2_GREETING)?;
    assert_eq!(agent.agent_version(), AgentVersion::V2);
    assert_eq!(agent.intent(), "greeting");

    agent.reply("Hello");

    assert_eq!(
        agent.render(),
        json!({
            "fulfillmentText": "Hello",
            "fulfillmentMessages": [{"text": {"text": ["Hello"]}}],
            "outputContexts": []
        })
    );
    Ok(())
}

#[test]
fn test_v1_outgoing_context_from_name() -> Result<()> {
    let mut agent = parse(V1_WITH_CONTEXT)?;
    assert_eq!(agent.agent_version(), AgentVersion::V1);
    assert!(agent.context("c1").is_some());

    agent.set_outgoing_context("c1")?;

    assert_eq!(
        agent.render()["contextOut"],
        json!([{"name": "c1", "lifespan": 1}])
    );
    Ok(())
}

#[test]
fn test_incoming_contexts_round_trip() -> Result<()> {
    let mut agent = parse(V2_GOOGLE)?;
    let incoming = agent.contexts().unwrap_or_default().to_vec();
    agent.set_outgoing_contexts(incoming);

    assert_eq!(
        agent.render()["outputContexts"],
        json!([
            {"name": "projects/p/agent/sessions/s2/contexts/actions_capability_screen_output"},
            {
                "name": "projects/p/agent/sessions/s2/contexts/topic",
                "lifespanCount": 5,
                "parameters": {"topic": "math"}
            }
        ])
    );
    Ok(())
}

#[test]
fn test_v1_incoming_contexts_round_trip() -> Result<()> {
    let mut agent = parse(V1_WITH_CONTEXT)?;
    let incoming = agent.contexts().unwrap_or_default().to_vec();
    agent.set_outgoing_contexts(incoming);

    assert_eq!(
        agent.render()["contextOut"],
        json!([{"name": "c1", "lifespan": 1}])
    );
    Ok(())
}

#[test]
fn test_fallback_text_for_plain_text_platforms() -> Result<()> {
    let mut data: Value = serde_json::from_str(V1_WITH_CONTEXT)?;
    data["originalRequest"] = json!({"source": "twitter", "data": {}});
    let mut agent = WebhookClient::new(&data)?;
    assert!(!agent.supports_rich_message());

    agent
        .reply(Image::new("https://example.com/cat.png").with_fallback_text("A cat"))
        .reply(Suggestion::new(["More cats", "No more"]));

    let rendered = agent.render();
    assert_eq!(rendered["speech"], "A cat");
    assert_eq!(rendered["messages"].as_array().map(Vec::len), Some(2));
    assert_eq!(rendered["messages"][0]["type"], 3);
    assert_eq!(rendered["messages"][0]["platform"], "twitter");
    Ok(())
}

#[test]
fn test_rich_platform_gets_no_plain_text() -> Result<()> {
    let mut data: Value = serde_json::from_str(V2_GREETING)?;
    data["originalDetectIntentRequest"] = json!({"source": "facebook", "payload": {}});
    let mut agent = WebhookClient::new(&data)?;

    agent
        .reply(Text::new("Hello"))
        .reply(Card::new().title("Weather").button("Forecast", "https://example.com"));

    let rendered = agent.render();
    assert!(rendered.get("fulfillmentText").is_none());
    assert_eq!(
        rendered["fulfillmentMessages"][1],
        json!({
            "card": {
                "title": "Weather",
                "buttons": [{"text": "Forecast", "postback": "https://example.com"}]
            },
            "platform": "FACEBOOK"
        })
    );
    Ok(())
}

#[test]
fn test_render_is_idempotent() -> Result<()> {
    let mut agent = parse(V2_GOOGLE)?;
    agent.reply("Sure").set_outgoing_context("followup")?;

    let first = agent.render();
    let second = agent.render();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_invalid_request() {
    let err = WebhookClient::new(&json!({"session": "s1"})).unwrap_err();
    assert!(matches!(err, WebhookError::InvalidRequest(_)));
    assert!(err.to_string().starts_with("Invalid Dialogflow request"));
}

#[test]
fn test_invalid_context() -> Result<()> {
    let mut agent = parse(V2_GREETING)?;
    let err = agent
        .set_outgoing_context(json!({"lifespan": 3}))
        .unwrap_err();
    assert!(matches!(err, WebhookError::InvalidContext(_)));
    Ok(())
}

#[test]
fn test_permission_scopes() {
    assert!(Permission::create("To greet you", ["NAME"]).is_ok());

    let err = Permission::create("To greet you", ["NAME", "BOGUS"]).unwrap_err();
    assert!(matches!(err, WebhookError::InvalidPermission(_)));
}

#[test]
fn test_v1_source_detection() -> Result<()> {
    let mut data: Value = serde_json::from_str(V1_WITH_CONTEXT)?;
    data["originalRequest"] = json!({"data": {"source": "telegram"}});
    let agent = WebhookClient::new(&data)?;
    assert_eq!(agent.request_source(), Some("telegram"));

    let agent = parse(V1_WITH_CONTEXT)?;
    assert_eq!(agent.request_source(), Some("agent"));
    Ok(())
}

#[test]
fn test_google_conversation() -> Result<()> {
    let mut agent = parse(V2_GOOGLE)?;
    let mut conversation = agent.action_conversation().expect("google request");

    assert_eq!(conversation.conversation_id(), Some("c-9"));
    assert!(conversation.surface().has_screen());
    assert_eq!(conversation.user().id(), Some("u-1"));
    assert_eq!(
        conversation.arguments().get("text"),
        Some(&json!("what can I do"))
    );
    assert_eq!(
        conversation.user().storage().get("visits"),
        Some(&json!(2))
    );

    conversation.user_mut().storage_mut().set("visits", json!(3));
    conversation
        .ask("You can ask me about math")
        .ask(BasicCard::new().title("Math"))
        .ask(Suggestions::new(["Algebra", "Geometry"]));
    agent.reply(conversation);

    let rendered = agent.render();
    let google = &rendered["payload"]["google"];
    assert_eq!(google["expectUserResponse"], true);
    assert_eq!(google["richResponse"]["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        google["richResponse"]["suggestions"],
        json!([{"title": "Algebra"}, {"title": "Geometry"}])
    );
    assert_eq!(google["userStorage"], "{\"data\":{\"visits\":3}}");
    assert!(rendered.get("fulfillmentMessages").is_none());
    Ok(())
}

#[test]
fn test_google_permission_question() -> Result<()> {
    let mut agent = parse(V2_GOOGLE)?;
    let mut conversation = agent.action_conversation().expect("google request");
    conversation.ask(Permission::create("To address you by name", ["NAME"])?);
    agent.reply(conversation);

    let system_intent = &agent.render()["payload"]["google"]["systemIntent"];
    assert_eq!(system_intent["intent"], "actions.intent.PERMISSION");
    assert_eq!(
        system_intent["data"],
        json!({
            "@type": "type.googleapis.com/google.actions.v2.PermissionValueSpec",
            "optContext": "To address you by name",
            "permissions": ["NAME"]
        })
    );
    Ok(())
}

#[test]
fn test_raw_payload_for_platform() -> Result<()> {
    let mut data: Value = serde_json::from_str(V2_GREETING)?;
    data["originalDetectIntentRequest"] = json!({"source": "slack"});
    let mut agent = WebhookClient::new(&data)?;

    agent.reply(Payload::new(json!({"attachments": [{"text": "hi"}]})));

    assert_eq!(
        agent.render(),
        json!({
            "payload": {"slack": {"attachments": [{"text": "hi"}]}},
            "outputContexts": []
        })
    );
    Ok(())
}

#[test]
fn test_context_with_parameters_v2() -> Result<()> {
    let mut agent = parse(V2_GREETING)?;
    let context = Context::new("order").with_lifespan(2);
    agent.set_outgoing_context(context)?;
    agent.set_outgoing_context(json!({"name": "cart", "parameters": {"items": 3}}))?;

    assert_eq!(
        agent.render()["outputContexts"],
        json!([
            {"name": "projects/p/agent/sessions/s1/contexts/order", "lifespanCount": 2},
            {
                "name": "projects/p/agent/sessions/s1/contexts/cart",
                "lifespanCount": 1,
                "parameters": {"items": 3}
            }
        ])
    );
    Ok(())
}
