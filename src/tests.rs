//! Tests for maap-bot-sdk

mod bot_tests {
    use crate::bot::{api_result, message_body, Bot, BotConfig};
    use crate::contact::MessageContact;
    use crate::error::Error;
    use crate::message::MessageContent;
    use crate::suggestion::Suggestions;
    use serde_json::json;

    fn bot() -> Bot {
        Bot::new(BotConfig::new("TOKEN", "https://api.example.com/bot/v1", "BOT_ID")).unwrap()
    }

    #[test]
    fn test_construction_succeeds() {
        assert_eq!(bot().bot_id(), "BOT_ID");
    }

    #[test]
    fn test_missing_token() {
        let err = Bot::new(BotConfig::new("", "https://api.example.com", "BOT_ID")).unwrap_err();
        assert!(matches!(err, Error::Config("token")));
        assert_eq!(err.to_string(), "Missing token.");
    }

    #[test]
    fn test_missing_api_url() {
        let err = Bot::new(BotConfig::new("TOKEN", "", "BOT_ID")).unwrap_err();
        assert_eq!(err.to_string(), "Missing API URL.");
    }

    #[test]
    fn test_missing_bot_id() {
        let err = Bot::new(BotConfig::new("TOKEN", "https://api.example.com", "")).unwrap_err();
        assert_eq!(err.to_string(), "Missing bot ID.");
    }

    #[test]
    fn test_text_message_body() {
        let contact = MessageContact::new("u", "c");
        let body = message_body(&contact, &MessageContent::from("hello"), None);

        assert_eq!(
            body,
            json!({
                "RCSMessage": { "textMessage": "hello" },
                "messageContact": { "userContact": "u", "chatId": "c" },
            })
        );
        assert!(body["RCSMessage"].get("suggestedChipList").is_none());
    }

    #[test]
    fn test_message_body_with_suggestions() {
        let contact = MessageContact::new("u", "c");
        let mut suggestions = Suggestions::new();
        suggestions.add_reply("Yes", "yes-tapped");
        suggestions.add_reply("No", "no-tapped");

        let body = message_body(&contact, &MessageContent::from("hi"), Some(&suggestions));
        let chips = &body["RCSMessage"]["suggestedChipList"]["suggestions"];

        assert_eq!(chips, &serde_json::to_value(&suggestions).unwrap());
        assert_eq!(chips[0]["reply"]["displayText"], "Yes");
        assert_eq!(chips[1]["reply"]["postback"]["data"], "no-tapped");
    }

    #[test]
    fn test_opaque_contact_passes_through() {
        let contact = MessageContact::from(json!({"userContact": "+15551234"}));
        let body = message_body(&contact, &MessageContent::from("hi"), None);

        assert_eq!(body["messageContact"], json!({"userContact": "+15551234"}));
    }

    #[test]
    fn test_error_field_in_success_body() {
        let err = api_result(json!({"error": "bad token"})).unwrap_err();
        match err {
            Error::Api(value) => assert_eq!(value, json!("bad token")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_body_without_error_field_is_success() {
        let body = json!({"RCSMessage": {"msgId": "abc"}});
        assert_eq!(api_result(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_null_error_field_is_success() {
        let body = json!({"error": null, "msgId": "abc"});
        assert_eq!(api_result(body.clone()).unwrap(), body);
    }
}

mod contact_tests {
    use crate::contact::MessageContact;
    use serde_json::json;

    #[test]
    fn test_pair_serialization() {
        let contact = MessageContact::new("+15551234", "chat-7");
        assert_eq!(
            contact.to_wire(),
            json!({"userContact": "+15551234", "chatId": "chat-7"})
        );
    }

    #[test]
    fn test_partial_pair_omits_missing_field() {
        let contact = MessageContact::with_user_contact("+15551234");
        assert_eq!(contact.to_wire(), json!({"userContact": "+15551234"}));

        let contact = MessageContact::with_chat_id("chat-7");
        assert_eq!(contact.to_wire(), json!({"chatId": "chat-7"}));
    }
}

mod suggestion_tests {
    use crate::suggestion::{DialType, RecordingType, SettingsType, Suggestions};
    use serde_json::json;

    #[test]
    fn test_reply_wire_format() {
        let mut suggestions = Suggestions::new();
        suggestions.add_reply("Yes", "yes-tapped");

        assert_eq!(
            serde_json::to_value(&suggestions).unwrap(),
            json!([{
                "reply": {
                    "displayText": "Yes",
                    "postback": { "data": "yes-tapped" },
                }
            }])
        );
    }

    #[test]
    fn test_phone_dialer_action() {
        let mut suggestions = Suggestions::new();
        suggestions.add_dialer_action(
            "Call us",
            "call-tapped",
            DialType::DialPhoneNumber,
            "+1555",
            Some("http://x".to_string()),
            None,
        );

        assert_eq!(
            serde_json::to_value(&suggestions).unwrap(),
            json!([{
                "action": {
                    "dialerAction": {
                        "dialPhoneNumber": {
                            "phoneNumber": "+1555",
                            "fallbackUrl": "http://x",
                        }
                    },
                    "displayText": "Call us",
                    "postback": { "data": "call-tapped" },
                }
            }])
        );
    }

    #[test]
    fn test_enriched_call_carries_subject() {
        let mut suggestions = Suggestions::new();
        suggestions.add_dialer_action(
            "Call about order",
            "data",
            DialType::DialEnrichedCall,
            "+1555",
            None,
            Some("Order 42".to_string()),
        );

        let value = serde_json::to_value(&suggestions).unwrap();
        let call = &value[0]["action"]["dialerAction"]["dialEnrichedCall"];
        assert_eq!(call["subject"], "Order 42");
        assert!(call.get("fallbackUrl").is_none());
    }

    #[test]
    fn test_url_action() {
        let mut suggestions = Suggestions::new();
        suggestions.add_url_action("Open", "open-tapped", "https://example.com");

        let value = serde_json::to_value(&suggestions).unwrap();
        assert_eq!(
            value[0]["action"]["urlAction"],
            json!({"openUrl": {"url": "https://example.com"}})
        );
    }

    #[test]
    fn test_map_actions() {
        let mut suggestions = Suggestions::new();
        suggestions.add_request_location_push_map_action("Share location", "loc");
        suggestions.add_show_location_map_action(
            "Our office",
            "office",
            48.85,
            2.35,
            Some("HQ".to_string()),
            None,
            None,
        );

        let value = serde_json::to_value(&suggestions).unwrap();
        assert_eq!(
            value[0]["action"]["mapAction"],
            json!({"requestLocationPush": {}})
        );
        let location = &value[1]["action"]["mapAction"]["showLocation"]["location"];
        assert_eq!(location["latitude"], 48.85);
        assert_eq!(location["label"], "HQ");
        assert!(location.get("query").is_none());
    }

    #[test]
    fn test_compose_and_device_actions() {
        let mut suggestions = Suggestions::new();
        suggestions.add_text_compose_action("Draft", "draft", "+1555", "prefilled");
        suggestions.add_recording_compose_action("Record", "rec", "+1555", RecordingType::Audio);
        suggestions.add_device_action("Device", "dev");

        let value = serde_json::to_value(&suggestions).unwrap();
        assert_eq!(
            value[0]["action"]["composeAction"]["composeTextMessage"],
            json!({"phoneNumber": "+1555", "text": "prefilled"})
        );
        assert_eq!(
            value[1]["action"]["composeAction"]["composeRecordingMessage"],
            json!({"phoneNumber": "+1555", "type": "AUDIO"})
        );
        assert_eq!(
            value[2]["action"]["deviceAction"],
            json!({"requestDeviceSpecifics": {}})
        );
    }

    #[test]
    fn test_settings_actions() {
        let mut suggestions = Suggestions::new();
        suggestions.add_settings_action("Privacy", "p", SettingsType::DisableAnonymization);
        suggestions.add_settings_action("Read receipts", "r", SettingsType::EnableDisplayedNotifications);

        let value = serde_json::to_value(&suggestions).unwrap();
        assert_eq!(
            value[0]["action"]["settingsAction"],
            json!({"disableAnonymization": {}})
        );
        assert_eq!(
            value[1]["action"]["settingsAction"],
            json!({"enableDisplayedNotifications": {}})
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut suggestions = Suggestions::new();
        suggestions.add_reply("first", "1");
        suggestions.add_url_action("second", "2", "https://example.com");
        suggestions.add_reply("third", "3");

        let value = serde_json::to_value(&suggestions).unwrap();
        assert_eq!(value[0]["reply"]["displayText"], "first");
        assert_eq!(value[1]["action"]["displayText"], "second");
        assert_eq!(value[2]["reply"]["displayText"], "third");
    }

    #[test]
    fn test_constant_wire_values() {
        assert_eq!(serde_json::to_value(DialType::DialPhoneNumber).unwrap(), "dialPhoneNumber");
        assert_eq!(serde_json::to_value(DialType::DialEnrichedCall).unwrap(), "dialEnrichedCall");
        assert_eq!(serde_json::to_value(DialType::DialVideoCall).unwrap(), "dialVideoCall");
        assert_eq!(
            serde_json::to_value(SettingsType::DisableAnonymization).unwrap(),
            "disableAnonymization"
        );
        assert_eq!(serde_json::to_value(RecordingType::Video).unwrap(), "VIDEO");
    }
}

mod rich_card_tests {
    use crate::rich_card::{CardOrientation, ImageAlignment, Media, MediaHeight, Richcard};
    use crate::suggestion::Suggestions;
    use serde_json::json;

    #[test]
    fn test_default_card_is_vertical() {
        let card = Richcard::new().with_title("Title");
        let wire = card.to_wire();
        let layout = &wire["message"]["generalPurposeCard"]["layout"];

        assert_eq!(layout["cardOrientation"], "VERTICAL");
        assert!(layout.get("imageAlignment").is_none());
    }

    #[test]
    fn test_horizontal_card_carries_alignment() {
        let card = Richcard::new()
            .with_orientation(CardOrientation::Horizontal)
            .with_image_alignment(ImageAlignment::Right);
        let wire = card.to_wire();
        let layout = &wire["message"]["generalPurposeCard"]["layout"];

        assert_eq!(layout["cardOrientation"], "HORIZONTAL");
        assert_eq!(layout["imageAlignment"], "RIGHT");
    }

    #[test]
    fn test_alignment_dropped_on_vertical_card() {
        let card = Richcard::new().with_image_alignment(ImageAlignment::Left);
        let wire = card.to_wire();

        assert!(wire["message"]["generalPurposeCard"]["layout"]
            .get("imageAlignment")
            .is_none());
    }

    #[test]
    fn test_unset_content_fields_omitted() {
        let card = Richcard::new().with_title("Only a title");
        let content = &card.to_wire()["message"]["generalPurposeCard"]["content"];

        assert_eq!(content, &json!({"title": "Only a title"}));
    }

    #[test]
    fn test_full_card_content() {
        let media = Media::new(
            "https://cdn.example.com/product.jpg",
            "image/jpeg",
            32_768,
            MediaHeight::MediumHeight,
        )
        .with_thumbnail("https://cdn.example.com/thumb.jpg", "image/jpeg");

        let mut suggestions = Suggestions::new();
        suggestions.add_reply("Buy", "buy-tapped");

        let card = Richcard::new()
            .with_title("Product")
            .with_description("A great product")
            .with_media(media)
            .with_suggestions(suggestions);

        let content = &card.to_wire()["message"]["generalPurposeCard"]["content"];
        assert_eq!(content["media"]["mediaUrl"], "https://cdn.example.com/product.jpg");
        assert_eq!(content["media"]["height"], "MEDIUM_HEIGHT");
        assert_eq!(content["media"]["thumbnailUrl"], "https://cdn.example.com/thumb.jpg");
        assert_eq!(content["title"], "Product");
        assert_eq!(content["suggestions"][0]["reply"]["displayText"], "Buy");
    }
}

mod carousel_tests {
    use crate::carousel::{CardWidth, RichcardCarousel};
    use crate::rich_card::Richcard;

    #[test]
    fn test_default_width_is_small() {
        let carousel = RichcardCarousel::new();
        let wire = carousel.to_wire();

        assert_eq!(
            wire["message"]["generalPurposeCardCarousel"]["layout"]["cardWidth"],
            "SMALL_WIDTH"
        );
    }

    #[test]
    fn test_carousel_embeds_card_contents_in_order() {
        let mut carousel = RichcardCarousel::new().with_card_width(CardWidth::MediumWidth);
        carousel.add_richcard(Richcard::new().with_title("First"));
        carousel.add_richcard(Richcard::new().with_title("Second"));

        let wire = carousel.to_wire();
        let inner = &wire["message"]["generalPurposeCardCarousel"];

        assert_eq!(inner["layout"]["cardWidth"], "MEDIUM_WIDTH");
        let content = inner["content"].as_array().unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0]["title"], "First");
        assert_eq!(content[1]["title"], "Second");
        // Card contents only: no per-card message wrapper or layout.
        assert!(content[0].get("message").is_none());
        assert!(content[0].get("layout").is_none());
    }
}

mod message_tests {
    use crate::message::{
        AudioMessage, FileMessage, GeolocationPushMessage, MessageContent, MessageStatus,
    };
    use serde_json::json;

    #[test]
    fn test_file_message_omits_unset_fields() {
        let file = FileMessage::new("https://cdn.example.com/report.pdf");
        assert_eq!(
            serde_json::to_value(&file).unwrap(),
            json!({"fileUrl": "https://cdn.example.com/report.pdf"})
        );
    }

    #[test]
    fn test_file_message_mime_key_casing() {
        let file = FileMessage::new("https://cdn.example.com/report.pdf")
            .with_file_mime_type("application/pdf")
            .with_thumbnail_mime_type("image/png");

        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["fileMIMEType"], "application/pdf");
        assert_eq!(value["thumbnailMIMEType"], "image/png");
    }

    #[test]
    fn test_audio_message() {
        let audio = AudioMessage::new("https://cdn.example.com/note.amr")
            .with_file_size(2048)
            .with_playing_length(12_000);

        assert_eq!(
            serde_json::to_value(&audio).unwrap(),
            json!({
                "fileUrl": "https://cdn.example.com/note.amr",
                "fileSize": 2048,
                "playingLength": 12000,
            })
        );
    }

    #[test]
    fn test_geolocation_message() {
        let geo = GeolocationPushMessage::new("48.85 2.35")
            .with_label("Paris")
            .with_radius(150.0);

        assert_eq!(
            serde_json::to_value(&geo).unwrap(),
            json!({"pos": "48.85 2.35", "label": "Paris", "radius": 150.0})
        );
    }

    #[test]
    fn test_content_wire_keys() {
        let cases: Vec<(MessageContent, &str)> = vec![
            (MessageContent::from("hi"), "textMessage"),
            (
                MessageContent::from(FileMessage::new("https://x/f")),
                "fileMessage",
            ),
            (
                MessageContent::from(AudioMessage::new("https://x/a")),
                "audioMessage",
            ),
            (
                MessageContent::from(GeolocationPushMessage::new("0 0")),
                "geolocationPushMessage",
            ),
            (
                MessageContent::from(crate::rich_card::Richcard::new()),
                "richcardMessage",
            ),
            (
                MessageContent::from(crate::carousel::RichcardCarousel::new()),
                "richcardMessage",
            ),
        ];

        for (content, expected_key) in cases {
            let (key, _) = content.to_wire();
            assert_eq!(key, expected_key);
        }
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_value(MessageStatus::Cancelled).unwrap(), "cancelled");
        assert_eq!(serde_json::to_value(MessageStatus::Displayed).unwrap(), "displayed");
    }
}

mod dispatch_tests {
    use crate::bot::{Bot, BotConfig};
    use crate::dispatch::EventPayload;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn bot() -> Bot {
        Bot::new(BotConfig::new("TOKEN", "https://api.example.com/bot/v1", "BOT_ID")).unwrap()
    }

    fn payload(value: serde_json::Value) -> EventPayload {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_message_event_binds_reply_to_contact() {
        let bot = bot();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        bot.on("message", move |payload, reply| {
            let sink = sink.clone();
            async move {
                let contact = reply.expect("reply should be bound").contact().to_wire();
                let text = payload.rcs_message.unwrap()["textMessage"].clone();
                sink.lock().unwrap().push((contact, text));
            }
        });

        bot.handle_event(payload(json!({
            "event": "message",
            "messageContact": {"userContact": "u", "chatId": "c"},
            "RCSMessage": {"textMessage": "hi"},
        })))
        .await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, json!({"userContact": "u", "chatId": "c"}));
        assert_eq!(seen[0].1, json!("hi"));
    }

    #[tokio::test]
    async fn test_event_without_contact_has_no_reply() {
        let bot = bot();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        bot.on("isTyping", move |_payload, reply| {
            let counter = counter.clone();
            async move {
                assert!(reply.is_none());
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        bot.handle_event(payload(json!({"event": "isTyping"}))).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_null_contact_has_no_reply() {
        let bot = bot();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        bot.on("message", move |_payload, reply| {
            let counter = counter.clone();
            async move {
                assert!(reply.is_none());
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        bot.handle_event(payload(json!({"event": "message", "messageContact": null})))
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_envelope_without_event_is_ignored() {
        let bot = bot();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        bot.on("message", move |_payload, _reply| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        bot.handle_event(payload(json!({"RCSMessage": {"textMessage": "hi"}})))
            .await;
        bot.handle_event(payload(json!({"event": ""}))).await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_handlers_run_in_registration_order() {
        let bot = bot();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in 1..=3 {
            let sink = order.clone();
            bot.on("message", move |_payload, _reply| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push(tag);
                }
            });
        }

        bot.handle_event(payload(json!({"event": "message"}))).await;

        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    #[should_panic(expected = "handler blew up")]
    async fn test_handler_panic_propagates() {
        let bot = bot();
        bot.on("message", |_payload, _reply| async {
            panic!("handler blew up");
        });

        bot.handle_event(payload(json!({"event": "message"}))).await;
    }
}

mod webhook_tests {
    use crate::bot::{Bot, BotConfig};
    use crate::webhook;
    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::{header, Method, StatusCode};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn bot() -> Bot {
        Bot::new(BotConfig::new("TOKEN", "https://api.example.com/bot/v1", "BOT_ID")).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_non_post_is_acknowledged_without_dispatch() {
        let bot = bot();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        bot.on("message", move |_payload, _reply| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        let response = webhook::handle(State(bot), Method::GET, Bytes::new()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_string(response).await, "");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_post_dispatches_and_acknowledges() {
        let bot = bot();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        bot.on("message", move |payload, reply| {
            let counter = counter.clone();
            async move {
                assert!(reply.is_some());
                assert_eq!(payload.rcs_message.unwrap()["textMessage"], "hi");
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        let body = json!({
            "event": "message",
            "messageContact": {"userContact": "u", "chatId": "c"},
            "RCSMessage": {"textMessage": "hi"},
        });
        let response = webhook::handle(
            State(bot),
            Method::POST,
            Bytes::from(serde_json::to_vec(&body).unwrap()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unparsable_body_is_swallowed() {
        let bot = bot();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        bot.on("message", move |_payload, _reply| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        let response = webhook::handle(
            State(bot),
            Method::POST,
            Bytes::from_static(b"not json at all"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
