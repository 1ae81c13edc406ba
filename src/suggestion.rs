//! Suggested replies and actions (chip lists)

use serde::{Deserialize, Serialize};

/// Dialer call types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialType {
    DialPhoneNumber,
    DialEnrichedCall,
    DialVideoCall,
}

/// Settings-action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsType {
    DisableAnonymization,
    EnableDisplayedNotifications,
}

/// Recording kinds for the compose-recording action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordingType {
    Audio,
    Video,
}

/// One suggestion chip: either a reply or an action
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<SuggestedReply>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SuggestedAction>,
}

/// Quick-reply chip
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedReply {
    pub display_text: String,
    pub postback: Postback,
}

/// Opaque payload echoed back when the user taps a chip
#[derive(Debug, Clone, Serialize)]
pub struct Postback {
    pub data: String,
}

/// Action chip. Exactly one of the action sub-objects is populated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_action: Option<UrlAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialer_action: Option<DialerAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_action: Option<MapAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_action: Option<CalendarAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compose_action: Option<ComposeAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_action: Option<DeviceAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_action: Option<SettingsAction>,

    pub display_text: String,
    pub postback: Postback,
}

/// Open a URL in the browser
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAction {
    pub open_url: OpenUrl,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUrl {
    pub url: String,
}

/// Start a call from the dialer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialerAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dial_phone_number: Option<DialPhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dial_enriched_call: Option<DialEnrichedCall>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dial_video_call: Option<DialVideoCall>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialPhoneNumber {
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialEnrichedCall {
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialVideoCall {
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
}

/// Request or show a location on the map
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_location_push: Option<RequestLocationPush>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_location: Option<ShowLocation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestLocationPush {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowLocation {
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Create a calendar event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarAction {
    pub create_calendar_event: CreateCalendarEvent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarEvent {
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
}

/// Compose a draft text or recording addressed to a number
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compose_text_message: Option<ComposeTextMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compose_recording_message: Option<ComposeRecordingMessage>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeTextMessage {
    pub phone_number: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRecordingMessage {
    pub phone_number: String,
    #[serde(rename = "type")]
    pub recording_type: RecordingType,
}

/// Ask the device for its specifics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAction {
    pub request_device_specifics: RequestDeviceSpecifics,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestDeviceSpecifics {}

/// Change a chat setting
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_anonymization: Option<EmptySetting>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_displayed_notifications: Option<EmptySetting>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmptySetting {}

/// Ordered chip list attached to a message or rich card.
///
/// Insertion order is display order on the handset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Suggestions {
    suggestions: Vec<Suggestion>,
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Add a quick-reply chip
    pub fn add_reply(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
    ) -> &mut Self {
        self.push_reply(display_text, postback_data);
        self
    }

    /// Add an open-URL action
    pub fn add_url_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        url: impl Into<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::Url(UrlAction {
                open_url: OpenUrl { url: url.into() },
            }),
        );
        self
    }

    /// Add a dialer action of the given call type
    pub fn add_dialer_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        dial_type: DialType,
        phone_number: impl Into<String>,
        fallback_url: Option<String>,
        subject: Option<String>,
    ) -> &mut Self {
        let phone_number = phone_number.into();
        let dialer = match dial_type {
            DialType::DialPhoneNumber => DialerAction {
                dial_phone_number: Some(DialPhoneNumber {
                    phone_number,
                    fallback_url,
                }),
                dial_enriched_call: None,
                dial_video_call: None,
            },
            DialType::DialEnrichedCall => DialerAction {
                dial_phone_number: None,
                dial_enriched_call: Some(DialEnrichedCall {
                    phone_number,
                    fallback_url,
                    subject,
                }),
                dial_video_call: None,
            },
            DialType::DialVideoCall => DialerAction {
                dial_phone_number: None,
                dial_enriched_call: None,
                dial_video_call: Some(DialVideoCall {
                    phone_number,
                    fallback_url,
                }),
            },
        };
        self.push_action(display_text, postback_data, ActionKind::Dialer(dialer));
        self
    }

    /// Add a map action asking the user to push their location
    pub fn add_request_location_push_map_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::Map(MapAction {
                request_location_push: Some(RequestLocationPush {}),
                show_location: None,
            }),
        );
        self
    }

    /// Add a map action showing a fixed location
    #[allow(clippy::too_many_arguments)]
    pub fn add_show_location_map_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        latitude: f64,
        longitude: f64,
        label: Option<String>,
        query: Option<String>,
        fallback_url: Option<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::Map(MapAction {
                request_location_push: None,
                show_location: Some(ShowLocation {
                    location: Location {
                        latitude,
                        longitude,
                        label,
                        query,
                    },
                    fallback_url,
                }),
            }),
        );
        self
    }

    /// Add a create-calendar-event action
    #[allow(clippy::too_many_arguments)]
    pub fn add_calendar_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        fallback_url: Option<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::Calendar(CalendarAction {
                create_calendar_event: CreateCalendarEvent {
                    start_time: start_time.into(),
                    end_time: end_time.into(),
                    title: title.into(),
                    description: description.into(),
                    fallback_url,
                },
            }),
        );
        self
    }

    /// Add a compose-text-message action
    pub fn add_text_compose_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        phone_number: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::Compose(ComposeAction {
                compose_text_message: Some(ComposeTextMessage {
                    phone_number: phone_number.into(),
                    text: text.into(),
                }),
                compose_recording_message: None,
            }),
        );
        self
    }

    /// Add a compose-recording action
    pub fn add_recording_compose_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        phone_number: impl Into<String>,
        recording_type: RecordingType,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::Compose(ComposeAction {
                compose_text_message: None,
                compose_recording_message: Some(ComposeRecordingMessage {
                    phone_number: phone_number.into(),
                    recording_type,
                }),
            }),
        );
        self
    }

    /// Add a request-device-specifics action
    pub fn add_device_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::Device(DeviceAction {
                request_device_specifics: RequestDeviceSpecifics {},
            }),
        );
        self
    }

    /// Add a settings action of the given kind
    pub fn add_settings_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        settings_type: SettingsType,
    ) -> &mut Self {
        let settings = match settings_type {
            SettingsType::DisableAnonymization => SettingsAction {
                disable_anonymization: Some(EmptySetting {}),
                enable_displayed_notifications: None,
            },
            SettingsType::EnableDisplayedNotifications => SettingsAction {
                disable_anonymization: None,
                enable_displayed_notifications: Some(EmptySetting {}),
            },
        };
        self.push_action(display_text, postback_data, ActionKind::Settings(settings));
        self
    }

    fn push_reply(&mut self, display_text: impl Into<String>, postback_data: impl Into<String>) {
        self.suggestions.push(Suggestion {
            reply: Some(SuggestedReply {
                display_text: display_text.into(),
                postback: Postback {
                    data: postback_data.into(),
                },
            }),
            action: None,
        });
    }

    fn push_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        kind: ActionKind,
    ) {
        let mut action = SuggestedAction {
            url_action: None,
            dialer_action: None,
            map_action: None,
            calendar_action: None,
            compose_action: None,
            device_action: None,
            settings_action: None,
            display_text: display_text.into(),
            postback: Postback {
                data: postback_data.into(),
            },
        };
        match kind {
            ActionKind::Url(a) => action.url_action = Some(a),
            ActionKind::Dialer(a) => action.dialer_action = Some(a),
            ActionKind::Map(a) => action.map_action = Some(a),
            ActionKind::Calendar(a) => action.calendar_action = Some(a),
            ActionKind::Compose(a) => action.compose_action = Some(a),
            ActionKind::Device(a) => action.device_action = Some(a),
            ActionKind::Settings(a) => action.settings_action = Some(a),
        }
        self.suggestions.push(Suggestion {
            reply: None,
            action: Some(action),
        });
    }
}

enum ActionKind {
    Url(UrlAction),
    Dialer(DialerAction),
    Map(MapAction),
    Calendar(CalendarAction),
    Compose(ComposeAction),
    Device(DeviceAction),
    Settings(SettingsAction),
}
