//! Live-stream wire types
//!
//! Frames exchanged on the access-event stream between the backend
//! broker and the admin client. The framing is a fixed header followed
//! by a JSON payload:
//!
//! `kind (1 byte) | frame_id (16-byte UUID) | len (u32 LE) | payload`

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::AccessKind;

/// Frame kind on the live stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// Client -> broker topic subscription
    Subscribe = 0,
    /// Broker -> client access event
    Event = 1,
    /// Keepalive, ignored by the client
    Ping = 2,
}

impl TryFrom<u8> for FrameKind {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FrameKind::Subscribe),
            1 => Ok(FrameKind::Event),
            2 => Ok(FrameKind::Ping),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Subscribe => write!(f, "subscribe"),
            FrameKind::Event => write!(f, "event"),
            FrameKind::Ping => write!(f, "ping"),
        }
    }
}

/// A single frame on the live stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub frame_id: Uuid,
    pub kind: FrameKind,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(kind: FrameKind, payload: Vec<u8>) -> Self {
        Self {
            frame_id: Uuid::new_v4(),
            kind,
            payload,
        }
    }

    /// Create a topic subscription frame
    pub fn subscribe(topic: &str) -> Self {
        let payload = SubscribePayload {
            topic: topic.to_string(),
        };
        Self::new(
            FrameKind::Subscribe,
            serde_json::to_vec(&payload).expect("Failed to serialize subscribe payload"),
        )
    }

    /// Create an access event frame
    pub fn event(event: &AccessEventMessage) -> Self {
        Self::new(
            FrameKind::Event,
            serde_json::to_vec(event).expect("Failed to serialize access event"),
        )
    }

    /// Create a keepalive frame
    pub fn ping() -> Self {
        Self::new(FrameKind::Ping, Vec::new())
    }

    /// Parse the payload as the given type
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }

    /// Serialize to the binary wire format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(21 + self.payload.len());
        data.push(self.kind as u8);
        data.extend_from_slice(self.frame_id.as_bytes());
        data.extend_from_slice(&(self.payload.len() as u32).to_le_bytes());
        data.extend_from_slice(&self.payload);
        data
    }
}

/// Subscribe frame payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribePayload {
    pub topic: String,
}

/// Access event as pushed on the live topic
///
/// The broker embeds the member as a display name only; unknown fields
/// are ignored so broker-side payload additions do not break decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessEventMessage {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: AccessKind,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub access_time: Option<DateTime<Utc>>,
}

impl AccessEventMessage {
    /// Display name for notifications, with a fallback when the broker
    /// omitted it.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Member")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_round_trips_through_wire_bytes() {
        let frame = Frame::subscribe("/topic/access-logs");
        let bytes = frame.to_bytes();

        assert_eq!(bytes[0], FrameKind::Subscribe as u8);
        assert_eq!(&bytes[1..17], frame.frame_id.as_bytes());

        let len = u32::from_le_bytes(bytes[17..21].try_into().unwrap()) as usize;
        assert_eq!(len, frame.payload.len());

        let payload: SubscribePayload =
            serde_json::from_slice(&bytes[21..21 + len]).unwrap();
        assert_eq!(payload.topic, "/topic/access-logs");
    }

    #[test]
    fn unknown_kind_byte_is_rejected() {
        assert!(FrameKind::try_from(7).is_err());
        assert_eq!(FrameKind::try_from(1), Ok(FrameKind::Event));
    }

    #[test]
    fn event_message_decodes_broker_shape() {
        let body = r#"{"userName":"Ana","type":"ENTRY","source":"turnstile-1","extra":42}"#;
        let msg: AccessEventMessage = serde_json::from_str(body).unwrap();

        assert_eq!(msg.display_name(), "Ana");
        assert_eq!(msg.kind, AccessKind::Entry);
        assert_eq!(msg.source.as_deref(), Some("turnstile-1"));
    }

    #[test]
    fn event_message_without_name_falls_back() {
        let msg: AccessEventMessage = serde_json::from_str(r#"{"type":"EXIT"}"#).unwrap();
        assert_eq!(msg.display_name(), "Member");
        assert_eq!(msg.kind, AccessKind::Exit);
    }

    #[test]
    fn malformed_event_payload_fails_decode() {
        let frame = Frame::new(FrameKind::Event, b"not json".to_vec());
        assert!(frame.parse_payload::<AccessEventMessage>().is_err());
    }
}
