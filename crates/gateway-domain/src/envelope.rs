use crate::comms_request::{CommsRequest, CommsType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed identifier of this service in outbound envelopes.
pub const EVENT_SOURCE: &str = "fcp-sfd-messaging-gateway";

/// Event type marking an envelope as a notification request.
pub const EVENT_TYPE: &str = "uk.gov.fcp.sfd.notification.request";

pub const SPEC_VERSION: &str = "1.0";
pub const DATA_CONTENT_TYPE: &str = "application/json";

/// CloudEvents-style envelope published to the topic, one per recipient.
/// Built fresh per (request, recipient) pair and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommsEvent {
    pub id: String,
    pub source: String,
    pub specversion: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub datacontenttype: String,
    pub time: DateTime<Utc>,
    pub data: CommsEventData,
}

/// The request fields carried in the envelope, with `recipient` narrowed to
/// the single target address. Absent optional fields stay absent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommsEventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<u64>,
    pub sbi: u64,
    pub source_system: String,
    pub notify_template_id: String,
    pub comms_type: CommsType,
    pub recipient: String,
    pub personalisation: serde_json::Map<String, serde_json::Value>,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_click_unsubscribe_url: Option<String>,
    pub email_reply_to_id: String,
}

impl CommsEvent {
    /// Build the envelope for one recipient of a validated request.
    ///
    /// Generates a fresh id and timestamp on every call and copies the
    /// request fields without mutating the input. No business defaulting.
    pub fn for_recipient(request: &CommsRequest, recipient: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source: EVENT_SOURCE.to_string(),
            specversion: SPEC_VERSION.to_string(),
            event_type: EVENT_TYPE.to_string(),
            datacontenttype: DATA_CONTENT_TYPE.to_string(),
            time: Utc::now(),
            data: CommsEventData {
                correlation_id: request.correlation_id.clone(),
                crn: request.crn,
                sbi: request.sbi,
                source_system: request.source_system.clone(),
                notify_template_id: request.notify_template_id.clone(),
                comms_type: request.comms_type,
                recipient: recipient.to_string(),
                personalisation: request.personalisation.clone(),
                reference: request.reference.clone(),
                one_click_unsubscribe_url: request.one_click_unsubscribe_url.clone(),
                email_reply_to_id: request.email_reply_to_id.clone(),
            },
        }
    }
}
