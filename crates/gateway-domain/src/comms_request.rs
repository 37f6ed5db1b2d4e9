use garde::Validate;
use serde::{Deserialize, Serialize};

pub const MIN_SBI: u64 = 105_000_000;
pub const MAX_SBI: u64 = 999_999_999;
pub const MIN_CRN: u64 = 1_050_000_000;
pub const MAX_CRN: u64 = 9_999_999_999;

/// A request must target at least one and at most this many recipients.
pub const MAX_RECIPIENTS: usize = 10;

/// Inbound comms request body (camelCase on the wire).
///
/// Deserialization rejects unknown fields and missing required fields;
/// everything beyond shape is checked by the garde rules below.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommsRequest {
    #[serde(default)]
    #[garde(inner(custom(uuid_format)))]
    pub correlation_id: Option<String>,

    #[serde(default)]
    #[garde(inner(range(min = MIN_CRN, max = MAX_CRN)))]
    pub crn: Option<u64>,

    #[garde(range(min = MIN_SBI, max = MAX_SBI))]
    pub sbi: u64,

    #[garde(custom(source_system_token))]
    pub source_system: String,

    #[garde(custom(uuid_format))]
    pub notify_template_id: String,

    #[garde(skip)]
    pub comms_type: CommsType,

    #[garde(custom(recipient_rules))]
    pub recipient: Recipient,

    #[garde(skip)]
    pub personalisation: serde_json::Map<String, serde_json::Value>,

    #[garde(length(min = 1))]
    pub reference: String,

    #[serde(default)]
    #[garde(inner(url))]
    pub one_click_unsubscribe_url: Option<String>,

    #[garde(custom(uuid_format))]
    pub email_reply_to_id: String,
}

/// Supported communication channels. Email is the only one today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommsType {
    Email,
}

/// One email address or an ordered list of them.
///
/// This is the recipient normaliser: `into_list` turns either shape into an
/// ordered list, returning the inner vector unchanged for the list shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Recipient {
    One(String),
    Many(Vec<String>),
}

impl Recipient {
    /// Normalise into an ordered list, consuming self. The list shape moves
    /// through unchanged; the scalar shape becomes a one-element list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Recipient::One(address) => vec![address],
            Recipient::Many(addresses) => addresses,
        }
    }

    /// Borrowing equivalent of [`Recipient::into_list`].
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            Recipient::One(address) => vec![address.as_str()],
            Recipient::Many(addresses) => addresses.iter().map(String::as_str).collect(),
        }
    }
}

fn uuid_format(value: &str, _context: &()) -> garde::Result {
    uuid::Uuid::try_parse(value)
        .map(|_| ())
        .map_err(|_| garde::Error::new("must be a valid uuid"))
}

fn source_system_token(value: &str, _context: &()) -> garde::Result {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(garde::Error::new(
            "must contain only lowercase letters, digits, hyphens and underscores",
        ))
    }
}

fn recipient_rules(value: &Recipient, _context: &()) -> garde::Result {
    let addresses = value.as_list();
    if addresses.len() > MAX_RECIPIENTS {
        return Err(garde::Error::new(
            "\"recipient\" must contain at most 10 items",
        ));
    }
    if addresses.is_empty() {
        return Err(garde::Error::new(
            "\"recipient\" must contain at least 1 items",
        ));
    }
    if addresses
        .iter()
        .any(|address| garde::rules::email::apply(address, ()).is_err())
    {
        return Err(garde::Error::new("\"recipient\" must be a valid email"));
    }
    Ok(())
}
