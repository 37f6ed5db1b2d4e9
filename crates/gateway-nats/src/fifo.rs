use async_nats::HeaderMap;
use gateway_domain::CommsEvent;

/// Subjects with this suffix require per-message dedup and grouping metadata.
pub const FIFO_SUFFIX: &str = ".fifo";

/// JetStream performs server-side deduplication on this header.
pub const DEDUP_HEADER: &str = "Nats-Msg-Id";

/// Downstream consumers key ordering groups on this header.
pub const GROUP_HEADER: &str = "Comms-Msg-Group";

pub fn is_fifo_subject(subject: &str) -> bool {
    subject.ends_with(FIFO_SUFFIX)
}

/// Headers for one envelope on the given subject.
///
/// FIFO subjects get a deduplication id (always the envelope id) and a group
/// id (the payload's correlation id when present, else the envelope id).
/// Non-FIFO subjects carry no metadata.
pub fn event_headers(subject: &str, event: &CommsEvent) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if is_fifo_subject(subject) {
        let group_id = event
            .data
            .correlation_id
            .as_deref()
            .unwrap_or(event.id.as_str());
        headers.insert(DEDUP_HEADER, event.id.as_str());
        headers.insert(GROUP_HEADER, group_id);
    }

    headers
}
