//! Messages sent from the async runtime back to the UI loop.

use crate::kernel::assistant::{AssistantError, RequestId};

#[derive(Debug)]
pub enum AppMessage {
    AssistantReply {
        request_id: RequestId,
        outcome: Result<String, AssistantError>,
    },
}
