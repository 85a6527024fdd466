use crate::kernel::assistant::PendingReply;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver the reply back as `Action::AssistantReplyArrived` once its delay elapses.
    ScheduleAssistantReply(PendingReply),
}
