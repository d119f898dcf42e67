/// Commands the controller sends down to the simulated network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkCommand {
    /// Pretend to verify credentials; answered with `NetworkEvent::AuthCompleted`.
    Authenticate { request_id: u64, username: String },
    /// Pretend the counterpart answers; answered with `NetworkEvent::ReplyArrived`.
    ScheduleReply { ticket: u64, conversation_id: String },
    /// Drop every pending reply for one conversation.
    CancelReplies { conversation_id: String },
    /// Drop every pending job (logout).
    CancelAll,
}
