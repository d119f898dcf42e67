/// Events the simulated network sends back up to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    AuthCompleted { request_id: u64, username: String },
    ReplyArrived { ticket: u64, conversation_id: String },
}
