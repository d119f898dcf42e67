use std::collections::HashMap;
use std::time::Duration;

use futures::future::{AbortHandle, abortable};
use tokio::sync::mpsc;

use crate::common::{NetworkCommand, NetworkEvent};

/// Artificial round-trip times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub auth: Duration,
    pub reply: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            reply: Duration::from_millis(3000),
        }
    }
}

struct PendingJob {
    conversation_id: Option<String>,
    handle: AbortHandle,
}

/// Stand-in for a chat backend: answers commands with events after a delay.
/// Every delayed job can be aborted, and all of them are when the command
/// channel closes.
pub struct SimulatedClient {
    event_sender: mpsc::Sender<NetworkEvent>,
    command_receiver: mpsc::Receiver<NetworkCommand>,
    latency: Latency,
    jobs: HashMap<u64, PendingJob>,
    next_job: u64,
    finished_sender: mpsc::UnboundedSender<u64>,
    finished_receiver: mpsc::UnboundedReceiver<u64>,
}

impl SimulatedClient {
    pub fn new(
        event_sender: mpsc::Sender<NetworkEvent>,
        command_receiver: mpsc::Receiver<NetworkCommand>,
        latency: Latency,
    ) -> Self {
        let (finished_sender, finished_receiver) = mpsc::unbounded_channel();
        Self {
            event_sender,
            command_receiver,
            latency,
            jobs: HashMap::new(),
            next_job: 0,
            finished_sender,
            finished_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!(
            "Simulated network started (auth {:?}, reply {:?})",
            self.latency.auth,
            self.latency.reply
        );

        loop {
            tokio::select! {
                command = self.command_receiver.recv() => {
                    if let Some(command) = command {
                        self.handle_command(command);
                    } else {
                        break;
                    }
                }
                Some(job) = self.finished_receiver.recv() => {
                    self.jobs.remove(&job);
                }
            }
        }

        self.cancel_where(|_| true);
        log::info!("Simulated network stopped");
    }

    fn handle_command(&mut self, command: NetworkCommand) {
        match command {
            NetworkCommand::Authenticate {
                request_id,
                username,
            } => {
                log::debug!("Authenticating {username} (request {request_id})");
                self.spawn_delayed(
                    self.latency.auth,
                    None,
                    NetworkEvent::AuthCompleted {
                        request_id,
                        username,
                    },
                );
            }
            NetworkCommand::ScheduleReply {
                ticket,
                conversation_id,
            } => {
                log::debug!("Reply {ticket} scheduled for {conversation_id}");
                self.spawn_delayed(
                    self.latency.reply,
                    Some(conversation_id.clone()),
                    NetworkEvent::ReplyArrived {
                        ticket,
                        conversation_id,
                    },
                );
            }
            NetworkCommand::CancelReplies { conversation_id } => {
                let cancelled = self.cancel_where(|job| {
                    job.conversation_id.as_deref() == Some(conversation_id.as_str())
                });
                log::info!("Cancelled {cancelled} pending replies for {conversation_id}");
            }
            NetworkCommand::CancelAll => {
                let cancelled = self.cancel_where(|_| true);
                log::info!("Cancelled {cancelled} pending jobs");
            }
        }
    }

    fn spawn_delayed(&mut self, delay: Duration, conversation_id: Option<String>, event: NetworkEvent) {
        let job = self.next_job;
        self.next_job += 1;

        let event_sender = self.event_sender.clone();
        let (task, handle) = abortable(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = event_sender.send(event).await {
                log::warn!("Failed to deliver simulated event: {err}");
            }
        });

        let finished = self.finished_sender.clone();
        tokio::spawn(async move {
            if task.await.is_err() {
                log::debug!("Job {job} aborted");
            }
            let _ = finished.send(job);
        });

        self.jobs.insert(
            job,
            PendingJob {
                conversation_id,
                handle,
            },
        );
    }

    fn cancel_where(&mut self, matches: impl Fn(&PendingJob) -> bool) -> usize {
        let mut cancelled = 0;
        self.jobs.retain(|_, job| {
            if matches(job) {
                job.handle.abort();
                cancelled += 1;
                false
            } else {
                true
            }
        });
        cancelled
    }
}
