use super::message::AppMessage;
use crate::kernel::assistant::PendingReply;
use crate::kernel::Effect;
use std::io;
use std::sync::mpsc::Sender;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::oneshot;

pub struct AsyncRuntime {
    handle: Handle,
    // Only the multi-thread flavor is held here; the current-thread one lives on its driver thread.
    _runtime: Option<Runtime>,
    shutdown: Option<oneshot::Sender<()>>,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        match Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => Ok(Self {
                handle: runtime.handle().clone(),
                _runtime: Some(runtime),
                shutdown: None,
                tx,
            }),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                Self::current_thread(tx)
            }
        }
    }

    /// Current-thread runtime driven by a dedicated `zide-runtime` thread until drop.
    pub fn current_thread(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let handle = runtime.handle().clone();
        let (shutdown, shutdown_rx) = oneshot::channel::<()>();
        std::thread::Builder::new()
            .name("zide-runtime".to_string())
            .spawn(move || {
                runtime.block_on(async {
                    let _ = shutdown_rx.await;
                });
            })?;
        Ok(Self {
            handle,
            _runtime: None,
            shutdown: Some(shutdown),
            tx,
        })
    }

    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::ScheduleAssistantReply(reply) => self.schedule_assistant_reply(reply),
        }
    }

    /// Sleeps for the reply's delay, then hands it back to the UI loop. There is no
    /// cancellation: the reply is sent even if the panel was hidden meanwhile.
    pub fn schedule_assistant_reply(&self, reply: PendingReply) {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(reply.delay).await;
            if tx
                .send(AppMessage::AssistantReply {
                    request_id: reply.request_id,
                    outcome: reply.outcome,
                })
                .is_err()
            {
                tracing::debug!(request_id = reply.request_id, "ui gone, assistant reply dropped");
            }
        });
    }
}

impl Drop for AsyncRuntime {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
