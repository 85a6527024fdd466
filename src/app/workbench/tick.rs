use super::Workbench;
use crate::kernel::services::adapters::AppMessage;
use std::sync::mpsc::{self, Receiver};

impl Workbench {
    /// Periodic housekeeping driven by the main loop. Returns whether a redraw is due.
    pub fn tick(&mut self) -> bool {
        self.poll_logs()
    }

    /// Drains pending runtime messages without blocking.
    pub fn drain_messages(&mut self, rx: &Receiver<AppMessage>) -> bool {
        let mut changed = false;
        for _ in 0..super::MAX_MESSAGE_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(msg) => changed |= self.handle_message(msg),
                Err(_) => break,
            }
        }
        changed
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.take() else {
            return false;
        };

        let mut changed = false;
        let mut drained = 0usize;
        let mut disconnected = false;

        loop {
            match rx.try_recv() {
                Ok(line) => {
                    changed = true;
                    drained += 1;
                    self.logs.push_back(line);
                    while self.logs.len() > super::LOG_BUFFER_CAP {
                        self.logs.pop_front();
                    }
                    if drained >= super::MAX_LOG_DRAIN_PER_TICK {
                        break;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if !disconnected {
            self.log_rx = Some(rx);
        }

        changed
    }
}
