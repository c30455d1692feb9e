use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

/// Producer side of the typing-speed throttle.
///
/// Characters pass through a bounded channel consumed by exactly one drain
/// task, which sleeps the configured delay before releasing each one. The
/// single-task structure is what guarantees two drains can never interleave
/// output.
pub struct TypingQueue {
    tx: mpsc::Sender<char>,
}

impl TypingQueue {
    /// Spawns the drain task and returns the queue plus the paced output.
    /// Dropping the queue closes the input; the drain finishes what is
    /// buffered, then closes the output.
    pub fn spawn(delay: Duration, capacity: usize) -> (Self, mpsc::Receiver<char>) {
        let (in_tx, mut in_rx) = mpsc::channel::<char>(capacity);
        let (out_tx, out_rx) = mpsc::channel::<char>(capacity);

        tokio::spawn(async move {
            while let Some(c) = in_rx.recv().await {
                sleep(delay).await;
                if out_tx.send(c).await.is_err() {
                    // Consumer went away; nothing left to pace.
                    break;
                }
            }
        });

        (Self { tx: in_tx }, out_rx)
    }

    /// Queues every character of `text`; `Err` means the drain task is gone.
    pub async fn push_str(&self, text: &str) -> Result<(), ()> {
        for c in text.chars() {
            self.tx.send(c).await.map_err(|_| ())?;
        }
        Ok(())
    }
}
