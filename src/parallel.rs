// THEORY:
// The `parallel` module is an optional executor for callers that push many
// transforms through the engine at once. Correctness never depends on it:
// every transform is pure, reads its inputs through shared references and
// exclusively owns its freshly allocated output, so running transforms side
// by side needs no locking discipline at all.
//
// The shape is a fixed worker pool behind a round-robin dispatcher. Each
// worker owns nothing but its task channel; a task carries an `Operation`,
// the owned input buffers, and a oneshot channel for the reply. A transform
// either completes and sends back a whole buffer or fails before producing
// one, so a caller never observes partial output.

use crate::core_modules::pixel_buffer::PixelBuffer;
use crate::error::PictureError;
use crate::operation::Operation;
use tokio::sync::{mpsc, oneshot};

struct TransformTask {
    operation: Operation,
    inputs: Vec<PixelBuffer>,
    reply: oneshot::Sender<Result<PixelBuffer, PictureError>>,
}

/// A fixed pool of transform workers, one per logical CPU by default.
pub struct TransformPool {
    task_sender: mpsc::UnboundedSender<TransformTask>,
    workers: Vec<tokio::task::JoinHandle<()>>,
}

impl TransformPool {
    /// Spawns one worker per logical CPU.
    pub fn new() -> Self {
        Self::with_workers(num_cpus::get().max(1))
    }

    /// Spawns a pool with an explicit worker count.
    pub fn with_workers(worker_count: usize) -> Self {
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<TransformTask>();
        let mut workers = Vec::with_capacity(worker_count);

        // One channel per worker; a single dispatcher hands tasks out
        // round-robin so no worker queue starves.
        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<TransformTask>())
            .unzip();

        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = worker_senders[worker_idx].send(task);
                worker_idx = (worker_idx + 1) % worker_senders.len();
            }
        });

        for mut worker_receiver in worker_receivers {
            workers.push(tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    let result = task.operation.apply(&task.inputs);
                    let _ = task.reply.send(result);
                }
            }));
        }

        Self { task_sender, workers }
    }

    /// Queues one transform and awaits its result. Input buffers move into the
    /// pool; the caller gets back either a complete output buffer or the
    /// transform's own error.
    pub async fn apply(
        &self,
        operation: Operation,
        inputs: Vec<PixelBuffer>,
    ) -> Result<PixelBuffer, PictureError> {
        let (reply, receiver) = oneshot::channel();
        let task = TransformTask {
            operation,
            inputs,
            reply,
        };
        self.task_sender
            .send(task)
            .map_err(|_| PictureError::PoolUnavailable)?;
        receiver.await.map_err(|_| PictureError::PoolUnavailable)?
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

impl Default for TransformPool {
    fn default() -> Self {
        Self::new()
    }
}
