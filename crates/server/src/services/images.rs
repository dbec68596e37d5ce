//! Asynchronous image-processing dispatch.
//!
//! This is a placeholder for a real message-queue publish: jobs go into an
//! in-process channel and a background worker logs each one. The contract
//! that matters is fire-and-forget - enqueueing never blocks the request
//! path and never fails product creation, and the caller keeps enqueueing
//! remaining images even if one dispatch fails.

use catalog_core::ProductId;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A single image-processing job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    /// Image reference (URL) as submitted by the client.
    pub image_url: String,
    /// Product the image belongs to.
    pub product_id: ProductId,
}

/// Handle for dispatching image jobs to the background worker.
///
/// Cheap to clone; clones feed the same worker.
#[derive(Clone)]
pub struct ImageQueue {
    tx: UnboundedSender<ImageJob>,
}

impl ImageQueue {
    /// Create a queue and spawn its logging worker on the current runtime.
    #[must_use]
    pub fn start() -> Self {
        let (queue, mut rx) = Self::pair();
        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                tracing::info!(
                    image = %job.image_url,
                    product_id = %job.product_id,
                    "dispatching image for processing"
                );
            }
            tracing::debug!("image queue closed, worker exiting");
        });
        queue
    }

    /// Create a queue together with its receiving end, without a worker.
    ///
    /// Used by [`start`](Self::start) and by tests that want to observe
    /// dispatched jobs directly.
    #[must_use]
    pub fn pair() -> (Self, UnboundedReceiver<ImageJob>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Enqueue an image for processing. Best effort: a failed send (worker
    /// gone) is logged and swallowed so it can never fail the caller.
    pub fn enqueue(&self, image_url: String, product_id: ProductId) {
        let job = ImageJob {
            image_url,
            product_id,
        };
        if let Err(err) = self.tx.send(job) {
            tracing::warn!(
                image = %err.0.image_url,
                product_id = %err.0.product_id,
                "image queue unavailable, dropping job"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_one_job_per_image() {
        let (queue, mut rx) = ImageQueue::pair();
        let product_id = ProductId::new(42);

        let images = ["http://x/a.png", "http://x/b.png", "http://x/c.png"];
        for image in images {
            queue.enqueue(image.to_string(), product_id);
        }
        drop(queue);

        let mut jobs = Vec::new();
        while let Some(job) = rx.recv().await {
            jobs.push(job);
        }

        assert_eq!(jobs.len(), images.len());
        for (job, image) in jobs.iter().zip(images) {
            assert_eq!(job.image_url, image);
            assert_eq!(job.product_id, product_id);
        }
    }

    #[tokio::test]
    async fn test_enqueue_survives_dead_worker() {
        let (queue, rx) = ImageQueue::pair();
        drop(rx);

        // Must not panic or error even though nothing is listening.
        queue.enqueue("http://x/a.png".to_string(), ProductId::new(1));
        queue.enqueue("http://x/b.png".to_string(), ProductId::new(1));
    }
}
