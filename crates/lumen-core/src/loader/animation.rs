//! Frame scheduling for a [`Loader`].
//!
//! Each loader is driven by its own tokio task. The task owns the loader, so
//! all mutation happens one frame at a time on that task; rendered frames are
//! published on a watch channel where only the latest one is kept.

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::Loader;
use crate::error::{LumenError, LumenResult};
use crate::surface::{DisplayList, Frame};

/// Owned handle to a running loader animation.
///
/// Dropping the handle stops the animation.
pub struct AnimationHandle {
    cancel: CancellationToken,
    frames: watch::Receiver<Frame>,
    task: Option<JoinHandle<()>>,
}

impl AnimationHandle {
    /// Start animating `loader` on the current tokio runtime.
    pub fn spawn<R>(mut loader: Loader<R>) -> Self
    where
        R: Rng + Send + 'static,
    {
        let size = loader.config().size;
        let interval = loader.config().frame_interval();
        let (tx, frames) = watch::channel(Frame {
            sequence: 0,
            size,
            commands: Vec::new(),
        });
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tracing::debug!(size, interval_ms = interval.as_millis() as u64, "starting loader animation");

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut sequence = 0u64;

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        sequence += 1;
                        let mut surface = DisplayList::new(size);
                        loader.frame(&mut surface);
                        if tx.send(surface.into_frame(sequence)).is_err() {
                            break;
                        }
                    }
                }
            }

            tracing::debug!(frames = sequence, "loader animation stopped");
        });

        Self {
            cancel,
            frames,
            task: Some(task),
        }
    }

    /// Receiver for the most recently rendered frame.
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }

    /// Request the animation to stop. No further frames are rendered once
    /// the task observes the request.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled() && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the animation and wait for its task to finish.
    pub async fn stop(mut self) -> LumenResult<()> {
        self.cancel.cancel();
        match self.task.take() {
            Some(task) => task
                .await
                .map_err(|e| LumenError::Animation(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("cancelled", &self.cancel.is_cancelled())
            .field("sequence", &self.frames.borrow().sequence)
            .finish()
    }
}
