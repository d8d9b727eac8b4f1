// Transition State
// An in-flight pane switch and the handle used to await its completion

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use ratatui::layout::Size;
use tokio::sync::oneshot;

use super::geometry;

/// How a `display_view` request finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The requested pane was already displayed; nothing happened
    Unchanged,
    /// Switched synchronously without animation
    Switched,
    /// The animation ran to its natural end
    Completed,
    /// The animation was finalized early (superseded, or the window closed)
    Snapped,
    /// The controller went away before the transition finished
    Dropped,
}

/// Completion signal for a `display_view` call.
///
/// Resolves immediately for synchronous switches. For animated switches it
/// resolves once the controller's `tick()` finishes (or snaps) the animation.
#[derive(Debug)]
pub struct TransitionHandle {
    receiver: oneshot::Receiver<TransitionOutcome>,
}

impl TransitionHandle {
    /// A handle that is already resolved
    pub(crate) fn ready(outcome: TransitionOutcome) -> Self {
        let (sender, receiver) = oneshot::channel();
        let _ = sender.send(outcome);
        Self { receiver }
    }

    pub(crate) fn pending() -> (oneshot::Sender<TransitionOutcome>, Self) {
        let (sender, receiver) = oneshot::channel();
        (sender, Self { receiver })
    }

    /// Non-blocking check; `None` while the transition is still running
    pub fn try_outcome(&mut self) -> Option<TransitionOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(TransitionOutcome::Dropped),
        }
    }
}

impl Future for TransitionHandle {
    type Output = TransitionOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.unwrap_or(TransitionOutcome::Dropped))
    }
}

/// Animation state of a running transition
#[derive(Debug)]
pub(crate) struct Transition {
    /// Pane being replaced (None is never animated, kept for logging)
    pub from: Option<String>,
    /// Pane being revealed
    pub to: String,
    /// Whether the views cross-fade or swap immediately
    pub fade: bool,
    pub started_at: Instant,
    pub duration: Duration,
    pub start_size: Size,
    pub target_size: Size,
    completion: Option<oneshot::Sender<TransitionOutcome>>,
}

/// Interpolated values for one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FrameState {
    pub content: Size,
    pub old_opacity: f32,
    pub new_opacity: f32,
    pub finished: bool,
}

impl Transition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        from: Option<String>,
        to: String,
        fade: bool,
        started_at: Instant,
        duration: Duration,
        start_size: Size,
        target_size: Size,
        completion: oneshot::Sender<TransitionOutcome>,
    ) -> Self {
        Self {
            from,
            to,
            fade,
            started_at,
            duration,
            start_size,
            target_size,
            completion: Some(completion),
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Geometry and opacities at `now`
    pub fn frame_at(&self, now: Instant) -> FrameState {
        let progress = self.progress(now);
        let eased = geometry::ease_in_out(progress);
        let (old_opacity, new_opacity) = if self.fade { (1.0 - eased, eased) } else { (0.0, 1.0) };

        FrameState {
            content: geometry::lerp_size(self.start_size, self.target_size, eased),
            old_opacity,
            new_opacity,
            finished: progress >= 1.0,
        }
    }

    /// Resolve the caller's handle
    pub fn finish(&mut self, outcome: TransitionOutcome) {
        if let Some(sender) = self.completion.take() {
            let _ = sender.send(outcome);
        }
    }
}
