//! Debounced, change-suppressing screen state publisher.
//!
//! # State Machine
//!
//! ```text
//!              resize                    quiet window elapsed
//!    Idle ---------------> Settling ---------------------------> Idle
//!      ^                    |    ^                                 |
//!      |                    +----+ resize (window restarts)        |
//!      |                                                           v
//!      +-------------- publish if state != last published ---------+
//! ```
//!
//! Each raw notification restarts the quiet window. When the window elapses
//! the screen state is recomputed once and published only if it differs from
//! the last published value. Cancellation drops any pending window.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use super::classifier::DeviceClassifier;
use super::stats::PipelineStats;
use crate::environment::{DisplayEnvironment, ResizeSubscription};
use crate::screen::ScreenState;

/// Internal phase of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting for a resize notification.
    Idle,
    /// A notification arrived; waiting for the quiet window to elapse.
    Settling,
}

/// The pipeline task and everything it owns.
pub(crate) struct Pipeline<E: DisplayEnvironment> {
    pub(crate) classifier: DeviceClassifier<E>,
    pub(crate) subscription: ResizeSubscription,
    pub(crate) quiet_window: Duration,
    pub(crate) publisher: watch::Sender<Option<ScreenState>>,
    pub(crate) stats: Arc<PipelineStats>,
    pub(crate) shutdown: CancellationToken,
}

impl<E: DisplayEnvironment> Pipeline<E> {
    /// Run until cancelled or until the resize source goes away.
    pub(crate) async fn run(mut self) {
        let quiet = sleep(self.quiet_window);
        tokio::pin!(quiet);
        let mut phase = Phase::Idle;

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => {
                    debug!(?phase, "Screen state pipeline cancelled");
                    break;
                }

                event = self.subscription.recv() => {
                    let Some(event) = event else {
                        debug!(?phase, "Resize source closed, stopping pipeline");
                        break;
                    };
                    self.stats.record_notification();
                    trace!(sequence = event.sequence, ?phase, "Resize notification, restarting quiet window");
                    quiet.as_mut().reset(Instant::now() + self.quiet_window);
                    phase = Phase::Settling;
                }

                _ = &mut quiet, if phase == Phase::Settling => {
                    phase = Phase::Idle;
                    self.recompute_and_publish();
                }
            }
        }
    }

    fn recompute_and_publish(&self) {
        let state = self.classifier.current_screen_state();
        self.stats.record_recomputation();

        // A cancelled pipeline must not publish, even if the window elapsed
        // in the same tick.
        if self.shutdown.is_cancelled() {
            return;
        }

        let published = self.publisher.send_if_modified(|latest| {
            if *latest == Some(state) {
                false
            } else {
                *latest = Some(state);
                true
            }
        });

        if published {
            self.stats.record_publication();
            info!(
                width = state.width,
                height = state.height,
                portrait = state.is_portrait,
                landscape = state.is_landscape,
                "Published screen state"
            );
        } else {
            self.stats.record_suppressed();
            debug!("Screen state unchanged, publication suppressed");
        }
    }
}
