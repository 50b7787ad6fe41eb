//! Screen detector.
//!
//! The [`ScreenDetector`] classifies the device behind a
//! [`DisplayEnvironment`] and republishes its screen state when the viewport
//! changes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         ScreenDetector                            │
//! │                                                                   │
//! │  DeviceClassifier ──► is_mobile / is_iphone / os_version          │
//! │   (sync queries)      matching_models / is_chrome_expanded        │
//! │                                                                   │
//! │  Pipeline task:                                                   │
//! │   resize ──► quiet window ──► recompute ──► distinct ──► watch    │
//! │                                                           │       │
//! └───────────────────────────────────────────────────────────┼───────┘
//!                                                             ▼
//!                                                  ScreenStateStream(s)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use iphone_detector::detector::ScreenDetector;
//! use iphone_detector::environment::{EnvironmentProfile, SimulatedEnvironment};
//!
//! let env = Arc::new(SimulatedEnvironment::new(EnvironmentProfile::default()));
//! let detector = ScreenDetector::start(Arc::clone(&env), Default::default());
//!
//! let mut states = detector.subscribe();
//! env.notify_resize();
//! let state = states.next().await;
//! ```

mod classifier;
mod matching;
mod pipeline;
mod report;
mod stats;
mod stream;

pub use classifier::DeviceClassifier;
pub use matching::{filter_signatures, MatchCriteria};
pub use report::DetectionReport;
pub use stats::{PipelineStats, StatsSnapshot};
pub use stream::ScreenStateStream;

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::DetectorConfig;
use crate::device::DeviceModel;
use crate::environment::{DisplayEnvironment, Unsubscribe};
use crate::error::Result;
use crate::screen::ScreenState;
use pipeline::Pipeline;

/// Classifies the current device and publishes screen state reactively.
///
/// Owns exactly one resize subscription on its environment for its whole
/// lifetime. [`shutdown`](Self::shutdown), or dropping the detector, releases
/// that subscription synchronously and cancels any pending quiet window.
pub struct ScreenDetector<E: DisplayEnvironment> {
    classifier: DeviceClassifier<E>,
    config: DetectorConfig,
    states: watch::Receiver<Option<ScreenState>>,
    stats: Arc<PipelineStats>,
    shutdown: CancellationToken,
    unsubscribe: Unsubscribe,
    task: Option<JoinHandle<()>>,
}

impl<E: DisplayEnvironment> ScreenDetector<E> {
    /// Subscribe to `env` and start the publishing pipeline.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(env: Arc<E>, config: DetectorConfig) -> Self {
        let classifier = DeviceClassifier::new(env);
        let subscription = classifier.environment().subscribe_resize();
        let unsubscribe = subscription.unsubscribe_handle();

        let (publisher, states) = watch::channel(None);
        let stats = Arc::new(PipelineStats::new());
        let shutdown = CancellationToken::new();

        let pipeline = Pipeline {
            classifier: classifier.clone(),
            subscription,
            quiet_window: config.quiet_window,
            publisher,
            stats: Arc::clone(&stats),
            shutdown: shutdown.clone(),
        };
        let task = tokio::spawn(pipeline.run());

        info!(quiet_window = ?config.quiet_window, "Screen detector started");

        Self {
            classifier,
            config,
            states,
            stats,
            shutdown,
            unsubscribe,
            task: Some(task),
        }
    }

    /// Start with the default configuration.
    pub fn with_defaults(env: Arc<E>) -> Self {
        Self::start(env, DetectorConfig::default())
    }

    /// Stream of published screen states, replaying the latest one.
    pub fn subscribe(&self) -> ScreenStateStream {
        // Clones of a never-updated receiver see every publication as new,
        // so the stream starts at the latest value.
        ScreenStateStream::new(self.states.clone())
    }

    /// Latest published state, if any.
    pub fn latest_state(&self) -> Option<ScreenState> {
        *self.states.borrow()
    }

    /// The synchronous classifier backing this detector.
    pub fn classifier(&self) -> &DeviceClassifier<E> {
        &self.classifier
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Pipeline counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn is_mobile(&self) -> bool {
        self.classifier.is_mobile()
    }

    pub fn is_iphone(&self) -> bool {
        self.classifier.is_iphone()
    }

    /// OS major version; `None` for non-iPhones, an error for an iPhone
    /// identification string without a version.
    pub fn os_version(&self) -> Result<Option<u32>> {
        self.classifier.os_version()
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.classifier.device_pixel_ratio()
    }

    pub fn matching_models(&self) -> Result<Vec<DeviceModel>> {
        self.classifier.matching_models()
    }

    pub fn is_chrome_expanded(&self) -> Result<bool> {
        self.classifier.is_chrome_expanded()
    }

    pub fn current_screen_state(&self) -> ScreenState {
        self.classifier.current_screen_state()
    }

    pub fn report(&self) -> Result<DetectionReport> {
        self.classifier.report()
    }

    /// Whether the pipeline is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Release the resize subscription and stop the pipeline.
    ///
    /// Idempotent. Subscribers still receive the last published state, then
    /// their streams end.
    pub fn shutdown(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        self.unsubscribe.unsubscribe();
        self.shutdown.cancel();
        task.abort();
        info!("Screen detector shut down");
    }
}

impl<E: DisplayEnvironment> Drop for ScreenDetector<E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::environment::{EnvironmentProfile, ScreenGeometry, SimulatedEnvironment, Viewport};

    const QUIET: Duration = Duration::from_millis(200);

    fn setup(
        profile: EnvironmentProfile,
    ) -> (Arc<SimulatedEnvironment>, ScreenDetector<SimulatedEnvironment>) {
        let env = Arc::new(SimulatedEnvironment::new(profile));
        let detector = ScreenDetector::start(Arc::clone(&env), DetectorConfig::new(QUIET));
        (env, detector)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_published_before_first_resize() {
        let (_env, detector) = setup(EnvironmentProfile::for_model(DeviceModel::XII));
        tokio::time::sleep(ms(1000)).await;
        assert_eq!(detector.latest_state(), None);
        assert_eq!(detector.stats().publications, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_publishes_after_quiet_window() {
        let (env, detector) = setup(EnvironmentProfile::for_model(DeviceModel::XII));
        env.notify_resize();

        tokio::time::sleep(ms(150)).await;
        assert_eq!(detector.latest_state(), None);

        tokio::time::sleep(ms(100)).await;
        let state = detector.latest_state().expect("state published");
        assert_eq!((state.width, state.height), (390, 844));
        assert!(state.is_portrait);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_is_debounced_from_last_notification() {
        let (env, detector) = setup(EnvironmentProfile::default());

        for _ in 0..5 {
            env.notify_resize();
            tokio::time::sleep(ms(150)).await;
        }
        // Last notification at t=600; window closes at t=800.
        assert_eq!(detector.stats().recomputations, 0);

        tokio::time::sleep(ms(100)).await;
        let stats = detector.stats();
        assert_eq!(stats.notifications, 5);
        assert_eq!(stats.recomputations, 1);
        assert_eq!(stats.publications, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_identical_state_is_suppressed() {
        let (env, detector) = setup(EnvironmentProfile::default());

        env.notify_resize();
        tokio::time::sleep(ms(300)).await;
        env.notify_resize();
        tokio::time::sleep(ms(300)).await;

        let stats = detector.stats();
        assert_eq!(stats.recomputations, 2);
        assert_eq!(stats.publications, 1);
        assert_eq!(stats.suppressed, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_changed_state_is_published() {
        let (env, detector) = setup(EnvironmentProfile::for_model(DeviceModel::XII));
        let mut states = detector.subscribe();

        env.notify_resize();
        let first = states.next().await.unwrap();
        assert!(first.is_portrait);

        env.resize(ScreenGeometry::full(390, 844), Viewport::new(844, 390), Some(90));
        let second = states.next().await.unwrap();
        assert!(second.is_landscape);
        assert_eq!(detector.stats().publications, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_subscriber_gets_latest() {
        let (env, detector) = setup(EnvironmentProfile::default());
        env.notify_resize();
        tokio::time::sleep(ms(300)).await;

        let mut late = detector.subscribe();
        let state = tokio::time::timeout(ms(1), late.next())
            .await
            .expect("replayed without waiting")
            .unwrap();
        assert_eq!(Some(state), detector.latest_state());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sub_millisecond_quiet_window() {
        let window = Duration::from_micros(500);
        let env = Arc::new(SimulatedEnvironment::default());
        let detector = ScreenDetector::start(Arc::clone(&env), DetectorConfig::new(window));
        assert_eq!(detector.config().quiet_window, window);

        env.notify_resize();
        tokio::time::sleep(ms(5)).await;
        assert!(detector.latest_state().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_releases_subscription_synchronously() {
        let (env, mut detector) = setup(EnvironmentProfile::default());
        assert_eq!(env.resize_subscriber_count(), 1);

        detector.shutdown();
        assert_eq!(env.resize_subscriber_count(), 0);

        // Idempotent.
        detector.shutdown();
        assert!(!detector.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_window() {
        let (env, mut detector) = setup(EnvironmentProfile::default());
        let mut states = detector.subscribe();

        env.notify_resize();
        tokio::time::sleep(ms(50)).await;
        detector.shutdown();
        tokio::time::sleep(ms(500)).await;

        assert_eq!(detector.latest_state(), None);
        assert_eq!(states.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_subscription() {
        let (env, detector) = setup(EnvironmentProfile::default());
        drop(detector);
        assert_eq!(env.resize_subscriber_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_ua_does_not_stop_pipeline() {
        let (env, detector) = setup(EnvironmentProfile::for_model(DeviceModel::XII));
        env.notify_resize();
        tokio::time::sleep(ms(300)).await;
        let before = detector.latest_state();

        env.set_user_agent("Mozilla/5.0 (iPhone) Mobile");
        assert!(detector.matching_models().is_err());

        env.resize(ScreenGeometry::full(844, 390), Viewport::new(844, 390), Some(90));
        tokio::time::sleep(ms(300)).await;

        assert!(detector.is_running());
        assert_ne!(detector.latest_state(), before);
        assert_eq!(detector.stats().publications, 2);
    }
}
