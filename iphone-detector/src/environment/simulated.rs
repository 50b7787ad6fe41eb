//! Scriptable in-memory display environment.

use parking_lot::RwLock;
use tracing::debug;

use super::{
    DisplayEnvironment, EnvironmentProfile, ResizeSource, ResizeSubscription, ScreenGeometry,
    Viewport,
};

/// A display environment whose values are set programmatically.
///
/// Setters change what the environment reports without firing a resize
/// notification; [`resize`](Self::resize) and
/// [`notify_resize`](Self::notify_resize) fire one, the way a browser would
/// after the viewport changes.
///
/// # Example
///
/// ```
/// use iphone_detector::device::DeviceModel;
/// use iphone_detector::environment::{
///     DisplayEnvironment, EnvironmentProfile, SimulatedEnvironment,
/// };
///
/// let env = SimulatedEnvironment::new(EnvironmentProfile::for_model(DeviceModel::XII));
/// assert_eq!(env.screen_geometry().width, 390);
/// assert_eq!(env.device_pixel_ratio(), 3.0);
/// ```
#[derive(Debug)]
pub struct SimulatedEnvironment {
    state: RwLock<EnvironmentProfile>,
    resize: ResizeSource,
}

impl SimulatedEnvironment {
    /// Create an environment reporting `profile`.
    pub fn new(profile: EnvironmentProfile) -> Self {
        Self {
            state: RwLock::new(profile),
            resize: ResizeSource::new(),
        }
    }

    /// Snapshot of everything the environment currently reports.
    pub fn profile(&self) -> EnvironmentProfile {
        self.state.read().clone()
    }

    /// Replace every reported value at once.
    pub fn set_profile(&self, profile: EnvironmentProfile) {
        *self.state.write() = profile;
    }

    pub fn set_screen_geometry(&self, geometry: ScreenGeometry) {
        self.state.write().geometry = geometry;
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.state.write().viewport = viewport;
    }

    pub fn set_orientation(&self, orientation: Option<i32>) {
        self.state.write().orientation = orientation;
    }

    pub fn set_device_pixel_ratio(&self, ratio: f64) {
        self.state.write().device_pixel_ratio = ratio;
    }

    pub fn set_user_agent(&self, user_agent: impl Into<String>) {
        self.state.write().user_agent = user_agent.into();
    }

    /// Update geometry, viewport and orientation, then fire a notification.
    pub fn resize(&self, geometry: ScreenGeometry, viewport: Viewport, orientation: Option<i32>) {
        {
            let mut state = self.state.write();
            state.geometry = geometry;
            state.viewport = viewport;
            state.orientation = orientation;
        }
        self.notify_resize();
    }

    /// Fire a resize notification without changing any value.
    ///
    /// Returns the number of subscriptions notified.
    pub fn notify_resize(&self) -> usize {
        let notified = self.resize.notify();
        debug!(notified, "Simulated resize");
        notified
    }

    /// Number of live resize subscriptions.
    pub fn resize_subscriber_count(&self) -> usize {
        self.resize.subscriber_count()
    }
}

impl Default for SimulatedEnvironment {
    fn default() -> Self {
        Self::new(EnvironmentProfile::default())
    }
}

impl DisplayEnvironment for SimulatedEnvironment {
    fn screen_geometry(&self) -> ScreenGeometry {
        self.state.read().geometry
    }

    fn viewport(&self) -> Viewport {
        self.state.read().viewport
    }

    fn orientation(&self) -> Option<i32> {
        self.state.read().orientation
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.state.read().device_pixel_ratio
    }

    fn user_agent(&self) -> String {
        self.state.read().user_agent.clone()
    }

    fn subscribe_resize(&self) -> ResizeSubscription {
        self.resize.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_setters_change_reported_values() {
        let env = SimulatedEnvironment::default();
        env.set_screen_geometry(ScreenGeometry::full(375, 812));
        env.set_viewport(Viewport::new(375, 635));
        env.set_orientation(Some(90));
        env.set_device_pixel_ratio(3.0);
        env.set_user_agent("iPhone");

        assert_eq!(env.screen_geometry(), ScreenGeometry::full(375, 812));
        assert_eq!(env.viewport(), Viewport::new(375, 635));
        assert_eq!(env.orientation(), Some(90));
        assert_eq!(env.device_pixel_ratio(), 3.0);
        assert_eq!(env.user_agent(), "iPhone");
    }

    #[tokio::test(start_paused = true)]
    async fn test_setters_do_not_notify() {
        let env = SimulatedEnvironment::default();
        let mut sub = env.subscribe_resize();

        env.set_screen_geometry(ScreenGeometry::full(375, 812));
        env.set_viewport(Viewport::new(375, 635));
        env.set_orientation(Some(90));
        env.set_device_pixel_ratio(3.0);
        env.set_user_agent("iPhone");
        env.set_profile(EnvironmentProfile::default());

        let pending = tokio::time::timeout(Duration::ZERO, sub.recv()).await;
        assert!(pending.is_err(), "setter fired a resize notification");

        env.notify_resize();
        assert!(sub.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_resize_updates_and_notifies() {
        let env = SimulatedEnvironment::default();
        let mut sub = env.subscribe_resize();

        env.resize(ScreenGeometry::full(390, 844), Viewport::new(844, 390), Some(90));

        assert!(sub.recv().await.is_some());
        assert_eq!(env.screen_geometry().height, 844);
        assert_eq!(env.viewport().inner_height, 390);
        assert_eq!(env.orientation(), Some(90));
    }

    #[test]
    fn test_subscriber_count() {
        let env = SimulatedEnvironment::default();
        assert_eq!(env.resize_subscriber_count(), 0);
        let sub = env.subscribe_resize();
        assert_eq!(env.resize_subscriber_count(), 1);
        drop(sub);
        assert_eq!(env.resize_subscriber_count(), 0);
    }
}
