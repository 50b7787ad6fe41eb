//! Subscriber side of the published screen state.

use tokio::sync::watch;

use crate::screen::ScreenState;

/// Stream of published [`ScreenState`] values.
///
/// Replays the most recent publication: a stream created after a state was
/// published yields that state from its first [`next`](Self::next) call,
/// without waiting for another resize.
#[derive(Debug, Clone)]
pub struct ScreenStateStream {
    rx: watch::Receiver<Option<ScreenState>>,
}

impl ScreenStateStream {
    /// Wrap a receiver that has not marked any publication as seen.
    pub(crate) fn new(rx: watch::Receiver<Option<ScreenState>>) -> Self {
        Self { rx }
    }

    /// Wait for the next state this stream has not yielded yet.
    ///
    /// Returns `None` after the detector is torn down and the last
    /// publication has been yielded.
    pub async fn next(&mut self) -> Option<ScreenState> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(state) = *self.rx.borrow_and_update() {
                return Some(state);
            }
        }
    }

    /// Latest published state, if any, without waiting.
    pub fn latest(&self) -> Option<ScreenState> {
        *self.rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ScreenGeometry;

    fn state(width: u32) -> ScreenState {
        ScreenState::new(ScreenGeometry::full(width, 800), None)
    }

    #[tokio::test]
    async fn test_late_stream_replays_latest() {
        let (tx, rx) = watch::channel(None);
        tx.send_replace(Some(state(1)));
        tx.send_replace(Some(state(2)));

        let mut stream = ScreenStateStream::new(rx);
        assert_eq!(stream.next().await, Some(state(2)));
        assert_eq!(stream.latest(), Some(state(2)));
    }

    #[tokio::test]
    async fn test_stream_ends_after_sender_drops() {
        let (tx, rx) = watch::channel(None);
        let mut stream = ScreenStateStream::new(rx);
        tx.send_replace(Some(state(1)));
        drop(tx);

        assert_eq!(stream.next().await, Some(state(1)));
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_nothing_published_yet() {
        let (tx, rx) = watch::channel(None);
        let stream = ScreenStateStream::new(rx);
        assert_eq!(stream.latest(), None);
        drop(tx);
    }
}
