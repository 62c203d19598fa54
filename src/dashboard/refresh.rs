//! Periodic refresh as a cancellable task.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Owns at most one running refresh timer.
///
/// Starting again replaces the running timer; dropping the handle cancels it.
#[derive(Debug)]
pub struct AutoRefresh {
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl Default for AutoRefresh {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

impl AutoRefresh {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run `tick` every interval, first after one full interval.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start<F, Fut>(&mut self, mut tick: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let period = self.interval;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tracing::debug!("Auto-refreshing dashboard");
                tick().await;
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter_tick(counter: &Arc<AtomicUsize>) -> impl FnMut() -> std::future::Ready<()> + Send + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test]
    async fn test_ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut refresh = AutoRefresh::new(Duration::from_millis(20));

        refresh.start(counter_tick(&count));
        assert!(refresh.is_active());
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(count.load(Ordering::SeqCst) >= 2);

        refresh.cancel();
        assert!(!refresh.is_active());
        tokio::time::sleep(Duration::from_millis(30)).await;
        let after_cancel = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[tokio::test]
    async fn test_restart_replaces_previous_timer() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut refresh = AutoRefresh::new(Duration::from_millis(20));

        refresh.start(counter_tick(&first));
        refresh.start(counter_tick(&second));
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert!(second.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_first_tick_waits_one_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut refresh = AutoRefresh::new(Duration::from_secs(60));

        refresh.start(counter_tick(&count));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_default_interval_is_five_minutes() {
        assert_eq!(AutoRefresh::default().interval(), Duration::from_secs(300));
        assert!(!AutoRefresh::default().is_active());
    }
}
