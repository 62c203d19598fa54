//! A running dashboard: the presenter plus its refresh timer.

use super::{
    presenter::Dashboard, refresh::AutoRefresh, store::KeyValueStore, view::Renderer,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Shared handle to a dashboard driven by a timer
pub type SharedDashboard<S, R> = Arc<Mutex<Dashboard<S, R>>>;

/// Owns one dashboard and at most one active refresh timer.
///
/// Every tick reloads the current city. Dropping the session stops the timer.
pub struct DashboardSession<S, R> {
    dashboard: SharedDashboard<S, R>,
    auto_refresh: AutoRefresh,
}

impl<S, R> DashboardSession<S, R>
where
    S: KeyValueStore + Send + 'static,
    R: Renderer + Send + 'static,
{
    pub fn new(dashboard: Dashboard<S, R>, interval: Duration) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            auto_refresh: AutoRefresh::new(interval),
        }
    }

    pub fn dashboard(&self) -> SharedDashboard<S, R> {
        Arc::clone(&self.dashboard)
    }

    /// Initial load of the current city, then start the timer
    pub async fn start(&mut self) {
        self.dashboard.lock().await.refresh().await;
        self.restart_timer();
    }

    /// Manual refresh: reload now and restart the timer from zero
    pub async fn refresh(&mut self) {
        self.dashboard.lock().await.refresh().await;
        self.restart_timer();
    }

    /// Load a user-entered city; the timer keeps its schedule
    pub async fn search(&self, input: &str) {
        self.dashboard.lock().await.search(input).await;
    }

    pub fn stop(&mut self) {
        self.auto_refresh.cancel();
    }

    pub fn is_auto_refreshing(&self) -> bool {
        self.auto_refresh.is_active()
    }

    fn restart_timer(&mut self) {
        let dashboard = Arc::clone(&self.dashboard);
        self.auto_refresh.start(move || {
            let dashboard = Arc::clone(&dashboard);
            async move {
                dashboard.lock().await.refresh().await;
            }
        });
    }
}
