//! Dashboard core: the presentation logic of the weather dashboard,
//! independent of any UI toolkit.
//!
//! Persistence goes through [`KeyValueStore`], drawing through [`Renderer`],
//! and periodic refresh through an [`AutoRefresh`] handle owned by a
//! [`DashboardSession`].

pub mod client;
pub mod preferences;
pub mod presenter;
pub mod refresh;
pub mod session;
pub mod state;
pub mod store;
pub mod units;
pub mod view;

pub use client::{ClientError, DashboardClient, ProxyEnvelope};
pub use preferences::{Preferences, Theme, FAVORITES_KEY, THEME_KEY};
pub use presenter::Dashboard;
pub use refresh::{AutoRefresh, DEFAULT_REFRESH_INTERVAL};
pub use session::{DashboardSession, SharedDashboard};
pub use state::DashboardState;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use units::TemperatureUnit;
pub use view::{icon_image_url, DashboardView, ForecastRow, Gauges, Renderer};
