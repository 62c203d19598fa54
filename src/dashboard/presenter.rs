//! Dashboard presenter: wires the proxy client, preferences, state and the
//! renderer together.

use super::{
    client::{ClientError, DashboardClient},
    preferences::{Preferences, Theme},
    state::DashboardState,
    store::{KeyValueStore, StoreError},
    units::TemperatureUnit,
    view::Renderer,
};
use chrono::Local;

pub struct Dashboard<S, R> {
    client: DashboardClient,
    preferences: Preferences<S>,
    renderer: R,
    state: DashboardState,
}

impl<S: KeyValueStore, R: Renderer> Dashboard<S, R> {
    /// Create a dashboard starting at `initial_city`, with the stored theme
    pub fn new(client: DashboardClient, store: S, renderer: R, initial_city: &str) -> Self {
        let preferences = Preferences::new(store);
        let state = DashboardState::new(initial_city, preferences.theme());
        Self {
            client,
            preferences,
            renderer,
            state,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn favorites(&self) -> Vec<String> {
        self.preferences.favorites()
    }

    /// Fetch `city` and render the outcome
    pub async fn load(&mut self, city: &str) {
        let outcome = self.client.fetch(city).await;
        let state = self.state.clone();

        self.state = match outcome {
            Ok(envelope) => state.apply(envelope, Local::now()),
            Err(e) => {
                tracing::warn!(city = %city, error = %e, "Dashboard fetch failed");
                state.with_error(fetch_failure_message(&e))
            }
        };

        self.render();
        if let Some(message) = self.state.last_error() {
            self.renderer.show_error(message);
        }
    }

    /// Reload the current city
    pub async fn refresh(&mut self) {
        let city = self.state.city.clone();
        self.load(&city).await;
    }

    /// Load a user-entered city; blank input is ignored
    pub async fn search(&mut self, input: &str) {
        let city = input.trim();
        if !city.is_empty() {
            self.load(city).await;
        }
    }

    /// Switch between °C and °F and redraw from the current data
    pub fn toggle_unit(&mut self) -> TemperatureUnit {
        self.state.unit = self.state.unit.toggled();
        self.render();
        self.state.unit
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        self.state.theme = self.preferences.toggle_theme()?;
        self.render();
        Ok(self.state.theme)
    }

    /// Add or remove the current city from favorites
    pub fn toggle_favorite(&mut self) -> Result<bool, StoreError> {
        let added = self.preferences.toggle_favorite(&self.state.city)?;
        self.render();
        Ok(added)
    }

    fn render(&mut self) {
        if let Some(view) = self.state.view(self.preferences.favorites()) {
            self.renderer.render(&view);
        }
    }
}

fn fetch_failure_message(error: &ClientError) -> String {
    match error {
        ClientError::InvalidResponse { .. } => "unexpected response from weather service".to_string(),
        ClientError::Transport(_) | ClientError::InvalidUrl(_) => {
            "weather service unreachable".to_string()
        }
    }
}
