//! Shared application state.

use common::Clock;

use crate::config::Config;

/// State handed to every handler: the resolved config and the time source.
pub struct AppState<C: Clock> {
    pub config: Config,
    pub clock: C,
}

impl<C: Clock> AppState<C> {
    pub fn new(config: Config, clock: C) -> Self {
        Self { config, clock }
    }
}
