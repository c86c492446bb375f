use std::sync::Arc;

use gyani_core::Config;
use gyani_humanizer::Humanizer;
use gyani_providers::Completer;

/// Everything a handler needs. Built once and cloned into each worker.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub completer: Arc<Completer>,
    pub humanizer: Humanizer,
}

impl AppState {
    pub fn new(config: Arc<Config>, completer: Completer) -> Self {
        let humanizer = Humanizer::new(config.humanizer.enabled);
        Self {
            config,
            completer: Arc::new(completer),
            humanizer,
        }
    }
}
