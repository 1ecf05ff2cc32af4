//! Application state shared across all handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::import::LoaderRegistry;
use crate::menu::NavigationRegistry;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    /// Built frontend directory.
    frontend_dir: PathBuf,

    /// Live dev server URL, set only in dev mode.
    dev_url: Option<String>,

    /// File loaders by extension.
    loaders: LoaderRegistry,

    /// Sidebar menu.
    navigation: NavigationRegistry,
}

impl AppState {
    /// Create application state with the built-in loaders.
    pub fn new(config: &Config) -> Self {
        Self::with_loaders(config, LoaderRegistry::default())
    }

    /// Create application state with a custom loader registry.
    pub fn with_loaders(config: &Config, loaders: LoaderRegistry) -> Self {
        let dev_url = config.dev_mode.then(|| config.frontend_dev_url.clone());
        Self {
            inner: Arc::new(AppStateInner {
                frontend_dir: config.frontend_dir.clone(),
                dev_url,
                loaders,
                navigation: NavigationRegistry,
            }),
        }
    }

    /// Built frontend directory.
    pub fn frontend_dir(&self) -> &Path {
        &self.inner.frontend_dir
    }

    /// Dev server URL when running in dev mode.
    pub fn dev_url(&self) -> Option<&str> {
        self.inner.dev_url.as_deref()
    }

    /// File loader registry.
    pub fn loaders(&self) -> &LoaderRegistry {
        &self.inner.loaders
    }

    /// Sidebar menu registry.
    pub fn navigation(&self) -> NavigationRegistry {
        self.inner.navigation
    }
}
