//! The config screen editing session.

use columns_model::{
    sort_by_name, validate, BreakpointSet, Configuration, ContentType, NamingConfig, Preset,
    ValidationIssue,
};
use tracing::info;

use crate::error::ConfigResult;
use crate::host::InstallationHost;
use crate::store;

/// Holds the configuration being edited and the content-type catalog it is
/// edited against. Every mutation goes through a [`store`] function.
#[derive(Debug, Clone)]
pub struct ConfigScreen {
    config: Configuration,
    content_types: Vec<ContentType>,
    naming: NamingConfig,
}

impl ConfigScreen {
    /// Loads stored parameters and the catalog from the host.
    ///
    /// On first install a default configuration is synthesized. A catalog
    /// failure aborts the load; nothing is kept from the attempt.
    pub async fn load(host: &dyn InstallationHost) -> ConfigResult<Self> {
        Self::load_with(host, NamingConfig::default()).await
    }

    pub async fn load_with(host: &dyn InstallationHost, naming: NamingConfig) -> ConfigResult<Self> {
        let stored = host.get_parameters().await?;
        let mut content_types = host.list_content_types().await?;
        sort_by_name(&mut content_types);

        let config = match stored {
            Some(config) => {
                info!(
                    "Loaded configuration: {} preset(s), {} breakpoint set(s)",
                    config.presets.len(),
                    config.breakpoints.len()
                );
                config
            }
            None => {
                info!("No stored configuration, creating defaults");
                store::add_preset_with(&Configuration::default(), &content_types, &naming)
            }
        };

        Ok(Self {
            config,
            content_types,
            naming,
        })
    }

    /// Starts a session from values already in hand.
    pub fn new(config: Configuration, mut content_types: Vec<ContentType>) -> Self {
        sort_by_name(&mut content_types);
        Self {
            config,
            content_types,
            naming: NamingConfig::default(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The catalog, sorted by display name.
    pub fn content_types(&self) -> &[ContentType] {
        &self.content_types
    }

    pub fn add_preset(&mut self) {
        self.config = store::add_preset_with(&self.config, &self.content_types, &self.naming);
    }

    pub fn add_breakpoint_set(&mut self) {
        self.config = store::add_breakpoint_set_with(&self.config, &self.naming);
    }

    pub fn update_preset(&mut self, index: usize, preset: Preset) {
        self.config = store::update_preset(&self.config, index, preset);
    }

    pub fn update_breakpoint_set(&mut self, index: usize, set: BreakpointSet) {
        self.config = store::update_breakpoint_set(&self.config, index, set);
    }

    /// Runs a sub-editor operation on a copy of the preset and stores the result.
    pub fn edit_preset(&mut self, index: usize, edit: impl FnOnce(&mut Preset)) {
        if let Some(mut preset) = self.config.presets.get(index).cloned() {
            edit(&mut preset);
            self.update_preset(index, preset);
        }
    }

    pub fn edit_breakpoint_set(&mut self, index: usize, edit: impl FnOnce(&mut BreakpointSet)) {
        if let Some(mut set) = self.config.breakpoints.get(index).cloned() {
            edit(&mut set);
            self.update_breakpoint_set(index, set);
        }
    }

    pub fn delete_preset(&mut self, index: usize) {
        self.config = store::delete_preset(&self.config, index);
    }

    pub fn delete_breakpoint_set(&mut self, index: usize) {
        self.config = store::delete_breakpoint_set(&self.config, index);
    }

    pub fn duplicate_preset(&mut self, index: usize) {
        self.config = store::duplicate_preset(&self.config, index);
    }

    pub fn duplicate_breakpoint_set(&mut self, index: usize) {
        self.config = store::duplicate_breakpoint_set(&self.config, index);
    }

    /// The UI only offers delete while more than one preset remains.
    pub fn can_delete_presets(&self) -> bool {
        self.config.presets.len() > 1
    }

    pub fn can_delete_breakpoint_sets(&self) -> bool {
        self.config.breakpoints.len() > 1
    }

    pub fn issues(&self) -> Vec<ValidationIssue> {
        validate(&self.config)
    }

    /// The parameters document handed to the host on save.
    pub fn on_configure(&self) -> ConfigResult<serde_json::Value> {
        Ok(self.config.to_json()?)
    }
}
