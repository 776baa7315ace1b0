//! Cog registry and the host that cogs load into.

use crate::about::AboutCog;
use crate::framework::Command;
use crate::uptime::UptimeCog;
use async_trait::async_trait;
use cogbot_common::{CogbotError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// An independently loadable unit of bot functionality.
#[async_trait]
pub trait Cog: Send + Sync {
    /// Module name, matched against the lowercased cog directory name.
    fn name(&self) -> &'static str;

    /// Registers the cog's commands with the host.
    async fn load(&self, host: &mut CogHost) -> Result<()>;
}

/// Maps module names to compiled-in cogs.
pub struct CogRegistry {
    cogs: HashMap<String, Arc<dyn Cog>>,
}

impl CogRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cogs: HashMap::new(),
        }
    }

    /// Creates a registry holding every built-in cog.
    #[must_use]
    pub fn builtin() -> Self {
        let cogs: [Arc<dyn Cog>; 2] = [Arc::new(AboutCog), Arc::new(UptimeCog)];
        let mut registry = Self::new();
        for cog in cogs {
            registry.cogs.insert(cog.name().to_string(), cog);
        }
        registry
    }

    /// Registers a cog under its name. Names must be unique.
    pub fn register(&mut self, cog: Arc<dyn Cog>) -> Result<()> {
        let name = cog.name().to_string();
        if self.cogs.contains_key(&name) {
            return Err(CogbotError::Cog(format!("Cog '{name}' is already registered")));
        }

        debug!("Registered cog {}", name);
        self.cogs.insert(name, cog);
        Ok(())
    }

    /// Gets a cog by module name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Cog>> {
        self.cogs.get(name).cloned()
    }

    /// Gets all registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.cogs.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered cogs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cogs.len()
    }

    /// Whether no cogs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cogs.is_empty()
    }
}

impl Default for CogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the commands and extension names of loaded cogs.
#[derive(Default)]
pub struct CogHost {
    commands: Vec<Command>,
    extensions: Vec<String>,
    // cog name -> identifier it was loaded under
    cogs: HashMap<&'static str, String>,
}

impl CogHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command; called by cogs from [`Cog::load`].
    pub fn add_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Loads `cog` under the extension identifier `identifier`.
    ///
    /// Loading an identifier twice, or the same cog under two identifiers,
    /// is an error. A failed load leaves no commands behind.
    pub async fn load_extension(&mut self, identifier: &str, cog: &dyn Cog) -> Result<()> {
        if self.is_loaded(identifier) {
            return Err(CogbotError::Cog(format!(
                "Extension '{identifier}' is already loaded"
            )));
        }

        if let Some(existing) = self.cogs.get(cog.name()) {
            return Err(CogbotError::Cog(format!(
                "Cog '{}' is already loaded as '{existing}'",
                cog.name()
            )));
        }

        let checkpoint = self.commands.len();
        if let Err(e) = cog.load(self).await {
            self.rollback(checkpoint);
            return Err(e);
        }

        self.extensions.push(identifier.to_string());
        self.cogs.insert(cog.name(), identifier.to_string());
        Ok(())
    }

    /// Drops commands added after `checkpoint`.
    pub(crate) fn rollback(&mut self, checkpoint: usize) {
        self.commands.truncate(checkpoint);
    }

    /// Whether an extension identifier has been loaded.
    #[must_use]
    pub fn is_loaded(&self, identifier: &str) -> bool {
        self.extensions.iter().any(|e| e == identifier)
    }

    /// Number of commands collected so far.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Loaded extension identifiers in load order.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Consumes the host, returning its commands and extension identifiers.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Command>, Vec<String>) {
        (self.commands, self.extensions)
    }
}
