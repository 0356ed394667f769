//! Command registry.
//!
//! Built once at startup from the static command list and read-only
//! while the dispatch loop is serving messages.

use crate::commands::Command;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Human-facing metadata for a registered command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Canonical lowercase command name.
    pub name: &'static str,
    /// One-line summary shown in the help catalog.
    pub summary: &'static str,
    /// Longer description shown by `help <command>`.
    pub description: &'static str,
    /// Usage template; `{prefix}` is interpolated at render time.
    pub usage: &'static str,
}

/// A command spec paired with its handler.
pub struct Registration {
    pub spec: CommandSpec,
    pub handler: Arc<dyn Command>,
}

/// Name-to-handler mapping that preserves registration order.
#[derive(Default)]
pub struct CommandRegistry {
    order: Vec<String>,
    index: HashMap<String, Registration>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for the spec's name. Names are lowercased
    /// on insert so dispatch's case-folded lookup always agrees with
    /// registration. Re-registering a name keeps its original order slot.
    pub fn register(&mut self, spec: CommandSpec, handler: Arc<dyn Command>) {
        let name = spec.name.to_lowercase();
        if self
            .index
            .insert(name.clone(), Registration { spec, handler })
            .is_some()
        {
            warn!("Command {} registered twice; last registration wins", name);
        } else {
            self.order.push(name);
        }
    }

    /// Look up a command by its case-folded name.
    pub fn lookup(&self, name: &str) -> Option<&Registration> {
        self.index.get(name)
    }

    /// All registrations, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.order.iter().filter_map(|name| self.index.get(name))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.order.len()
    }
}
