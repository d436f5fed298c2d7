//! List command implementation.
//!
//! The `vup ls` command lists every venv reachable from a starting
//! directory, in the same order `find` searches. The venv named by
//! `VIRTUAL_ENV` is marked with `*`.

use std::path::PathBuf;

use anyhow::Context;

use crate::cli::args::LsArgs;
use crate::environment::Invocation;
use crate::error::Result;
use crate::ui::{Table, UserInterface};
use crate::venv::{Catalog, CatalogEntry};

use super::dispatcher::{Command, CommandResult};

/// Marker for the active venv.
pub const ACTIVE_MARKER: &str = "*";

/// The list command implementation.
pub struct ListCommand {
    invocation: Invocation,
    args: LsArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(invocation: &Invocation, args: LsArgs) -> Self {
        Self {
            invocation: invocation.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LsArgs {
        &self.args
    }

    fn start_dir(&self) -> PathBuf {
        match &self.args.start_dir {
            Some(dir) => self.invocation.resolve(dir),
            None => self.invocation.cwd.clone(),
        }
    }

    fn render_json(&self, catalog: &Catalog, ui: &mut dyn UserInterface) -> Result<()> {
        let entries: Vec<&CatalogEntry> = catalog.entries().collect();
        let json = serde_json::to_string_pretty(&entries).context("serializing venv listing")?;
        for line in json.lines() {
            ui.emit(line);
        }
        Ok(())
    }

    fn render_table(&self, catalog: &Catalog, ui: &mut dyn UserInterface) {
        if catalog.is_empty() {
            ui.message("No venvs found.");
            return;
        }

        let mut table = Table::new(vec!["", "NAME", "VENV", "STATUS"]);
        for entry in catalog.entries() {
            let marker = if entry.active { ACTIVE_MARKER } else { "" };
            let status = status_text(entry);
            table.add_row(vec![
                marker,
                entry.name.as_str(),
                entry.label.as_str(),
                status.as_str(),
            ]);
        }

        for line in table.lines() {
            ui.emit(&line);
        }
    }
}

/// Status column text for one entry.
fn status_text(entry: &CatalogEntry) -> String {
    if entry.shadowed {
        format!("{} (shadowed)", entry.status.describe())
    } else {
        entry.status.describe().to_string()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let start = self.start_dir();
        if !start.is_dir() {
            let fallback = if self.args.no_traverse {
                "home"
            } else {
                "its ancestors and home"
            };
            ui.warning(&format!(
                "{} is not a directory; listing {} instead",
                start.display(),
                fallback
            ));
        }

        let roots = self
            .invocation
            .resolver()
            .search_roots(&start, !self.args.no_traverse);
        let catalog = Catalog::collect(
            &roots,
            self.invocation.home(),
            self.invocation.active_venv.as_deref(),
        );
        tracing::debug!(
            roots = roots.len(),
            entries = catalog.entries().count(),
            active = catalog.active_count(),
            "collected venvs"
        );

        if self.args.json {
            self.render_json(&catalog, ui)?;
        } else {
            self.render_table(&catalog, ui);
        }

        Ok(CommandResult::success())
    }
}
