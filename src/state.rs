use std::path::PathBuf;

use crate::config::{self, AppConfig};
use crate::data::filter::{filter_rows, SearchMode};
use crate::data::loader;
use crate::data::model::ProviderTable;
use crate::data::resolver;
use crate::vpn;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A successfully loaded export file.
pub struct LoadedExport {
    pub table: ProviderTable,
    pub source: PathBuf,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Result of the last VPN probe.
    pub vpn_connected: bool,

    /// Loaded export (None until a refresh succeeds).
    pub export: Option<LoadedExport>,

    /// Current search term.
    pub query: String,

    /// Current search mode.
    pub mode: SearchMode,

    /// Indices of rows matching the last executed search.
    /// None while no search has been performed (e.g. empty query).
    pub matches: Option<Vec<usize>>,

    /// Failure message for the current action, shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        AppState {
            config,
            vpn_connected: false,
            export: None,
            query: String::new(),
            mode: SearchMode::AnyColumn,
            matches: None,
            status_message: None,
        }
    }

    /// Re-run the full sequence: VPN gate, newest-export resolution, load.
    /// Each step short-circuits on failure with its own message; nothing
    /// is carried over from the previous run.
    pub fn refresh(&mut self) {
        self.export = None;
        self.matches = None;
        self.status_message = None;

        self.vpn_connected = vpn::vpn_connected(&self.config.vpn_process);
        if !self.vpn_connected {
            self.status_message = Some(format!(
                "VPN is not connected ({} not running). Log in, then File → Reload.",
                self.config.vpn_process
            ));
            return;
        }

        let candidate = match resolver::resolve_latest(
            &self.config.data_dir,
            &self.config.file_pattern,
            self.config.case_sensitive_pattern,
        ) {
            Ok(candidate) => candidate,
            Err(e) => {
                log::error!("Export resolution failed: {e}");
                self.status_message = Some(e.to_string());
                return;
            }
        };

        let Some(candidate) = candidate else {
            self.status_message = Some(format!(
                "No files matching {} found in {}.",
                self.config.file_pattern,
                self.config.data_dir.display()
            ));
            return;
        };

        match loader::load_csv(&candidate.path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} records with columns {:?} from {}",
                    table.len(),
                    table.headers,
                    candidate.path.display()
                );
                self.export = Some(LoadedExport {
                    table,
                    source: candidate.path,
                });
                // Re-run a search the user already typed before the reload.
                self.run_search();
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", candidate.path.display());
                self.status_message =
                    Some(format!("Failed to load {}: {e}", candidate.path.display()));
            }
        }
    }

    /// Execute the current query against the loaded export.
    ///
    /// An empty (or whitespace-only) query means "no search requested":
    /// the filter is never invoked and the results section stays hidden.
    pub fn run_search(&mut self) {
        self.matches = None;

        let Some(export) = &self.export else {
            return;
        };
        let query = self.query.trim();
        if query.is_empty() {
            return;
        }

        match filter_rows(&export.table, query, self.mode) {
            Ok(indices) => {
                self.matches = Some(indices);
                self.status_message = None;
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Point the app at a different export directory, persist the choice,
    /// and reload.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.config.data_dir = dir;
        if let Err(e) = config::save_config(&self.config) {
            log::warn!("Failed to save config: {e:#}");
        }
        self.refresh();
    }
}
