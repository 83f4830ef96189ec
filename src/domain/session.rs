// Per-session state
use super::observation::{ObservationLog, ValidationMode};
use super::table::WarningTable;

/// State owned by one user session: the last loaded warning table and the
/// observation log.
#[derive(Debug, Clone, Default)]
pub struct Session {
    table: Option<WarningTable>,
    log: ObservationLog,
}

impl Session {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            table: None,
            log: ObservationLog::new(mode),
        }
    }

    pub fn table(&self) -> Option<&WarningTable> {
        self.table.as_ref()
    }

    /// Replace the loaded table wholesale.
    pub fn replace_table(&mut self, table: WarningTable) {
        self.table = Some(table);
    }

    pub fn log(&self) -> &ObservationLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ObservationLog {
        &mut self.log
    }
}
