//! Running totals for one cleaning run.

use crate::cleaner::executor::DeleteRecord;
use crate::mode::Mode;
use humansize::{format_size, BINARY};

/// Count and bytes of every path handed to the executor.
///
/// In readonly mode nothing disappears between records, so a file inside a
/// matched directory that a pattern also matches is counted twice.
#[derive(Debug)]
pub struct Summary {
    mode: Mode,
    count: u64,
    total_bytes: u64,
}

impl Summary {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            count: 0,
            total_bytes: 0,
        }
    }

    /// Fold one record into the totals.
    pub fn record(&mut self, record: &DeleteRecord) {
        self.count += 1;
        self.total_bytes += record.size;
        tracing::info!(
            "{} {}: {} [{}]",
            if self.mode.readonly() { "Found" } else { "Deleting" },
            record.kind.as_str(),
            record.path.display(),
            format_size(record.size, BINARY)
        );
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Final one-line report.
    pub fn report(&self) -> String {
        format!(
            "Summary: {} {} element(s) [{}]",
            if self.mode.readonly() { "Found" } else { "Deleted" },
            self.count,
            format_size(self.total_bytes, BINARY)
        )
    }
}
