//! Result of a delete preview: what a delete would remove or detach.

use serde::Serialize;
use storyverse_core::types::DbId;

/// Rows in one table that a delete would remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub count: i64,
}

/// Rows whose reference column a delete would set to NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCount {
    pub table: &'static str,
    pub column: &'static str,
    pub count: i64,
}

/// The full effect of deleting one row.
///
/// `cascaded` excludes the root row itself and lists only tables with a
/// non-zero count. `nullified` only counts rows that survive the delete.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePreview {
    pub root_table: &'static str,
    pub root_id: DbId,
    pub cascaded: Vec<TableCount>,
    pub nullified: Vec<ColumnCount>,
}

impl DeletePreview {
    /// Total rows removed, including the root.
    pub fn total_deleted(&self) -> i64 {
        1 + self.cascaded.iter().map(|c| c.count).sum::<i64>()
    }
}
