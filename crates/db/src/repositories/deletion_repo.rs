//! Delete preview: compute what deleting one row would remove or detach.
//!
//! The traversal follows the relation catalog in
//! [`storyverse_core::schema`] rather than the database's own metadata, so
//! the preview and the migrations are kept honest by the schema tests.

use std::collections::{BTreeMap, BTreeSet};

use sqlx::PgPool;
use storyverse_core::schema::{self, OnDelete};
use storyverse_core::types::DbId;

use crate::models::deletion::{ColumnCount, DeletePreview, TableCount};

/// Cascade chains deeper than this are not followed.
pub const MAX_CASCADE_DEPTH: usize = 32;

pub struct DeletionRepo;

impl DeletionRepo {
    /// Preview the effect of deleting row `id` of `table`.
    ///
    /// Returns `None` if the table is not in the catalog or the row does
    /// not exist. Runs in a read-only repeatable-read transaction so all
    /// counts come from one snapshot.
    pub async fn preview(
        pool: &PgPool,
        table: &str,
        id: DbId,
    ) -> Result<Option<DeletePreview>, sqlx::Error> {
        let Some(root) = schema::table(table) else {
            return Ok(None);
        };

        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let exists_query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", root.table);
        let exists: bool = sqlx::query_scalar(&exists_query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Ok(None);
        }

        // Every row the delete removes, keyed by table. Includes the root.
        let mut doomed: BTreeMap<&'static str, BTreeSet<DbId>> = BTreeMap::new();
        doomed.entry(root.table).or_default().insert(id);

        let mut frontier: Vec<(&'static str, Vec<DbId>)> = vec![(root.table, vec![id])];
        let mut depth = 0;
        while !frontier.is_empty() {
            if depth == MAX_CASCADE_DEPTH {
                tracing::warn!(
                    table = root.table,
                    id,
                    "Delete preview stopped at maximum cascade depth"
                );
                break;
            }
            depth += 1;

            let mut next = Vec::new();
            for (parent, ids) in &frontier {
                for relation in schema::referencing(parent)
                    .filter(|r| r.on_delete == OnDelete::Cascade)
                {
                    let query = format!(
                        "SELECT id FROM {} WHERE {} = ANY($1)",
                        relation.table, relation.column
                    );
                    let children: Vec<DbId> = sqlx::query_scalar(&query)
                        .bind(ids)
                        .fetch_all(&mut *tx)
                        .await?;

                    let seen = doomed.entry(relation.table).or_default();
                    let fresh: Vec<DbId> =
                        children.into_iter().filter(|c| seen.insert(*c)).collect();
                    if !fresh.is_empty() {
                        next.push((relation.table, fresh));
                    }
                }
            }
            frontier = next;
        }

        let mut nullified = Vec::new();
        for (target, ids) in &doomed {
            let target_ids: Vec<DbId> = ids.iter().copied().collect();
            for relation in schema::referencing(target)
                .filter(|r| r.on_delete == OnDelete::SetNull)
            {
                let removed: Vec<DbId> = doomed
                    .get(relation.table)
                    .map(|s| s.iter().copied().collect())
                    .unwrap_or_default();
                let query = format!(
                    "SELECT COUNT(*) FROM {} WHERE {} = ANY($1) AND NOT (id = ANY($2))",
                    relation.table, relation.column
                );
                let count: i64 = sqlx::query_scalar(&query)
                    .bind(&target_ids)
                    .bind(&removed)
                    .fetch_one(&mut *tx)
                    .await?;
                if count > 0 {
                    nullified.push(ColumnCount {
                        table: relation.table,
                        column: relation.column,
                        count,
                    });
                }
            }
        }
        tx.commit().await?;

        let cascaded = doomed
            .iter()
            .filter_map(|(&table, ids)| {
                let mut count = ids.len() as i64;
                if table == root.table {
                    count -= 1;
                }
                (count > 0).then_some(TableCount { table, count })
            })
            .collect();
        nullified.sort_by(|a, b| (a.table, a.column).cmp(&(b.table, b.column)));

        tracing::debug!(table = root.table, id, "Delete preview computed");
        Ok(Some(DeletePreview {
            root_table: root.table,
            root_id: id,
            cascaded,
            nullified,
        }))
    }
}
