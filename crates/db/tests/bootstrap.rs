use sqlx::PgPool;
use storyverse_core::schema::TABLES;

/// Full bootstrap test: connect, migrate, verify every catalog table exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    storyverse_db::health_check(&pool).await.unwrap();

    for def in TABLES {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", def.table))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{} query failed: {e}", def.table));
        assert_eq!(count.0, 0, "{} should start empty", def.table);
    }
}

/// The migrated schema contains exactly the catalog tables.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_uncatalogued_tables(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name::TEXT
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(tables.len(), TABLES.len());
    for (table,) in &tables {
        assert!(
            storyverse_core::schema::table(table).is_some(),
            "Table {table} is missing from the relation catalog"
        );
    }
}
