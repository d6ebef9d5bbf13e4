/// SQLx型アダプターのテスト（SQLite）
///
/// TaskPriorityをバインド値・取得値として直接扱い、保存ラベルと
/// 不正値の読み込みエラーを確認します。

#[cfg(test)]
mod sqlx_codec_tests {
    use enumtype::adapters::enum_type::{EnumColumnType, TaskPriorityEnumType};
    use enumtype::core::config::Dialect;
    use enumtype::core::priority::TaskPriority;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::{Row, SqlitePool};

    async fn setup_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let sql = format!(
            "CREATE TABLE tasks (id INTEGER PRIMARY KEY, priority {})",
            TaskPriorityEnumType.sql_declaration(&Dialect::SQLite)
        );
        sqlx::query(&sql).execute(&pool).await.unwrap();
        pool
    }

    /// バインドしたタグはラベルとして保存される
    #[tokio::test]
    async fn test_bind_stores_label() {
        let pool = setup_pool().await;

        sqlx::query("INSERT INTO tasks (id, priority) VALUES (?, ?)")
            .bind(1_i64)
            .bind(TaskPriority::High)
            .execute(&pool)
            .await
            .unwrap();

        let row = sqlx::query("SELECT priority FROM tasks WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        let raw: String = row.try_get("priority").unwrap();
        assert_eq!(raw, "haute");

        let tag: TaskPriority = row.try_get("priority").unwrap();
        assert_eq!(tag, TaskPriority::High);
    }

    /// NULLはNoneとして読める
    #[tokio::test]
    async fn test_null_reads_as_none() {
        let pool = setup_pool().await;

        sqlx::query("INSERT INTO tasks (id, priority) VALUES (?, ?)")
            .bind(1_i64)
            .bind(None::<TaskPriority>)
            .execute(&pool)
            .await
            .unwrap();

        let row = sqlx::query("SELECT priority FROM tasks WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        let tag: Option<TaskPriority> = row.try_get("priority").unwrap();
        assert_eq!(tag, None);
    }

    /// ドメイン外の値は読み込み時にデコードエラーになる
    #[tokio::test]
    async fn test_invalid_stored_value_fails_on_read() {
        let pool = setup_pool().await;

        sqlx::query("INSERT INTO tasks (id, priority) VALUES (1, 'valeur_invalide')")
            .execute(&pool)
            .await
            .unwrap();

        let row = sqlx::query("SELECT priority FROM tasks WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        let result = row.try_get::<TaskPriority, _>("priority");

        match result {
            Err(sqlx::Error::ColumnDecode { source, .. }) => {
                assert!(source
                    .to_string()
                    .contains("Invalid value 'valeur_invalide' for enum domain 'task_priority'"));
            }
            other => panic!("Expected ColumnDecode error, got {:?}", other),
        }

        // Option でも None に読み替えられない
        assert!(row.try_get::<Option<TaskPriority>, _>("priority").is_err());
    }

    /// すべてのタグが往復で元に戻る
    #[tokio::test]
    async fn test_round_trip_all_tags() {
        let pool = setup_pool().await;

        for (id, tag) in [
            TaskPriority::Low,
            TaskPriority::Medium,
            TaskPriority::High,
            TaskPriority::Critical,
        ]
        .into_iter()
        .enumerate()
        {
            sqlx::query("INSERT INTO tasks (id, priority) VALUES (?, ?)")
                .bind(id as i64)
                .bind(tag)
                .execute(&pool)
                .await
                .unwrap();
        }

        let rows = sqlx::query("SELECT priority FROM tasks ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
        let tags: Vec<TaskPriority> = rows
            .iter()
            .map(|row| row.try_get("priority").unwrap())
            .collect();

        assert_eq!(
            tags,
            vec![
                TaskPriority::Low,
                TaskPriority::Medium,
                TaskPriority::High,
                TaskPriority::Critical
            ]
        );
    }
}
