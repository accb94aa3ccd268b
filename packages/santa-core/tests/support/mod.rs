//! Shared helpers for integration tests: a migrated in-memory database and
//! shortcuts for getting players through registration.

use sea_orm::DatabaseConnection;

use santa_core::config::db::DbProfile;
use santa_core::repos::players::Player;
use santa_core::services::players as registration;

/// Fresh in-memory database with the schema applied. Every test gets its
/// own; nothing is shared between tests.
pub async fn test_db() -> DatabaseConnection {
    let conn = santa_core::connect_db(DbProfile::Test)
        .await
        .expect("connect to in-memory test db");
    santa_core::run_migrations(&conn)
        .await
        .expect("apply migrations");
    conn
}

/// Enroll `chat_id` and walk it through both registration steps.
#[allow(dead_code)] // not every test binary uses every helper
pub async fn register_ready(
    conn: &DatabaseConnection,
    chat_id: i64,
    name: &str,
    wish: &str,
) -> Player {
    registration::ensure_enrolled(conn, chat_id, Some("tester"))
        .await
        .expect("enroll player");
    registration::submit_name(conn, chat_id, name)
        .await
        .expect("submit name");
    registration::submit_wish(conn, chat_id, wish)
        .await
        .expect("submit wish")
}
