use std::env;

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database: a SQLite file next to the bot process.
    Prod,
    /// Test database: always in-memory, never touches disk.
    Test,
}

/// Default location of the production database file.
const DEFAULT_DB_URL: &str = "sqlite://santa.db?mode=rwc";

/// Resolve the connection URL for a profile.
///
/// `SANTA_DATABASE_URL` overrides the production default. The test profile
/// is pinned to `sqlite::memory:` so test runs can never reach a real
/// database by misconfiguration.
pub fn db_url(profile: &DbProfile) -> String {
    match profile {
        DbProfile::Prod => {
            env::var("SANTA_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_string())
        }
        DbProfile::Test => "sqlite::memory:".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{db_url, DbProfile};

    #[test]
    fn test_profile_is_always_in_memory() {
        assert_eq!(db_url(&DbProfile::Test), "sqlite::memory:");
    }

    #[test]
    fn prod_profile_falls_back_to_the_default_file() {
        // Only meaningful when the env var is unset, which is the normal
        // situation for unit test runs.
        if std::env::var("SANTA_DATABASE_URL").is_err() {
            assert_eq!(db_url(&DbProfile::Prod), "sqlite://santa.db?mode=rwc");
        }
    }
}
