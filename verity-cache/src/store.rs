//! SQLite persistence for verdicts.
//!
//! One table, one row per normalized claim. The `UNIQUE` constraint on
//! the claim column plus `ON CONFLICT ... DO UPDATE` gives re-verified
//! claims overwrite semantics instead of duplicate rows.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use verity_core::config::{defaults, CacheConfig};
use verity_core::errors::{CacheError, VerityResult};
use verity_core::models::{CacheEntry, Verdict};

use crate::to_cache_err;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS search_log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        claim TEXT NOT NULL UNIQUE,
        verdict TEXT NOT NULL,
        source_link TEXT,
        explanation TEXT,
        evidence_json TEXT,
        searched_at TEXT
    );
";

/// Durable verdict store over a single SQLite connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the store at the configured path.
    pub fn open(config: &CacheConfig) -> VerityResult<Self> {
        let conn = Connection::open(&config.path).map_err(|e| to_cache_err(e.to_string()))?;
        Self::init(conn, config.busy_timeout_ms)
    }

    /// Open a private in-memory store, used in tests.
    pub fn open_in_memory() -> VerityResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_cache_err(e.to_string()))?;
        Self::init(conn, defaults::DEFAULT_CACHE_BUSY_TIMEOUT_MS)
    }

    fn init(conn: Connection, busy_timeout_ms: u32) -> VerityResult<Self> {
        apply_pragmas(&conn, busy_timeout_ms)?;
        conn.execute_batch(SCHEMA).map_err(|e| CacheError::SchemaFailed {
            reason: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Look up the stored verdict for a normalized claim.
    pub fn get(&self, claim_norm: &str) -> VerityResult<Option<CacheEntry>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT verdict, source_link, explanation, evidence_json, searched_at
                 FROM search_log WHERE claim = ?1",
                params![claim_norm],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<String>>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, Option<String>>(4)?,
                    ))
                },
            )
            .optional()
            .map_err(|e| to_cache_err(e.to_string()))?;

        Ok(row.map(|(verdict, link, explanation, evidence_json, searched_at)| {
            CacheEntry {
                verdict: Verdict::parse(&verdict),
                link,
                explanation,
                evidence: evidence_json.and_then(|raw| serde_json::from_str(&raw).ok()),
                searched_at: parse_timestamp(searched_at.as_deref()),
            }
        }))
    }

    /// Insert or overwrite the row for a normalized claim.
    pub fn upsert(
        &self,
        claim_norm: &str,
        verdict: Verdict,
        link: &str,
        explanation: &str,
        evidence: &serde_json::Value,
    ) -> VerityResult<()> {
        let evidence_json =
            serde_json::to_string(evidence).map_err(|e| CacheError::SerializationFailed {
                reason: e.to_string(),
            })?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO search_log (claim, verdict, source_link, explanation, evidence_json, searched_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(claim) DO UPDATE SET
                 verdict = excluded.verdict,
                 source_link = excluded.source_link,
                 explanation = excluded.explanation,
                 evidence_json = excluded.evidence_json,
                 searched_at = excluded.searched_at",
            params![
                claim_norm,
                verdict.as_str(),
                link,
                explanation,
                evidence_json,
                Utc::now().to_rfc3339(),
            ],
        )
        .map_err(|e| to_cache_err(e.to_string()))?;
        Ok(())
    }

    /// Number of stored rows.
    pub fn entry_count(&self) -> VerityResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM search_log", [], |row| row.get(0))
            .map_err(|e| to_cache_err(e.to_string()))?;
        Ok(count as u64)
    }

    fn lock(&self) -> VerityResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| to_cache_err(format!("connection lock poisoned: {e}")))
    }
}

fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> VerityResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {busy_timeout_ms};
        "
    ))
    .map_err(|e| to_cache_err(e.to_string()))?;
    Ok(())
}

/// Unparsable timestamps degrade to now rather than dropping the row.
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}
