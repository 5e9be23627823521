//! Daily Closure Repository
//!
//! Records are addressed as `daily_closure:⟨YYYY-MM-DD⟩`, so the upsert is
//! naturally idempotent per date: resubmitting a date overwrites the prior
//! values and no history is kept.

use chrono::NaiveDate;
use shared::models::DailyClosureRecord;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "daily_closure";

#[derive(Clone)]
pub struct ClosureRepository {
    base: BaseRepository,
}

impl ClosureRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Idempotent upsert keyed by date
    pub async fn upsert(&self, record: DailyClosureRecord) -> RepoResult<DailyClosureRecord> {
        let key = record.date.to_string();
        let stored: Option<DailyClosureRecord> = self
            .base
            .db()
            .upsert((TABLE, key.as_str()))
            .content(record)
            .await?;

        stored.ok_or_else(|| {
            RepoError::Database(format!("Failed to upsert closure for {}", key))
        })
    }

    /// Find the record for one date
    pub async fn find_by_date(&self, date: NaiveDate) -> RepoResult<Option<DailyClosureRecord>> {
        let record: Option<DailyClosureRecord> = self
            .base
            .db()
            .select((TABLE, date.to_string().as_str()))
            .await?;
        Ok(record)
    }

    /// All records with `start <= date < end`, ordered by date
    ///
    /// Dates are ISO strings, so lexicographic comparison is chronological.
    async fn find_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<DailyClosureRecord>> {
        let mut result = self
            .base
            .db()
            .query(
                r#"
                SELECT * FROM daily_closure
                WHERE date >= $start AND date < $end
                ORDER BY date
            "#,
            )
            .bind(("start", start.to_string()))
            .bind(("end", end.to_string()))
            .await?;

        let records: Vec<DailyClosureRecord> = result.take(0)?;
        Ok(records)
    }

    /// All records of one calendar month, ordered by date
    pub async fn find_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> RepoResult<Vec<DailyClosureRecord>> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| RepoError::Validation(format!("Invalid month: {year}-{month:02}")))?;
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| RepoError::Validation(format!("Invalid month: {year}-{month:02}")))?;

        self.find_in_range(start, end).await
    }

    /// All records of one calendar year, ordered by date
    pub async fn find_by_year(&self, year: i32) -> RepoResult<Vec<DailyClosureRecord>> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| RepoError::Validation(format!("Invalid year: {year}")))?;
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .ok_or_else(|| RepoError::Validation(format!("Invalid year: {year}")))?;

        self.find_in_range(start, end).await
    }

    /// Delete the record for one date (admin only)
    pub async fn delete(&self, date: NaiveDate) -> RepoResult<bool> {
        let deleted: Option<DailyClosureRecord> = self
            .base
            .db()
            .delete((TABLE, date.to_string().as_str()))
            .await?;
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::local::RocksDb;

    async fn test_repo() -> (ClosureRepository, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let db = Surreal::new::<RocksDb>(path.to_string_lossy().as_ref())
            .await
            .unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        (ClosureRepository::new(db), dir)
    }

    fn record(date: &str, corrispettivi: f64, cash_final: f64) -> DailyClosureRecord {
        DailyClosureRecord {
            date: date.parse().unwrap(),
            corrispettivi,
            iva10: 0.0,
            iva22: 0.0,
            fatture: 0.0,
            cash_final,
            pos: 0.0,
            sella: 0.0,
            stripe_pay: 0.0,
            bonifici: 0.0,
            mance: 0.0,
            note: None,
            is_closed: false,
        }
    }

    #[tokio::test]
    async fn test_upsert_same_date_keeps_one_record() {
        let (repo, _dir) = test_repo().await;
        let date: NaiveDate = "2025-03-14".parse().unwrap();

        repo.upsert(record("2025-03-14", 100.0, 100.0)).await.unwrap();
        let second = repo.upsert(record("2025-03-14", 250.0, 240.0)).await.unwrap();
        assert_eq!(second.corrispettivi, 250.0);

        // Exactly one stored record, reflecting the second payload
        let month = repo.find_by_month(2025, 3).await.unwrap();
        assert_eq!(month.len(), 1);
        assert_eq!(month[0].corrispettivi, 250.0);
        assert_eq!(month[0].cash_final, 240.0);

        let found = repo.find_by_date(date).await.unwrap().unwrap();
        assert_eq!(found.corrispettivi, 250.0);
    }

    #[tokio::test]
    async fn test_find_by_month_range_boundaries() {
        let (repo, _dir) = test_repo().await;

        repo.upsert(record("2025-02-28", 1.0, 1.0)).await.unwrap();
        repo.upsert(record("2025-03-01", 2.0, 2.0)).await.unwrap();
        repo.upsert(record("2025-03-31", 3.0, 3.0)).await.unwrap();
        repo.upsert(record("2025-04-01", 4.0, 4.0)).await.unwrap();

        let march = repo.find_by_month(2025, 3).await.unwrap();
        let dates: Vec<String> = march.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-03-01", "2025-03-31"]);
    }

    #[tokio::test]
    async fn test_find_by_year_spans_december() {
        let (repo, _dir) = test_repo().await;

        repo.upsert(record("2024-12-31", 1.0, 1.0)).await.unwrap();
        repo.upsert(record("2025-01-01", 2.0, 2.0)).await.unwrap();
        repo.upsert(record("2025-12-31", 3.0, 3.0)).await.unwrap();

        let year = repo.find_by_year(2025).await.unwrap();
        assert_eq!(year.len(), 2);

        let december = repo.find_by_month(2024, 12).await.unwrap();
        assert_eq!(december.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_date_is_none() {
        let (repo, _dir) = test_repo().await;
        let missing = repo
            .find_by_date("2025-03-14".parse().unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let (repo, _dir) = test_repo().await;
        let date: NaiveDate = "2025-03-14".parse().unwrap();

        repo.upsert(record("2025-03-14", 100.0, 100.0)).await.unwrap();
        assert!(repo.delete(date).await.unwrap());
        assert!(repo.find_by_date(date).await.unwrap().is_none());
        assert!(!repo.delete(date).await.unwrap());
    }
}
