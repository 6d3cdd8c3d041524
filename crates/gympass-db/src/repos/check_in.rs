//! Check-in ledger on libSQL.
//!
//! Uniqueness of (`user_id`, `check_in_day`) is enforced by
//! `idx_check_ins_user_day`; a violating insert surfaces as
//! `DatabaseError::Conflict`. A clash on the random primary key is not a
//! conflict; `create` draws a fresh id and retries. Validation is a conditional update on
//! `validated_at IS NULL`, so a stored timestamp is never overwritten.

use async_trait::async_trait;
use chrono::NaiveDate;

use gympass_core::entities::{CheckIn, NewCheckIn};
use gympass_core::ids::PREFIX_CHECK_IN;

use crate::error::{CHECK_IN_ID, CHECK_IN_USER_DAY, DatabaseError, is_unique_violation_on};
use crate::{GymDb, MAX_ID_ATTEMPTS};
use crate::helpers::{
    format_datetime, get_opt_string, page_bounds, parse_date, parse_datetime,
    parse_optional_datetime,
};
use crate::ports::CheckInLedger;

const SELECT_COLS: &str = "id, user_id, gym_id, check_in_day, created_at, validated_at";

fn row_to_check_in(row: &libsql::Row) -> Result<CheckIn, DatabaseError> {
    Ok(CheckIn {
        id: row.get(0)?,
        user_id: row.get(1)?,
        gym_id: row.get(2)?,
        check_in_day: parse_date(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        validated_at: parse_optional_datetime(get_opt_string(row, 5)?.as_deref())?,
    })
}

impl GymDb {
    /// Insert `check_in` under `id`. Returns `Ok(false)` if `id` is taken.
    async fn insert_check_in(
        &self,
        id: &str,
        check_in: &NewCheckIn,
    ) -> Result<bool, DatabaseError> {
        let inserted = self
            .conn()
            .execute(
                "INSERT INTO check_ins (id, user_id, gym_id, check_in_day, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id,
                    check_in.user_id.as_str(),
                    check_in.gym_id.as_str(),
                    check_in.check_in_day.to_string(),
                    format_datetime(&check_in.created_at)
                ],
            )
            .await;

        match inserted {
            Ok(_) => Ok(true),
            Err(e) if is_unique_violation_on(&e, CHECK_IN_USER_DAY) => {
                Err(DatabaseError::Conflict(format!(
                    "user {} already checked in on {}",
                    check_in.user_id, check_in.check_in_day
                )))
            }
            Err(e) if is_unique_violation_on(&e, CHECK_IN_ID) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CheckInLedger for GymDb {
    async fn find_by_id(&self, id: &str) -> Result<Option<CheckIn>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM check_ins WHERE id = ?1"),
                [id],
            )
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_check_in(&row))
            .transpose()
    }

    async fn find_by_user_on_date(
        &self,
        user_id: &str,
        day: NaiveDate,
    ) -> Result<Option<CheckIn>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM check_ins
                     WHERE user_id = ?1 AND check_in_day = ?2 LIMIT 1"
                ),
                libsql::params![user_id, day.to_string()],
            )
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_check_in(&row))
            .transpose()
    }

    async fn find_many_by_user(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<CheckIn>, DatabaseError> {
        let (limit, offset) = page_bounds(page);
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM check_ins WHERE user_id = ?1
                     ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3"
                ),
                libsql::params![user_id, limit, offset],
            )
            .await?;

        let mut check_ins = Vec::new();
        while let Some(row) = rows.next().await? {
            check_ins.push(row_to_check_in(&row)?);
        }
        Ok(check_ins)
    }

    async fn count_by_user(&self, user_id: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM check_ins WHERE user_id = ?1",
                [user_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|e| DatabaseError::Query(format!("negative check-in count {count}: {e}")))
    }

    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, DatabaseError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.generate_id(PREFIX_CHECK_IN).await?;
            if self.insert_check_in(&id, &check_in).await? {
                return Ok(check_in.into_check_in(id));
            }
            tracing::warn!(%id, "check-in id already taken, drawing another");
        }
        Err(DatabaseError::Other(anyhow::anyhow!(
            "no unused check-in id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }

    async fn save(&self, check_in: &CheckIn) -> Result<CheckIn, DatabaseError> {
        let validated_at = check_in.validated_at.as_ref().map(format_datetime);
        let updated = self
            .conn()
            .execute(
                "UPDATE check_ins SET validated_at = ?2
                 WHERE id = ?1 AND validated_at IS NULL",
                libsql::params![check_in.id.as_str(), validated_at.as_deref()],
            )
            .await?;

        let stored = CheckInLedger::find_by_id(self, &check_in.id)
            .await?
            .ok_or(DatabaseError::NoResult)?;

        if updated == 0 && stored.validated_at != check_in.validated_at {
            return Err(DatabaseError::Conflict(format!(
                "check-in {} was already validated",
                check_in.id
            )));
        }
        Ok(stored)
    }
}
