//! Time-boxed validation of pending check-ins.

use chrono::{DateTime, Utc};

use gympass_core::entities::CheckIn;
use gympass_db::error::DatabaseError;

use crate::error::ServiceError;
use crate::service::GymPassService;

impl GymPassService {
    /// Mark a pending check-in as validated at `now`.
    ///
    /// The window is measured from the check-in's `created_at` and is
    /// inclusive at its upper bound.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if no check-in has this id.
    /// - `AlreadyValidated` if it was validated before, including by a
    ///   concurrent call.
    /// - `LateCheckInValidation` if the window has elapsed; the record is
    ///   left pending.
    /// - `Storage` for repository failures.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn validate_check_in(
        &self,
        check_in_id: &str,
        now: DateTime<Utc>,
    ) -> Result<CheckIn, ServiceError> {
        let mut check_in = self
            .check_ins()
            .find_by_id(check_in_id)
            .await?
            .ok_or_else(|| ServiceError::ResourceNotFound {
                entity: "check-in",
                id: check_in_id.to_string(),
            })?;

        if check_in.is_validated() {
            return Err(ServiceError::AlreadyValidated {
                check_in_id: check_in.id,
            });
        }

        if !self
            .policy()
            .within_validation_window(check_in.created_at, now)
        {
            tracing::debug!(created_at = %check_in.created_at, "validation rejected: window elapsed");
            return Err(ServiceError::LateCheckInValidation {
                check_in_id: check_in.id,
                window_minutes: self.policy().validation_window.num_minutes(),
            });
        }

        check_in.validated_at = Some(now);
        let saved = self
            .check_ins()
            .save(&check_in)
            .await
            .map_err(|e| match e {
                DatabaseError::Conflict(_) => ServiceError::AlreadyValidated {
                    check_in_id: check_in.id.clone(),
                },
                DatabaseError::NoResult => ServiceError::ResourceNotFound {
                    entity: "check-in",
                    id: check_in.id.clone(),
                },
                other => ServiceError::Storage(other),
            })?;

        tracing::info!(check_in_id = %saved.id, "check-in validated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::test_support::{AT_GYM, GYM_ID, USER_ID, at, seeded_service};

    use super::*;

    #[rstest]
    #[case::immediately(0)]
    #[case::nineteen_minutes(19)]
    #[case::at_the_limit(20)]
    #[tokio::test]
    async fn validates_within_window(#[case] after_minutes: i64) {
        let (svc, ledger) = seeded_service().await;
        let created_at = at(8, 18, 13, 40);
        let check_in = svc
            .check_in(USER_ID, GYM_ID, AT_GYM, created_at)
            .await
            .unwrap();

        let now = created_at + TimeDelta::minutes(after_minutes);
        let validated = svc.validate_check_in(&check_in.id, now).await.unwrap();

        assert_eq!(validated.validated_at, Some(now));
        assert_eq!(validated.created_at, created_at);
        assert_eq!(ledger.items().await, vec![validated]);
    }

    #[rstest]
    #[case::one_second_late(TimeDelta::minutes(20) + TimeDelta::seconds(1))]
    #[case::twenty_one_minutes(TimeDelta::minutes(21))]
    #[case::next_day(TimeDelta::days(1))]
    #[tokio::test]
    async fn rejects_late_validation(#[case] elapsed: TimeDelta) {
        let (svc, ledger) = seeded_service().await;
        let created_at = at(8, 18, 13, 40);
        let check_in = svc
            .check_in(USER_ID, GYM_ID, AT_GYM, created_at)
            .await
            .unwrap();

        let err = svc
            .validate_check_in(&check_in.id, created_at + elapsed)
            .await
            .unwrap_err();

        assert!(
            matches!(err, ServiceError::LateCheckInValidation { window_minutes: 20, .. }),
            "{err}"
        );
        assert_eq!(ledger.items().await[0].validated_at, None);
    }

    #[tokio::test]
    async fn second_validation_is_rejected() {
        let (svc, ledger) = seeded_service().await;
        let created_at = at(8, 18, 13, 40);
        let check_in = svc
            .check_in(USER_ID, GYM_ID, AT_GYM, created_at)
            .await
            .unwrap();
        let first_at = created_at + TimeDelta::minutes(5);
        svc.validate_check_in(&check_in.id, first_at).await.unwrap();

        let err = svc
            .validate_check_in(&check_in.id, created_at + TimeDelta::minutes(6))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::AlreadyValidated { .. }), "{err}");
        assert_eq!(ledger.items().await[0].validated_at, Some(first_at));
    }

    #[tokio::test]
    async fn unknown_check_in_is_not_found() {
        let (svc, _) = seeded_service().await;
        let err = svc
            .validate_check_in("chk-404", at(8, 18, 13, 40))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::ResourceNotFound { entity: "check-in", ref id } if id == "chk-404"),
            "{err}"
        );
    }
}
