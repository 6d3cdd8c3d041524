//! Check-in engine: proximity gate, one-per-day gate, then record creation.

use chrono::{DateTime, Utc};

use gympass_core::entities::{CheckIn, NewCheckIn};
use gympass_core::geo::Coordinate;
use gympass_db::error::DatabaseError;

use crate::error::ServiceError;
use crate::service::GymPassService;

impl GymPassService {
    /// Check `user_id` in at `gym_id` from `user_location` at `now`.
    ///
    /// Writes exactly one record on success and nothing on any failure.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `user_location` is not a finite coordinate.
    /// - `ResourceNotFound` if the gym does not exist.
    /// - `MaxDistance` if the user is farther than the policy radius.
    /// - `MaxNumberOfCheckIns` if the user already checked in that calendar
    ///   day, including when a concurrent call won the race to the ledger.
    /// - `Storage` for repository failures.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn check_in(
        &self,
        user_id: &str,
        gym_id: &str,
        user_location: Coordinate,
        now: DateTime<Utc>,
    ) -> Result<CheckIn, ServiceError> {
        if !user_location.is_finite() {
            return Err(ServiceError::InvalidInput(
                "user location must be a finite coordinate".into(),
            ));
        }

        let gym = self
            .gyms()
            .find_by_id(gym_id)
            .await?
            .ok_or_else(|| ServiceError::ResourceNotFound {
                entity: "gym",
                id: gym_id.to_string(),
            })?;

        let distance_km = user_location.distance_to(gym.coordinate());
        let max_distance_km = self.policy().max_distance_km;
        if distance_km > max_distance_km {
            tracing::debug!(distance_km, max_distance_km, "check-in rejected: too far");
            return Err(ServiceError::MaxDistance {
                gym_id: gym.id,
                distance_km,
                max_distance_km,
            });
        }

        let day = self.policy().calendar_day(now);
        if self
            .check_ins()
            .find_by_user_on_date(user_id, day)
            .await?
            .is_some()
        {
            tracing::debug!(%day, "check-in rejected: already checked in");
            return Err(ServiceError::MaxNumberOfCheckIns {
                user_id: user_id.to_string(),
                day,
            });
        }

        let created = self
            .check_ins()
            .create(NewCheckIn {
                user_id: user_id.to_string(),
                gym_id: gym.id,
                check_in_day: day,
                created_at: now,
            })
            .await
            .map_err(|e| match e {
                DatabaseError::Conflict(_) => ServiceError::MaxNumberOfCheckIns {
                    user_id: user_id.to_string(),
                    day,
                },
                other => ServiceError::Storage(other),
            })?;

        tracing::info!(check_in_id = %created.id, %day, "check-in recorded");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;

    use crate::test_support::{
        AT_GYM, DISTANT_GYM_ID, GYM_ID, TWENTY_KM_AWAY, USER_ID, at, seeded_service,
    };

    use super::*;

    #[tokio::test]
    async fn checks_in_at_the_gym() {
        let (svc, ledger) = seeded_service().await;
        let now = at(7, 31, 8, 0);

        let check_in = svc.check_in(USER_ID, GYM_ID, AT_GYM, now).await.unwrap();

        assert!(check_in.id.starts_with("chk-"));
        assert_eq!(check_in.user_id, USER_ID);
        assert_eq!(check_in.gym_id, GYM_ID);
        assert_eq!(check_in.created_at, now);
        assert_eq!(check_in.validated_at, None);
        assert_eq!(ledger.items().await, vec![check_in]);
    }

    #[tokio::test]
    async fn rejects_second_check_in_same_day() {
        let (svc, ledger) = seeded_service().await;
        let first = svc
            .check_in(USER_ID, GYM_ID, AT_GYM, at(7, 31, 8, 0))
            .await
            .unwrap();

        let err = svc
            .check_in(USER_ID, GYM_ID, AT_GYM, at(7, 31, 21, 30))
            .await
            .unwrap_err();

        assert!(
            matches!(err, ServiceError::MaxNumberOfCheckIns { ref user_id, .. } if user_id == USER_ID),
            "{err}"
        );
        assert_eq!(ledger.items().await, vec![first]);
    }

    #[tokio::test]
    async fn allows_check_ins_on_different_days() {
        let (svc, ledger) = seeded_service().await;
        let first = svc
            .check_in(USER_ID, GYM_ID, AT_GYM, at(8, 18, 8, 0))
            .await
            .unwrap();
        let second = svc
            .check_in(USER_ID, GYM_ID, AT_GYM, at(8, 19, 8, 0))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(ledger.items().await.len(), 2);
    }

    #[tokio::test]
    async fn day_boundary_is_calendar_not_rolling() {
        let (svc, _) = seeded_service().await;
        let late = at(8, 18, 23, 59);
        svc.check_in(USER_ID, GYM_ID, AT_GYM, late).await.unwrap();

        // Two minutes later is a new calendar day even though < 24h passed.
        let after_midnight = late + TimeDelta::minutes(2);
        assert!(
            svc.check_in(USER_ID, GYM_ID, AT_GYM, after_midnight)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn other_users_are_independent() {
        let (svc, _) = seeded_service().await;
        let now = at(8, 18, 8, 0);
        svc.check_in(USER_ID, GYM_ID, AT_GYM, now).await.unwrap();
        assert!(svc.check_in("user-02", GYM_ID, AT_GYM, now).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_distant_gym_without_writing() {
        let (svc, ledger) = seeded_service().await;

        let err = svc
            .check_in(USER_ID, DISTANT_GYM_ID, AT_GYM, at(8, 18, 8, 0))
            .await
            .unwrap_err();

        match err {
            ServiceError::MaxDistance {
                gym_id,
                distance_km,
                max_distance_km,
            } => {
                assert_eq!(gym_id, DISTANT_GYM_ID);
                assert!(distance_km > 20.0, "{distance_km}");
                assert!((max_distance_km - 0.1).abs() < f64::EPSILON);
            }
            other => panic!("expected MaxDistance, got {other}"),
        }
        assert!(ledger.items().await.is_empty());
    }

    #[tokio::test]
    async fn rejects_user_twenty_km_from_gym() {
        let (svc, ledger) = seeded_service().await;
        let err = svc
            .check_in(USER_ID, GYM_ID, TWENTY_KM_AWAY, at(8, 18, 8, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MaxDistance { .. }), "{err}");
        assert!(ledger.items().await.is_empty());
    }

    #[tokio::test]
    async fn accepts_user_just_inside_radius() {
        let (svc, _) = seeded_service().await;
        // ~89 m north of the gym.
        let nearby = Coordinate::new(AT_GYM.latitude + 0.0008, AT_GYM.longitude);
        assert!(
            svc.check_in(USER_ID, GYM_ID, nearby, at(8, 18, 8, 0))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn rejects_user_just_outside_radius() {
        let (svc, _) = seeded_service().await;
        // ~111 m north of the gym.
        let outside = Coordinate::new(AT_GYM.latitude + 0.001, AT_GYM.longitude);
        let err = svc
            .check_in(USER_ID, GYM_ID, outside, at(8, 18, 8, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MaxDistance { .. }), "{err}");
    }

    #[tokio::test]
    async fn unknown_gym_is_not_found() {
        let (svc, ledger) = seeded_service().await;
        let err = svc
            .check_in(USER_ID, "gym-404", AT_GYM, at(8, 18, 8, 0))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::ResourceNotFound { entity: "gym", ref id } if id == "gym-404"),
            "{err}"
        );
        assert!(ledger.items().await.is_empty());
    }

    #[tokio::test]
    async fn non_finite_location_is_invalid_input() {
        let (svc, ledger) = seeded_service().await;
        let err = svc
            .check_in(USER_ID, GYM_ID, Coordinate::new(f64::NAN, 0.0), at(8, 18, 8, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)), "{err}");
        assert!(ledger.items().await.is_empty());
    }

    #[tokio::test]
    async fn distance_gate_runs_before_duplicate_gate() {
        let (svc, _) = seeded_service().await;
        let now = at(8, 18, 8, 0);
        svc.check_in(USER_ID, GYM_ID, AT_GYM, now).await.unwrap();

        let err = svc
            .check_in(USER_ID, DISTANT_GYM_ID, AT_GYM, now)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MaxDistance { .. }), "{err}");
    }
}
