//! Gym directory on libSQL.

use async_trait::async_trait;
use chrono::Utc;

use gympass_core::entities::{Gym, NewGym};
use gympass_core::geo::{Coordinate, EARTH_RADIUS_KM};
use gympass_core::ids::PREFIX_GYM;

use crate::GymDb;
use crate::error::DatabaseError;
use crate::helpers::{escape_like, format_datetime, get_opt_string, page_bounds, parse_datetime};
use crate::ports::GymDirectory;

const SELECT_COLS: &str = "id, title, description, phone, latitude, longitude, created_at";

/// Kilometers per degree of latitude on the distance model's sphere.
const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

fn row_to_gym(row: &libsql::Row) -> Result<Gym, DatabaseError> {
    Ok(Gym {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        phone: get_opt_string(row, 3)?,
        latitude: row.get(4)?,
        longitude: row.get(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl GymDb {
    async fn query_gyms(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams + Send,
    ) -> Result<Vec<Gym>, DatabaseError> {
        let mut rows = self.conn().query(sql, params).await?;
        let mut gyms = Vec::new();
        while let Some(row) = rows.next().await? {
            gyms.push(row_to_gym(&row)?);
        }
        Ok(gyms)
    }
}

#[async_trait]
impl GymDirectory for GymDb {
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM gyms WHERE id = ?1"), [id])
            .await?;
        rows.next().await?.map(|row| row_to_gym(&row)).transpose()
    }

    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>, DatabaseError> {
        let (limit, offset) = page_bounds(page);
        self.query_gyms(
            &format!(
                "SELECT {SELECT_COLS} FROM gyms
                 WHERE title LIKE '%' || ?1 || '%' ESCAPE '\\'
                 ORDER BY rowid LIMIT ?2 OFFSET ?3"
            ),
            libsql::params![escape_like(query), limit, offset],
        )
        .await
    }

    async fn find_many_nearby(
        &self,
        origin: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Gym>, DatabaseError> {
        // Narrow to the latitude band in SQL, then apply the exact distance.
        let band = radius_km / KM_PER_DEGREE;
        let candidates = self
            .query_gyms(
                &format!("SELECT {SELECT_COLS} FROM gyms WHERE latitude BETWEEN ?1 AND ?2"),
                libsql::params![origin.latitude - band, origin.latitude + band],
            )
            .await?;

        let mut nearby: Vec<(f64, Gym)> = candidates
            .into_iter()
            .map(|gym| (origin.distance_to(gym.coordinate()), gym))
            .filter(|(distance, _)| *distance <= radius_km)
            .collect();
        nearby.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(nearby.into_iter().map(|(_, gym)| gym).collect())
    }

    async fn create(&self, gym: NewGym) -> Result<Gym, DatabaseError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_GYM).await?;

        self.conn()
            .execute(
                &format!("INSERT INTO gyms ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    id.as_str(),
                    gym.title.as_str(),
                    gym.description.as_deref(),
                    gym.phone.as_deref(),
                    gym.latitude,
                    gym.longitude,
                    format_datetime(&now)
                ],
            )
            .await?;

        tracing::info!(gym_id = %id, title = %gym.title, "registered gym");

        Ok(Gym {
            id,
            title: gym.title,
            description: gym.description,
            phone: gym.phone,
            latitude: gym.latitude,
            longitude: gym.longitude,
            created_at: now,
        })
    }
}
