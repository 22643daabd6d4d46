//! Player repository

use chrono::{DateTime, Utc};
use garden_core::BoostType;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::PLAYER_COLUMNS;
use crate::{DbError, DbPlayer, DbResult, NewPlayer, PlayerUpdate};

/// Player repository for accounts, progression and the ad-boost tracker
pub struct PlayerRepo {
    pool: PgPool,
}

impl PlayerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new player with their starting location and seed.
    ///
    /// The account row, the unlocked-location row and the unlocked-seed row
    /// are created in one transaction.
    pub async fn create(
        &self,
        new_player: &NewPlayer,
        default_location: Uuid,
        default_seed: Option<Uuid>,
    ) -> DbResult<DbPlayer> {
        let mut tx = self.pool.begin().await?;

        let player = sqlx::query_as::<_, DbPlayer>(&format!(
            r#"
            INSERT INTO players (google_id, email, name, current_location, collection_progress)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(&new_player.google_id)
        .bind(&new_player.email)
        .bind(&new_player.name)
        .bind(default_location)
        .bind(if default_seed.is_some() { 1i32 } else { 0i32 })
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if matches!(db_err.constraint(), Some("players_google_id_key") | Some("players_email_key")) {
                    return DbError::Duplicate(
                        "Player with this Google ID or email already exists".to_string(),
                    );
                }
            }
            DbError::Query(e)
        })?;

        sqlx::query("INSERT INTO player_locations (player_id, location_id) VALUES ($1, $2)")
            .bind(player.id)
            .bind(default_location)
            .execute(&mut *tx)
            .await?;

        if let Some(seed_id) = default_seed {
            sqlx::query("INSERT INTO player_seeds (player_id, seed_id) VALUES ($1, $2)")
                .bind(player.id)
                .bind(seed_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(player)
    }

    /// Find player by ID
    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<DbPlayer>> {
        let player = sqlx::query_as::<_, DbPlayer>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(player)
    }

    /// Find player by Google ID
    pub async fn find_by_google_id(&self, google_id: &str) -> DbResult<Option<DbPlayer>> {
        let player = sqlx::query_as::<_, DbPlayer>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE google_id = $1"
        ))
        .bind(google_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(player)
    }

    /// Apply a partial profile update and return the fresh row.
    pub async fn update(&self, id: Uuid, update: &PlayerUpdate) -> DbResult<DbPlayer> {
        let player = sqlx::query_as::<_, DbPlayer>(&format!(
            r#"
            UPDATE players SET
                gold = COALESCE($2, gold),
                total_earnings = COALESCE($3, total_earnings),
                total_trees_sold = COALESCE($4, total_trees_sold),
                total_clicks = COALESCE($5, total_clicks),
                current_location = COALESCE($6, current_location),
                premium_slots = COALESCE($7, premium_slots),
                has_fairy = COALESCE($8, has_fairy),
                has_no_ads = COALESCE($9, has_no_ads),
                click_power_upgrade = COALESCE($10, click_power_upgrade),
                time_reduction_upgrade = COALESCE($11, time_reduction_upgrade),
                longest_combo = COALESCE($12, longest_combo),
                rarest_tree_sold = COALESCE($13, rarest_tree_sold),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.gold)
        .bind(update.total_earnings)
        .bind(update.total_trees_sold)
        .bind(update.total_clicks)
        .bind(update.current_location)
        .bind(update.premium_slots)
        .bind(update.has_fairy)
        .bind(update.has_no_ads)
        .bind(update.click_power_upgrade)
        .bind(update.time_reduction_upgrade)
        .bind(update.longest_combo)
        .bind(update.rarest_tree_sold.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        player.ok_or_else(|| DbError::NotFound("Player not found".to_string()))
    }

    /// Stamp the last-login timestamp
    pub async fn touch_last_login(&self, id: Uuid) -> DbResult<()> {
        let result = sqlx::query("UPDATE players SET last_login = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Player not found".to_string()));
        }

        Ok(())
    }

    // =========================================================================
    // Progression sets
    // =========================================================================

    /// IDs of locations the player has unlocked
    pub async fn unlocked_location_ids(&self, player_id: Uuid) -> DbResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT location_id FROM player_locations WHERE player_id = $1",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// IDs of seeds the player has discovered
    pub async fn unlocked_seed_ids(&self, player_id: Uuid) -> DbResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT seed_id FROM player_seeds WHERE player_id = $1",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Purchase a location: deduct gold and record the unlock atomically.
    pub async fn buy_location(&self, player_id: Uuid, location_id: Uuid, price: i64) -> DbResult<DbPlayer> {
        let mut tx = self.pool.begin().await?;

        let already: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM player_locations WHERE player_id = $1 AND location_id = $2",
        )
        .bind(player_id)
        .bind(location_id)
        .fetch_optional(&mut *tx)
        .await?;

        if already.is_some() {
            return Err(DbError::Duplicate("Location already unlocked".to_string()));
        }

        let player = sqlx::query_as::<_, DbPlayer>(&format!(
            r#"
            UPDATE players SET gold = gold - $2, updated_at = NOW()
            WHERE id = $1 AND gold >= $2
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(player_id)
        .bind(price)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::InsufficientGold(format!("Need {}g to unlock this location", price)))?;

        sqlx::query("INSERT INTO player_locations (player_id, location_id) VALUES ($1, $2)")
            .bind(player_id)
            .bind(location_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            player_id = %player_id,
            location_id = %location_id,
            price = price,
            "Location purchased"
        );

        Ok(player)
    }

    /// Set the player's current location; it must already be unlocked.
    pub async fn select_location(&self, player_id: Uuid, location_id: Uuid) -> DbResult<DbPlayer> {
        let player = sqlx::query_as::<_, DbPlayer>(&format!(
            r#"
            UPDATE players SET current_location = $2, updated_at = NOW()
            WHERE id = $1
              AND EXISTS (
                SELECT 1 FROM player_locations
                WHERE player_id = $1 AND location_id = $2
              )
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(player_id)
        .bind(location_id)
        .fetch_optional(&self.pool)
        .await?;

        player.ok_or_else(|| DbError::Constraint("Location is not unlocked".to_string()))
    }

    // =========================================================================
    // Ad boosts
    // =========================================================================

    /// Zero the daily ad counter after a calendar-day rollover.
    pub async fn reset_daily_ads(&self, player_id: Uuid) -> DbResult<()> {
        sqlx::query("UPDATE players SET ad_daily_watched = 0, updated_at = NOW() WHERE id = $1")
            .bind(player_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Apply an ad-reward claim in a single write: the flat boost grant plus
    /// watch bookkeeping.
    pub async fn apply_ad_claim(
        &self,
        player_id: Uuid,
        boost: BoostType,
        now: DateTime<Utc>,
    ) -> DbResult<DbPlayer> {
        let player = match boost {
            BoostType::Time => {
                sqlx::query_as::<_, DbPlayer>(&format!(
                    r#"
                    UPDATE players SET
                        ad_time_reduction_available = $2,
                        ad_last_watched_at = $3,
                        ad_daily_watched = ad_daily_watched + 1,
                        ad_total_watched = ad_total_watched + 1,
                        updated_at = NOW()
                    WHERE id = $1
                    RETURNING {PLAYER_COLUMNS}
                    "#
                ))
                .bind(player_id)
                .bind(boost.granted_value())
                .bind(now)
                .fetch_optional(&self.pool)
                .await?
            }
            BoostType::Sell => {
                sqlx::query_as::<_, DbPlayer>(&format!(
                    r#"
                    UPDATE players SET
                        ad_sell_multiplier = $2,
                        ad_last_watched_at = $3,
                        ad_daily_watched = ad_daily_watched + 1,
                        ad_total_watched = ad_total_watched + 1,
                        updated_at = NOW()
                    WHERE id = $1
                    RETURNING {PLAYER_COLUMNS}
                    "#
                ))
                .bind(player_id)
                .bind(boost.granted_value())
                .bind(now)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        player.ok_or_else(|| DbError::NotFound("Player not found".to_string()))
    }
}
