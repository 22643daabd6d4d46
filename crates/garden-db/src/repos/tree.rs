//! Planted-tree repository.
//!
//! Every game mutation that touches both a tree and its owner runs inside a
//! single transaction, so a plant, click or sale either fully applies or
//! leaves no trace.

use chrono::{DateTime, Utc};
use garden_core::TreeQuality;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::PLAYER_COLUMNS;
use crate::{DbError, DbPlantedTree, DbPlayer, DbResult};

const TREE_COLUMNS: &str = r#"
    id, player_id, slot_index, seed_id, quality, start_time, end_time,
    time_reduced, created_at, updated_at
"#;

/// Planted-tree repository
pub struct TreeRepo {
    pool: PgPool,
}

impl TreeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Plant a tree: insert the record and deduct the seed price as one
    /// atomic unit.
    ///
    /// The gold deduction is guarded (`gold >= price`), so a concurrent
    /// spend cannot drive the balance negative; the `(player, slot)` UNIQUE
    /// index turns a double-plant race into a clean occupied error.
    pub async fn plant(
        &self,
        player_id: Uuid,
        seed_id: Uuid,
        slot_index: i16,
        quality: TreeQuality,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        price: i64,
    ) -> DbResult<(DbPlantedTree, i64)> {
        let mut tx = self.pool.begin().await?;

        let new_gold: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE players SET gold = gold - $2, updated_at = NOW()
            WHERE id = $1 AND gold >= $2
            RETURNING gold
            "#,
        )
        .bind(player_id)
        .bind(price)
        .fetch_optional(&mut *tx)
        .await?;

        let new_gold = new_gold.ok_or_else(|| {
            DbError::InsufficientGold(format!("Need {}g to plant this seed", price))
        })?;

        let tree = sqlx::query_as::<_, DbPlantedTree>(&format!(
            r#"
            INSERT INTO planted_trees (player_id, slot_index, seed_id, quality, start_time, end_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {TREE_COLUMNS}
            "#
        ))
        .bind(player_id)
        .bind(slot_index)
        .bind(seed_id)
        .bind(quality.as_str())
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.constraint() == Some("planted_trees_player_slot_key") {
                    return DbError::Duplicate(format!(
                        "Slot {} is already occupied. Harvest or sell the tree first.",
                        slot_index
                    ));
                }
            }
            DbError::Query(e)
        })?;

        tx.commit().await?;

        Ok((tree, new_gold))
    }

    /// Find tree by ID
    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<DbPlantedTree>> {
        let tree = sqlx::query_as::<_, DbPlantedTree>(&format!(
            "SELECT {TREE_COLUMNS} FROM planted_trees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tree)
    }

    /// All trees for a player, ordered by slot
    pub async fn list_by_player(&self, player_id: Uuid) -> DbResult<Vec<DbPlantedTree>> {
        let trees = sqlx::query_as::<_, DbPlantedTree>(&format!(
            "SELECT {TREE_COLUMNS} FROM planted_trees WHERE player_id = $1 ORDER BY slot_index"
        ))
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trees)
    }

    /// Apply a click batch: pull the end time earlier and credit the raw
    /// click count to the owner, atomically.
    ///
    /// Returns the updated tree and the owner's new lifetime click total.
    pub async fn apply_click(
        &self,
        tree_id: Uuid,
        player_id: Uuid,
        applied_reduction: i64,
        clicks: i64,
    ) -> DbResult<(DbPlantedTree, i64)> {
        let mut tx = self.pool.begin().await?;

        let tree = sqlx::query_as::<_, DbPlantedTree>(&format!(
            r#"
            UPDATE planted_trees SET
                end_time = end_time - $2 * INTERVAL '1 second',
                time_reduced = time_reduced + $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TREE_COLUMNS}
            "#
        ))
        .bind(tree_id)
        .bind(applied_reduction)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::NotFound("Planted tree not found".to_string()))?;

        let total_clicks: i64 = sqlx::query_scalar(
            r#"
            UPDATE players SET total_clicks = total_clicks + $2, updated_at = NOW()
            WHERE id = $1
            RETURNING total_clicks
            "#,
        )
        .bind(player_id)
        .bind(clicks)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((tree, total_clicks))
    }

    /// Sell a matured tree: pay out, fold in the stat bumps, the rarest-sold
    /// ratchet and the one-shot multiplier reset, then hard-delete the tree.
    ///
    /// One transaction, one player UPDATE. A tree that vanished between read
    /// and delete rolls everything back and reports not-found.
    pub async fn sell(
        &self,
        tree_id: Uuid,
        player_id: Uuid,
        payout: i64,
        rarest_sold: Option<&str>,
        reset_sell_multiplier: bool,
    ) -> DbResult<DbPlayer> {
        let mut tx = self.pool.begin().await?;

        let player = sqlx::query_as::<_, DbPlayer>(&format!(
            r#"
            UPDATE players SET
                gold = gold + $2,
                total_earnings = total_earnings + $2,
                total_trees_sold = total_trees_sold + 1,
                rarest_tree_sold = COALESCE($3, rarest_tree_sold),
                ad_sell_multiplier = CASE WHEN $4 THEN 1 ELSE ad_sell_multiplier END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(player_id)
        .bind(payout)
        .bind(rarest_sold)
        .bind(reset_sell_multiplier)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::NotFound("Player not found".to_string()))?;

        let deleted = sqlx::query("DELETE FROM planted_trees WHERE id = $1 AND player_id = $2")
            .bind(tree_id)
            .bind(player_id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(DbError::NotFound("Planted tree not found".to_string()));
        }

        tx.commit().await?;

        Ok(player)
    }
}
