//! Catalog repository: seed and location reference data.

use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::{CatalogLocation, CatalogSeed, LOCATIONS, SEEDS};
use crate::{DbLocation, DbResult, DbSeed};

/// Outcome of one catalog sync pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncSummary {
    pub inserted: u64,
    pub updated: u64,
    pub deleted: u64,
}

/// Catalog repository — read-only at runtime except for the sync step
pub struct CatalogRepo {
    pool: PgPool,
}

impl CatalogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Seeds
    // =========================================================================

    /// All seeds, cheapest first
    pub async fn list_seeds(&self) -> DbResult<Vec<DbSeed>> {
        let seeds = sqlx::query_as::<_, DbSeed>(
            "SELECT * FROM seeds ORDER BY base_price",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(seeds)
    }

    pub async fn find_seed(&self, id: Uuid) -> DbResult<Option<DbSeed>> {
        let seed = sqlx::query_as::<_, DbSeed>("SELECT * FROM seeds WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(seed)
    }

    pub async fn find_seed_by_code(&self, code: &str) -> DbResult<Option<DbSeed>> {
        let seed = sqlx::query_as::<_, DbSeed>("SELECT * FROM seeds WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(seed)
    }

    // =========================================================================
    // Locations
    // =========================================================================

    /// All locations in display/unlock order
    pub async fn list_locations(&self) -> DbResult<Vec<DbLocation>> {
        let locations = sqlx::query_as::<_, DbLocation>(
            "SELECT * FROM locations ORDER BY sort_order",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    pub async fn find_location(&self, id: Uuid) -> DbResult<Option<DbLocation>> {
        let location = sqlx::query_as::<_, DbLocation>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(location)
    }

    pub async fn find_location_by_code(&self, code: &str) -> DbResult<Option<DbLocation>> {
        let location = sqlx::query_as::<_, DbLocation>("SELECT * FROM locations WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(location)
    }

    // =========================================================================
    // Sync
    // =========================================================================

    /// Sync the built-in datasets into the database: upsert by code, then
    /// delete rows whose code is no longer listed.
    pub async fn sync(&self) -> DbResult<(SyncSummary, SyncSummary)> {
        let seeds = self.sync_seeds(SEEDS).await?;
        let locations = self.sync_locations(LOCATIONS).await?;

        tracing::info!(
            seeds_inserted = seeds.inserted,
            seeds_updated = seeds.updated,
            seeds_deleted = seeds.deleted,
            locations_inserted = locations.inserted,
            locations_updated = locations.updated,
            locations_deleted = locations.deleted,
            "Catalog sync complete"
        );

        Ok((seeds, locations))
    }

    async fn sync_seeds(&self, dataset: &[CatalogSeed]) -> DbResult<SyncSummary> {
        let mut summary = SyncSummary::default();

        for seed in dataset {
            let updated = sqlx::query(
                r#"
                UPDATE seeds SET
                    name = $2, base_price = $3, base_sell_price = $4,
                    base_grow_time = $5, unlock_kind = $6, unlock_value = $7,
                    icon = $8, description = $9, is_event = $10
                WHERE code = $1
                "#,
            )
            .bind(seed.code)
            .bind(seed.name)
            .bind(seed.base_price)
            .bind(seed.base_sell_price)
            .bind(seed.base_grow_time)
            .bind(seed.unlock_kind)
            .bind(seed.unlock_value)
            .bind(seed.icon)
            .bind(seed.description)
            .bind(seed.is_event)
            .execute(&self.pool)
            .await?;

            if updated.rows_affected() > 0 {
                summary.updated += 1;
            } else {
                sqlx::query(
                    r#"
                    INSERT INTO seeds
                        (code, name, base_price, base_sell_price, base_grow_time,
                         unlock_kind, unlock_value, icon, description, is_event)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    "#,
                )
                .bind(seed.code)
                .bind(seed.name)
                .bind(seed.base_price)
                .bind(seed.base_sell_price)
                .bind(seed.base_grow_time)
                .bind(seed.unlock_kind)
                .bind(seed.unlock_value)
                .bind(seed.icon)
                .bind(seed.description)
                .bind(seed.is_event)
                .execute(&self.pool)
                .await?;
                summary.inserted += 1;
            }
        }

        let codes: Vec<String> = dataset.iter().map(|s| s.code.to_string()).collect();
        let deleted = sqlx::query("DELETE FROM seeds WHERE code <> ALL($1)")
            .bind(&codes)
            .execute(&self.pool)
            .await?;
        summary.deleted = deleted.rows_affected();

        Ok(summary)
    }

    async fn sync_locations(&self, dataset: &[CatalogLocation]) -> DbResult<SyncSummary> {
        let mut summary = SyncSummary::default();

        for location in dataset {
            let updated = sqlx::query(
                r#"
                UPDATE locations SET
                    name = $2, price = $3, sort_order = $4, bonus_kind = $5,
                    bonus_value = $6, bonus_multiplier = $7, icon = $8,
                    description = $9, location_image_url = $10, pot_image_url = $11
                WHERE code = $1
                "#,
            )
            .bind(location.code)
            .bind(location.name)
            .bind(location.price)
            .bind(location.sort_order)
            .bind(location.bonus_kind)
            .bind(location.bonus_value)
            .bind(location.bonus_multiplier)
            .bind(location.icon)
            .bind(location.description)
            .bind(location.location_image_url)
            .bind(location.pot_image_url)
            .execute(&self.pool)
            .await?;

            if updated.rows_affected() > 0 {
                summary.updated += 1;
            } else {
                sqlx::query(
                    r#"
                    INSERT INTO locations
                        (code, name, price, sort_order, bonus_kind, bonus_value,
                         bonus_multiplier, icon, description, location_image_url, pot_image_url)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    "#,
                )
                .bind(location.code)
                .bind(location.name)
                .bind(location.price)
                .bind(location.sort_order)
                .bind(location.bonus_kind)
                .bind(location.bonus_value)
                .bind(location.bonus_multiplier)
                .bind(location.icon)
                .bind(location.description)
                .bind(location.location_image_url)
                .bind(location.pot_image_url)
                .execute(&self.pool)
                .await?;
                summary.inserted += 1;
            }
        }

        let codes: Vec<String> = dataset.iter().map(|l| l.code.to_string()).collect();
        let deleted = sqlx::query("DELETE FROM locations WHERE code <> ALL($1)")
            .bind(&codes)
            .execute(&self.pool)
            .await?;
        summary.deleted = deleted.rows_affected();

        Ok(summary)
    }
}
