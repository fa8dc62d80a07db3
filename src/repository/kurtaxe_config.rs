//! Kurtaxe rate table repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::kurtaxe_config::{CreateKurtaxeConfigEntry, KurtaxeConfigEntry, UpdateKurtaxeConfigEntry},
};

#[derive(Clone)]
pub struct KurtaxeConfigRepository {
    pool: Pool<Postgres>,
}

impl KurtaxeConfigRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the rate table in lookup order
    pub async fn list(&self) -> AppResult<Vec<KurtaxeConfigEntry>> {
        let rows = sqlx::query_as::<_, KurtaxeConfigEntry>(
            "SELECT * FROM kurtaxe_config ORDER BY sort ASC, age_min ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get rate entry by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<KurtaxeConfigEntry> {
        sqlx::query_as::<_, KurtaxeConfigEntry>("SELECT * FROM kurtaxe_config WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::DataNotFound(format!("Kurtaxe rate {} not found", id)))
    }

    /// Create rate entry
    pub async fn create(&self, data: &CreateKurtaxeConfigEntry) -> AppResult<KurtaxeConfigEntry> {
        let row = sqlx::query_as::<_, KurtaxeConfigEntry>(
            r#"
            INSERT INTO kurtaxe_config (age_min, age_max, rate_high_season, rate_low_season, description, sort)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, (SELECT COALESCE(MAX(sort), 0) + 10 FROM kurtaxe_config)))
            RETURNING *
            "#,
        )
        .bind(data.age_min)
        .bind(data.age_max)
        .bind(data.rate_high_season)
        .bind(data.rate_low_season)
        .bind(data.description())
        .bind(data.sort)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update rate entry
    pub async fn update(&self, id: i32, data: &UpdateKurtaxeConfigEntry) -> AppResult<KurtaxeConfigEntry> {
        let mut sets = vec!["updated_at = NOW()".to_string()];
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.age_min, "age_min");
        add_field!(data.age_max, "age_max");
        add_field!(data.rate_high_season, "rate_high_season");
        add_field!(data.rate_low_season, "rate_low_season");
        add_field!(data.description, "description");
        add_field!(data.sort, "sort");

        let query = format!(
            "UPDATE kurtaxe_config SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let description = data.description();
        let mut builder = sqlx::query_as::<_, KurtaxeConfigEntry>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.age_min);
        bind_field!(data.age_max);
        bind_field!(data.rate_high_season);
        bind_field!(data.rate_low_season);
        bind_field!(description);
        bind_field!(data.sort);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::DataNotFound(format!("Kurtaxe rate {} not found", id)))
    }

    /// Delete rate entry
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM kurtaxe_config WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::DataNotFound(format!("Kurtaxe rate {} not found", id)));
        }
        Ok(())
    }
}
