use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{CreateProductRequest, ProductRequest};

const SELECT_REQUEST: &str = r#"
    SELECT id, created_at, product_name, product_code, barcode
    FROM product_requests
"#;

pub struct ProductRequestRepository;

impl ProductRequestRepository {
    /// Record a user product request
    pub async fn create(
        pool: &SqlitePool,
        data: CreateProductRequest,
    ) -> Result<ProductRequest, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO product_requests (product_name, product_code, barcode)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&data.product_name)
        .bind(&data.product_code)
        .bind(&data.barcode)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Most recent requests first
    pub async fn get_recent(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<ProductRequest>, sqlx::Error> {
        let query = format!("{} ORDER BY created_at DESC LIMIT $1", SELECT_REQUEST);
        let rows = sqlx::query_as::<_, ProductRequestRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ProductRequest>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_REQUEST);
        let row = sqlx::query_as::<_, ProductRequestRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct ProductRequestRow {
    id: i64,
    created_at: DateTime<Utc>,
    product_name: String,
    product_code: Option<String>,
    barcode: Option<String>,
}

impl From<ProductRequestRow> for ProductRequest {
    fn from(row: ProductRequestRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            product_name: row.product_name,
            product_code: row.product_code,
            barcode: row.barcode,
        }
    }
}
