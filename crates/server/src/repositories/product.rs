use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{CreateProduct, Product};

/// Common SELECT fields for curated-product queries
const SELECT_PRODUCT: &str = r#"
    SELECT id, created_at, barcode, imrpt_no, product_name, raw_materials
    FROM custom_products
"#;

pub struct ProductRepository;

impl ProductRepository {
    /// Find a product by its retail barcode
    pub async fn find_by_barcode(
        pool: &SqlitePool,
        barcode: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("{} WHERE barcode = $1 LIMIT 1", SELECT_PRODUCT);
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(barcode)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Find a product by its regulatory report number
    pub async fn find_by_report_no(
        pool: &SqlitePool,
        report_no: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("{} WHERE imrpt_no = $1 LIMIT 1", SELECT_PRODUCT);
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(report_no)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a curated product
    pub async fn create(pool: &SqlitePool, data: CreateProduct) -> Result<Product, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO custom_products (barcode, imrpt_no, product_name, raw_materials)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&data.barcode)
        .bind(&data.report_no)
        .bind(&data.product_name)
        .bind(&data.raw_materials)
        .fetch_one(pool)
        .await?;

        let id: i64 = sqlx::Row::get(&result, "id");
        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_PRODUCT);
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    created_at: DateTime<Utc>,
    barcode: Option<String>,
    imrpt_no: Option<String>,
    product_name: String,
    raw_materials: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            barcode: row.barcode,
            report_no: row.imrpt_no,
            product_name: row.product_name,
            raw_materials: row.raw_materials,
        }
    }
}
