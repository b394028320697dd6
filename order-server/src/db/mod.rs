//! Database access layer
//!
//! Handlers never see a pool directly: they go through [`Store`], which the
//! server backs with [`PgStore`] and tests back with an in-memory fake.

pub mod catalog;
pub mod orders;
pub mod requests;
pub mod tables;

use async_trait::async_trait;
use shared::models::{DiningTable, FoodItemRow, NewOrder, NewServiceRequest, Order, TableLookup};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;
use crate::error::{BoxError, ServiceResult};

/// Data-access capability shared by all handlers.
///
/// Every method issues a single statement; none of them retry.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Published menu entries ordered by id, optionally one category only
    async fn list_food_items(&self, item_type: Option<&str>) -> ServiceResult<Vec<FoodItemRow>>;

    async fn find_table(&self, lookup: &TableLookup) -> ServiceResult<Option<DiningTable>>;

    /// Persist a new order with status `waiting`, returning its id
    async fn insert_order(&self, order: &NewOrder) -> ServiceResult<i64>;

    async fn find_order(&self, order_id: i64) -> ServiceResult<Option<Order>>;

    /// Returns false when the id matches no order
    async fn update_order_status(&self, order_id: i64, status: &str) -> ServiceResult<bool>;

    async fn insert_service_request(&self, request: &NewServiceRequest) -> ServiceResult<()>;
}

/// PostgreSQL-backed [`Store`]
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool described by `config`, applying bundled migrations if asked
    pub async fn connect(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_millis(config.db_acquire_timeout_ms))
            .connect(&config.database_url)
            .await?;

        if config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_food_items(&self, item_type: Option<&str>) -> ServiceResult<Vec<FoodItemRow>> {
        Ok(catalog::list_published(&self.pool, item_type).await?)
    }

    async fn find_table(&self, lookup: &TableLookup) -> ServiceResult<Option<DiningTable>> {
        Ok(tables::find_table(&self.pool, lookup).await?)
    }

    async fn insert_order(&self, order: &NewOrder) -> ServiceResult<i64> {
        orders::insert_order(&self.pool, order).await
    }

    async fn find_order(&self, order_id: i64) -> ServiceResult<Option<Order>> {
        orders::find_order(&self.pool, order_id).await
    }

    async fn update_order_status(&self, order_id: i64, status: &str) -> ServiceResult<bool> {
        orders::update_status(&self.pool, order_id, status).await
    }

    async fn insert_service_request(&self, request: &NewServiceRequest) -> ServiceResult<()> {
        Ok(requests::insert_request(&self.pool, request).await?)
    }
}
