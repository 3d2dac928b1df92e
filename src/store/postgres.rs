// region:    --- Imports
use super::ItemStore;
use crate::auction::model::{AuctionItem, NewAuctionItem};
use crate::database::DatabaseManager;
use crate::error::StoreError;
use crate::query::{queries, Filter};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Postgres, QueryBuilder, Transaction};
use std::sync::Arc;
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Postgres Item Store
/// PostgreSQL 경매 상품 저장소
pub struct PostgresItemStore {
    db_manager: Arc<DatabaseManager>,
    table: String,
}

impl PostgresItemStore {
    /// `table` 은 검증된 SQL 식별자여야 한다 (`config::is_valid_identifier`)
    pub fn new(db_manager: Arc<DatabaseManager>, table: impl Into<String>) -> Self {
        Self {
            db_manager,
            table: table.into(),
        }
    }
}

#[async_trait]
impl ItemStore for PostgresItemStore {
    async fn find(&self, filter: &Filter) -> Result<Vec<AuctionItem>, StoreError> {
        debug!("{:<12} --> 경매 상품 조회 filter: {:?}", "Query", filter);
        let mut builder = QueryBuilder::<Postgres>::new(queries::for_table(
            queries::SELECT_ITEMS,
            &self.table,
        ));
        queries::push_where(&mut builder, filter);
        builder.push(queries::ORDER_BY_ID);

        let items = builder
            .build_query_as::<AuctionItem>()
            .fetch_all(self.db_manager.pool())
            .await?;
        Ok(items)
    }

    async fn clear(&self) -> Result<u64, StoreError> {
        info!("{:<12} --> 경매 상품 전체 삭제: {}", "Store", self.table);
        let result = sqlx::query(&queries::for_table(queries::DELETE_ALL_ITEMS, &self.table))
            .execute(self.db_manager.pool())
            .await?;
        Ok(result.rows_affected())
    }

    async fn replace_all(&self, items: &[NewAuctionItem]) -> Result<u64, StoreError> {
        info!(
            "{:<12} --> 경매 상품 교체: {} 건 -> {}",
            "Store",
            items.len(),
            self.table
        );
        let table = self.table.clone();
        let items = items.to_vec();
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    let deleted =
                        sqlx::query(&queries::for_table(queries::DELETE_ALL_ITEMS, &table))
                            .execute(&mut **tx)
                            .await?
                            .rows_affected();
                    debug!("{:<12} --> 기존 상품 삭제: {} 건", "Store", deleted);
                    insert_items(tx, &table, &items).await
                })
            })
            .await
    }
}

/// 트랜잭션 안에서 상품 일괄 입력
async fn insert_items(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    items: &[NewAuctionItem],
) -> Result<u64, StoreError> {
    if items.is_empty() {
        return Ok(0);
    }
    let now = Utc::now();
    let mut builder =
        QueryBuilder::<Postgres>::new(queries::for_table(queries::INSERT_ITEMS, table));
    builder.push_values(items, |mut row, item| {
        row.push_bind(item.title.clone())
            .push_bind(item.description.clone())
            .push_bind(item.start_price)
            .push_bind(item.reserve_price)
            .push_bind(item.created_at.unwrap_or(now))
            .push_bind(item.end_date);
    });
    let result = builder.build().execute(&mut **tx).await?;
    Ok(result.rows_affected())
}
// endregion: --- Postgres Item Store
