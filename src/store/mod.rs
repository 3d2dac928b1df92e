// region:    --- Imports
use crate::auction::model::{AuctionItem, NewAuctionItem};
use crate::error::StoreError;
use crate::query::Filter;
use async_trait::async_trait;

// endregion: --- Imports

// region:    --- Modules
mod memory;
mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PostgresItemStore;

// endregion: --- Modules

// region:    --- Item Store Trait
/// 경매 상품 저장소 트레이트
///
/// 조회 결과는 id 오름차순(입력 순서)으로 반환한다.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// 필터와 일치하는 상품 조회
    async fn find(&self, filter: &Filter) -> Result<Vec<AuctionItem>, StoreError>;

    /// 전체 상품 삭제, 삭제된 건수 반환
    async fn clear(&self) -> Result<u64, StoreError>;

    /// 전체 삭제 후 일괄 입력 (하나의 단위로 처리)
    async fn replace_all(&self, items: &[NewAuctionItem]) -> Result<u64, StoreError>;
}
// endregion: --- Item Store Trait
