//! 시드 데이터 입력 및 삭제
// region:    --- Imports
use crate::auction::model::NewAuctionItem;
use crate::error::StoreError;
use crate::store::ItemStore;
use std::path::Path;
use tracing::info;

// endregion: --- Imports

/// 기본 시드 데이터
pub const BUNDLED_SEED_DATA: &str = include_str!("../data/sample-data.json");

/// 시드 데이터 파싱 및 검증
pub fn parse_seed_data(json: &str) -> Result<Vec<NewAuctionItem>, StoreError> {
    let items: Vec<NewAuctionItem> = serde_json::from_str(json)?;
    for (index, item) in items.iter().enumerate() {
        item.validate(index)?;
    }
    Ok(items)
}

/// 시드 데이터 로드 (경로가 없으면 기본 데이터 사용)
pub fn load_seed_data(path: Option<&Path>) -> Result<Vec<NewAuctionItem>, StoreError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| StoreError::SeedRead {
                path: path.to_path_buf(),
                source,
            })?;
            parse_seed_data(&json)
        }
        None => parse_seed_data(BUNDLED_SEED_DATA),
    }
}

/// 기존 데이터 삭제 후 시드 데이터 입력
pub async fn seed(store: &dyn ItemStore, items: &[NewAuctionItem]) -> Result<u64, StoreError> {
    info!("{:<12} --> 시드 데이터 입력 시작: {} 건", "Seed", items.len());
    let inserted = store.replace_all(items).await?;
    info!("{:<12} --> 시드 데이터 입력 완료: {} 건", "Seed", inserted);
    Ok(inserted)
}

/// 전체 데이터 삭제
pub async fn clear(store: &dyn ItemStore) -> Result<u64, StoreError> {
    let deleted = store.clear().await?;
    info!("{:<12} --> 전체 데이터 삭제 완료: {} 건", "Seed", deleted);
    Ok(deleted)
}
