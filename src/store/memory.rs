// region:    --- Imports
use super::ItemStore;
use crate::auction::model::{AuctionItem, NewAuctionItem};
use crate::error::StoreError;
use crate::query::Filter;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

// endregion: --- Imports

// region:    --- Memory Item Store
/// 메모리 기반 경매 상품 저장소
#[derive(Default)]
pub struct MemoryItemStore {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    items: Vec<AuctionItem>,
}

impl MemoryState {
    fn insert(&mut self, items: &[NewAuctionItem]) -> u64 {
        for item in items {
            self.next_id += 1;
            self.items.push(item.clone().into_item(self.next_id));
        }
        items.len() as u64
    }

    fn clear(&mut self) -> u64 {
        let deleted = self.items.len() as u64;
        self.items.clear();
        deleted
    }
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 상품이 입력된 저장소 생성
    pub async fn with_items(items: &[NewAuctionItem]) -> Self {
        let store = Self::new();
        store.state.write().await.insert(items);
        store
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find(&self, filter: &Filter) -> Result<Vec<AuctionItem>, StoreError> {
        debug!("{:<12} --> 경매 상품 조회 filter: {:?}", "Query", filter);
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn clear(&self) -> Result<u64, StoreError> {
        Ok(self.state.write().await.clear())
    }

    async fn replace_all(&self, items: &[NewAuctionItem]) -> Result<u64, StoreError> {
        let mut state = self.state.write().await;
        state.clear();
        Ok(state.insert(items))
    }
}
// endregion: --- Memory Item Store

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PriceField, TextField};

    fn items() -> Vec<NewAuctionItem> {
        vec![
            NewAuctionItem::new("Vintage Painting", "Oil on canvas", 150.0),
            NewAuctionItem::new("Antique Vase", "Ming Dynasty", 500.0),
        ]
    }

    #[tokio::test]
    async fn ids_follow_insertion_order() {
        let store = MemoryItemStore::with_items(&items()).await;
        let found = store.find(&Filter::MatchAll).await.unwrap();
        let ids: Vec<_> = found.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn find_applies_filter() {
        let store = MemoryItemStore::with_items(&items()).await;
        let found = store
            .find(&Filter::and(
                Filter::SubstringCi(TextField::Description, "ming".to_string()),
                Filter::Gte(PriceField::StartPrice, 100.0),
            ))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Antique Vase");
    }

    #[tokio::test]
    async fn replace_all_discards_previous_items() {
        let store = MemoryItemStore::with_items(&items()).await;
        assert_eq!(store.replace_all(&items()[..1]).await.unwrap(), 1);
        let found = store.find(&Filter::MatchAll).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Vintage Painting");
    }

    #[tokio::test]
    async fn clear_reports_deleted_count() {
        let store = MemoryItemStore::with_items(&items()).await;
        assert_eq!(store.clear().await.unwrap(), 2);
        assert_eq!(store.clear().await.unwrap(), 0);
        assert!(store.find(&Filter::MatchAll).await.unwrap().is_empty());
    }
}
