use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 경매 상품 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuctionItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_price: f64,
    pub reserve_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

// 응답용 경매 상품 요약 (id, title, start_price 만 노출)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionSummary {
    pub id: i64,
    pub title: String,
    pub start_price: f64,
}

impl From<AuctionItem> for AuctionSummary {
    fn from(item: AuctionItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            start_price: item.start_price,
        }
    }
}

// 시드 데이터로 입력되는 경매 상품
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAuctionItem {
    pub title: String,
    pub description: String,
    pub start_price: f64,
    #[serde(default)]
    pub reserve_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl NewAuctionItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>, start_price: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            start_price,
            reserve_price: None,
            created_at: None,
            end_date: None,
        }
    }

    /// 저장 전 상품 불변식 검증
    pub fn validate(&self, index: usize) -> Result<(), StoreError> {
        let invalid = |reason: &str| StoreError::InvalidRecord {
            index,
            reason: reason.to_string(),
        };
        if self.title.trim().is_empty() {
            return Err(invalid("title must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(invalid("description must not be empty"));
        }
        if !is_valid_price(self.start_price) {
            return Err(invalid("start_price must be a non-negative number"));
        }
        if let Some(reserve_price) = self.reserve_price {
            if !is_valid_price(reserve_price) {
                return Err(invalid("reserve_price must be a non-negative number"));
            }
        }
        Ok(())
    }

    /// 저장소가 부여한 id 로 상품 생성
    pub fn into_item(self, id: i64) -> AuctionItem {
        AuctionItem {
            id,
            title: self.title,
            description: self.description,
            start_price: self.start_price,
            reserve_price: self.reserve_price,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            end_date: self.end_date,
        }
    }
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_keeps_only_public_fields() {
        let item = NewAuctionItem::new("Old Car", "Model T", 1000.0).into_item(7);
        let summary = AuctionSummary::from(item);
        let value = serde_json::to_value(&summary).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["id", "start_price", "title"]);
        assert_eq!(summary.id, 7);
    }

    #[test]
    fn rejects_negative_prices() {
        let mut item = NewAuctionItem::new("Vase", "Ming Dynasty", -1.0);
        assert!(item.validate(0).is_err());

        item.start_price = 10.0;
        item.reserve_price = Some(-5.0);
        assert!(matches!(
            item.validate(3),
            Err(StoreError::InvalidRecord { index: 3, .. })
        ));
    }

    #[test]
    fn reserve_price_is_independent_of_start_price() {
        let mut item = NewAuctionItem::new("Vase", "Ming Dynasty", 500.0);
        item.reserve_price = Some(50.0);
        assert!(item.validate(0).is_ok());
    }

    #[test]
    fn rejects_blank_text() {
        assert!(NewAuctionItem::new(" ", "desc", 1.0).validate(0).is_err());
        assert!(NewAuctionItem::new("title", "", 1.0).validate(0).is_err());
    }

    #[test]
    fn created_at_defaults_to_now() {
        let before = Utc::now();
        let item = NewAuctionItem::new("Painting", "Oil on canvas", 150.0).into_item(1);
        assert!(item.created_at >= before);
    }
}
