//! 저장소에 독립적인 검색 필터 표현
// region:    --- Imports
use super::params::SearchParams;
use crate::auction::model::AuctionItem;

// endregion: --- Imports

// region:    --- Fields
/// 부분 문자열 검색 대상 텍스트 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
}

impl TextField {
    pub fn column(self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Description => "description",
        }
    }

    fn value(self, item: &AuctionItem) -> &str {
        match self {
            TextField::Title => &item.title,
            TextField::Description => &item.description,
        }
    }
}

/// 범위 비교 대상 가격 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    StartPrice,
}

impl PriceField {
    pub fn column(self) -> &'static str {
        match self {
            PriceField::StartPrice => "start_price",
        }
    }

    fn value(self, item: &AuctionItem) -> f64 {
        match self {
            PriceField::StartPrice => item.start_price,
        }
    }
}
// endregion: --- Fields

// region:    --- Filter
/// 검색 필터 식
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    MatchAll,
    And(Box<Filter>, Box<Filter>),
    Or(Box<Filter>, Box<Filter>),
    /// 대소문자 무시 부분 문자열 일치
    SubstringCi(TextField, String),
    Gte(PriceField, f64),
    Lte(PriceField, f64),
}

impl Filter {
    pub fn and(left: Filter, right: Filter) -> Self {
        Filter::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Filter, right: Filter) -> Self {
        Filter::Or(Box::new(left), Box::new(right))
    }

    /// 메모리 상의 상품에 필터 적용
    pub fn matches(&self, item: &AuctionItem) -> bool {
        match self {
            Filter::MatchAll => true,
            Filter::And(left, right) => left.matches(item) && right.matches(item),
            Filter::Or(left, right) => left.matches(item) || right.matches(item),
            Filter::SubstringCi(field, text) => field
                .value(item)
                .to_lowercase()
                .contains(&text.to_lowercase()),
            Filter::Gte(field, bound) => field.value(item) >= *bound,
            Filter::Lte(field, bound) => field.value(item) <= *bound,
        }
    }
}

/// 검색 파라미터로 필터 생성
///
/// keyword 는 title 또는 description 중 하나에 포함되면 일치하고,
/// 가격 조건은 start_price 에 적용된다. 모든 조건은 AND 로 결합된다.
pub fn build_filter(params: &SearchParams) -> Filter {
    let mut conditions = Vec::new();

    if let Some(keyword) = &params.keyword {
        conditions.push(Filter::or(
            Filter::SubstringCi(TextField::Title, keyword.clone()),
            Filter::SubstringCi(TextField::Description, keyword.clone()),
        ));
    }
    if let Some(min_price) = params.min_price {
        conditions.push(Filter::Gte(PriceField::StartPrice, min_price));
    }
    if let Some(max_price) = params.max_price {
        conditions.push(Filter::Lte(PriceField::StartPrice, max_price));
    }

    conditions
        .into_iter()
        .reduce(Filter::and)
        .unwrap_or(Filter::MatchAll)
}
// endregion: --- Filter
