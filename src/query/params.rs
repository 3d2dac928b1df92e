//! 검색 파라미터 검증
//! 필드 순서(keyword, min_price, max_price, 그 외 키)대로 검사하고 첫 번째 오류만 반환한다.
// region:    --- Imports
use crate::error::ValidationError;

// endregion: --- Imports

pub const KEYWORD: &str = "keyword";
pub const MIN_PRICE: &str = "min_price";
pub const MAX_PRICE: &str = "max_price";

const KNOWN_PARAMS: [&str; 3] = [KEYWORD, MIN_PRICE, MAX_PRICE];

const KEYWORD_MIN_LEN: usize = 2;
const KEYWORD_MAX_LEN: usize = 100;

// region:    --- Search Params
/// 검증을 통과한 검색 파라미터
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

// endregion: --- Search Params

// region:    --- Validation
/// 원시 쿼리 파라미터 검증
pub fn validate_search(pairs: &[(String, String)]) -> Result<SearchParams, ValidationError> {
    let keyword = match value_of(pairs, KEYWORD) {
        FieldValue::Absent => None,
        FieldValue::Single(raw) => Some(validate_keyword(raw)?),
        FieldValue::Array => return Err(must_be(KEYWORD, "a string")),
    };
    let min_price = validate_price(MIN_PRICE, value_of(pairs, MIN_PRICE))?;
    let max_price = validate_price(MAX_PRICE, value_of(pairs, MAX_PRICE))?;

    if let Some((name, _)) = pairs
        .iter()
        .find(|(name, _)| !KNOWN_PARAMS.contains(&field_name(name)))
    {
        return Err(ValidationError::new(format!("\"{name}\" is not allowed")));
    }

    Ok(SearchParams {
        keyword,
        min_price,
        max_price,
    })
}

/// `name[]` 형태의 키도 같은 필드로 본다 (값은 배열)
fn field_name(key: &str) -> &str {
    key.strip_suffix("[]").unwrap_or(key)
}

/// 요청에 담긴 필드 값
enum FieldValue<'a> {
    Absent,
    Single(&'a str),
    /// 반복된 키 또는 배열 표기(`name[]`)
    Array,
}

fn value_of<'a>(pairs: &'a [(String, String)], name: &str) -> FieldValue<'a> {
    let mut matching = pairs.iter().filter(|(key, _)| field_name(key) == name);
    match (matching.next(), matching.next()) {
        (None, _) => FieldValue::Absent,
        (Some((key, value)), None) if key == name => FieldValue::Single(value),
        _ => FieldValue::Array,
    }
}

fn validate_keyword(raw: &str) -> Result<String, ValidationError> {
    let keyword = raw.trim();
    let len = keyword.chars().count();
    if len == 0 {
        return Err(ValidationError::new(format!(
            "\"{KEYWORD}\" is not allowed to be empty"
        )));
    }
    if len < KEYWORD_MIN_LEN {
        return Err(ValidationError::new(format!(
            "\"{KEYWORD}\" length must be at least {KEYWORD_MIN_LEN} characters long"
        )));
    }
    if len > KEYWORD_MAX_LEN {
        return Err(ValidationError::new(format!(
            "\"{KEYWORD}\" length must be less than or equal to {KEYWORD_MAX_LEN} characters long"
        )));
    }
    Ok(keyword.to_string())
}

fn validate_price(name: &str, value: FieldValue<'_>) -> Result<Option<f64>, ValidationError> {
    let raw = match value {
        FieldValue::Absent => return Ok(None),
        FieldValue::Single(raw) => raw.trim(),
        FieldValue::Array => return Err(must_be(name, "a number")),
    };
    let price = raw
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| must_be(name, "a number"))?;
    if price < 0.0 {
        return Err(must_be(name, "greater than or equal to 0"));
    }
    Ok(Some(price))
}

fn must_be(name: &str, what: &str) -> ValidationError {
    ValidationError::new(format!("\"{name}\" must be {what}"))
}
// endregion: --- Validation

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn error_of(raw: &[(&str, &str)]) -> String {
        validate_search(&pairs(raw)).unwrap_err().message().to_string()
    }

    #[test]
    fn empty_query_is_valid() {
        let params = validate_search(&[]).unwrap();
        assert_eq!(params, SearchParams::default());
    }

    #[test]
    fn keyword_is_trimmed() {
        let params = validate_search(&pairs(&[("keyword", "  vase  ")])).unwrap();
        assert_eq!(params.keyword.as_deref(), Some("vase"));
    }

    #[test]
    fn keyword_length_bounds() {
        assert_eq!(
            error_of(&[("keyword", "a")]),
            "\"keyword\" length must be at least 2 characters long"
        );
        // 공백 제거 후 길이 기준
        assert_eq!(
            error_of(&[("keyword", " a ")]),
            "\"keyword\" length must be at least 2 characters long"
        );
        assert_eq!(
            error_of(&[("keyword", "a".repeat(101).as_str())]),
            "\"keyword\" length must be less than or equal to 100 characters long"
        );
        assert!(validate_search(&pairs(&[("keyword", "ab")])).is_ok());
        assert!(validate_search(&pairs(&[("keyword", "a".repeat(100).as_str())])).is_ok());
    }

    #[test]
    fn keyword_length_counts_characters() {
        let keyword = "가".repeat(100);
        assert!(validate_search(&pairs(&[("keyword", keyword.as_str())])).is_ok());
    }

    #[test]
    fn blank_keyword_is_rejected() {
        assert_eq!(
            error_of(&[("keyword", "   ")]),
            "\"keyword\" is not allowed to be empty"
        );
    }

    #[test]
    fn prices_must_be_numbers() {
        assert_eq!(error_of(&[("min_price", "abc")]), "\"min_price\" must be a number");
        assert_eq!(error_of(&[("max_price", "xyz")]), "\"max_price\" must be a number");
        assert_eq!(error_of(&[("max_price", "")]), "\"max_price\" must be a number");
        assert_eq!(error_of(&[("min_price", "inf")]), "\"min_price\" must be a number");
        assert_eq!(error_of(&[("min_price", "NaN")]), "\"min_price\" must be a number");
    }

    #[test]
    fn prices_must_be_non_negative() {
        assert_eq!(
            error_of(&[("min_price", "-1")]),
            "\"min_price\" must be greater than or equal to 0"
        );
        let params =
            validate_search(&pairs(&[("min_price", "0"), ("max_price", " 250.5 ")])).unwrap();
        assert_eq!(params.min_price, Some(0.0));
        assert_eq!(params.max_price, Some(250.5));
    }

    #[test]
    fn first_error_follows_field_order() {
        // 요청 내 순서와 무관하게 keyword -> min_price -> max_price 순서
        assert_eq!(
            error_of(&[("max_price", "x"), ("min_price", "y"), ("keyword", "a")]),
            "\"keyword\" length must be at least 2 characters long"
        );
        assert_eq!(
            error_of(&[("max_price", "x"), ("min_price", "y")]),
            "\"min_price\" must be a number"
        );
        assert_eq!(
            error_of(&[("foo", "1"), ("max_price", "x")]),
            "\"max_price\" must be a number"
        );
    }

    #[test]
    fn no_cross_field_rule() {
        let params =
            validate_search(&pairs(&[("min_price", "500"), ("max_price", "100")])).unwrap();
        assert_eq!(params.min_price, Some(500.0));
        assert_eq!(params.max_price, Some(100.0));
    }

    #[test]
    fn unknown_params_are_rejected() {
        assert_eq!(error_of(&[("sort", "price")]), "\"sort\" is not allowed");
    }

    #[test]
    fn repeated_params_are_rejected() {
        assert_eq!(
            error_of(&[("keyword", "vase"), ("keyword", "car")]),
            "\"keyword\" must be a string"
        );
        assert_eq!(
            error_of(&[("min_price", "1"), ("min_price", "2")]),
            "\"min_price\" must be a number"
        );
    }

    #[test]
    fn bracketed_params_are_arrays() {
        assert_eq!(
            error_of(&[("keyword[]", "ab")]),
            "\"keyword\" must be a string"
        );
        assert_eq!(
            error_of(&[("max_price[]", "10")]),
            "\"max_price\" must be a number"
        );
        assert_eq!(error_of(&[("sort[]", "price")]), "\"sort[]\" is not allowed");
    }
}
