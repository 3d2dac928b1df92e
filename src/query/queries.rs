// region:    --- Imports
use super::filter::Filter;
use sqlx::{Postgres, QueryBuilder};

// endregion: --- Imports

/// 테이블 이름 자리표시자
pub const TABLE_PLACEHOLDER: &str = "{table}";

/// 경매 상품 조회
pub const SELECT_ITEMS: &str = concat!(
    "SELECT id, title, description, start_price, reserve_price, created_at, end_date ",
    "FROM {table}"
);

/// 경매 상품 전체 삭제
pub const DELETE_ALL_ITEMS: &str = "DELETE FROM {table}";

/// 경매 상품 입력
pub const INSERT_ITEMS: &str =
    "INSERT INTO {table} (title, description, start_price, reserve_price, created_at, end_date) ";

/// 결과 정렬 (입력 순서)
pub const ORDER_BY_ID: &str = " ORDER BY id";

/// 테이블 이름 치환
pub fn for_table(sql: &str, table: &str) -> String {
    sql.replace(TABLE_PLACEHOLDER, table)
}

/// 필터를 WHERE 절로 변환
pub fn push_where(builder: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    if matches!(filter, Filter::MatchAll) {
        return;
    }
    builder.push(" WHERE ");
    push_filter(builder, filter);
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    match filter {
        Filter::MatchAll => {
            builder.push("TRUE");
        }
        Filter::And(left, right) => push_binary(builder, left, " AND ", right),
        Filter::Or(left, right) => push_binary(builder, left, " OR ", right),
        Filter::SubstringCi(field, text) => {
            builder
                .push(field.column())
                .push(" ILIKE ")
                .push_bind(format!("%{}%", escape_like(text)))
                .push(" ESCAPE '\\'");
        }
        Filter::Gte(field, bound) => {
            builder.push(field.column()).push(" >= ").push_bind(*bound);
        }
        Filter::Lte(field, bound) => {
            builder.push(field.column()).push(" <= ").push_bind(*bound);
        }
    }
}

fn push_binary(
    builder: &mut QueryBuilder<'_, Postgres>,
    left: &Filter,
    op: &str,
    right: &Filter,
) {
    builder.push("(");
    push_filter(builder, left);
    builder.push(op);
    push_filter(builder, right);
    builder.push(")");
}

/// LIKE 패턴 문자 이스케이프
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
