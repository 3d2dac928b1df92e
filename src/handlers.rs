// region:    --- Imports
use crate::auction::model::{AuctionItem, AuctionSummary};
use crate::error::AppError;
use crate::query::{build_filter, validate_search, Filter};
use crate::store::ItemStore;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

// endregion: --- Imports

/// 핸들러 공유 상태
pub type AppState = Arc<dyn ItemStore>;

// region:    --- Routes
/// 라우터 설정
pub fn routes(store: AppState) -> Router {
    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auctions", get(handle_get_auctions))
        .route("/api/auctions/", get(handle_get_auctions))
        .route("/api/auctions/search", get(handle_search_auctions))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
// endregion: --- Routes

// region:    --- Query Handlers

/// 모든 경매 상품 조회
pub async fn handle_get_auctions(
    State(store): State<AppState>,
) -> Result<Json<Vec<AuctionSummary>>, AppError> {
    info!("{:<12} --> 모든 경매 상품 조회", "HandlerQuery");
    let items = store.find(&Filter::MatchAll).await?;
    Ok(Json(summarize(items)))
}

/// 경매 상품 검색
pub async fn handle_search_auctions(
    State(store): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<AuctionSummary>>, AppError> {
    info!("{:<12} --> 경매 상품 검색: {:?}", "HandlerQuery", pairs);

    // 검증 실패 시 저장소까지 가지 않는다
    let params = validate_search(&pairs)?;
    let filter = build_filter(&params);
    let items = store.find(&filter).await?;
    Ok(Json(summarize(items)))
}

fn summarize(items: Vec<AuctionItem>) -> Vec<AuctionSummary> {
    items.into_iter().map(AuctionSummary::from).collect()
}

// endregion: --- Query Handlers
