//! 경매 상품 시드 데이터 관리 도구
//!
//! - auction-seed seed [--file <path>]
//! - auction-seed clear
// region:    --- Imports
use auction_search::config::Config;
use auction_search::database::DatabaseManager;
use auction_search::seed;
use auction_search::store::PostgresItemStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Cli
/// 경매 상품 데이터 관리 CLI
#[derive(Parser, Debug)]
#[command(name = "auction-seed")]
#[command(version, about = "CLI tool for managing auction data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 기존 데이터를 삭제하고 샘플 데이터를 입력
    Seed {
        /// 샘플 데이터 JSON 파일 (기본값: 내장 데이터)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// 경매 상품 데이터를 모두 삭제
    Clear,
}
// endregion: --- Cli

// region:    --- Main
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{:<12} --> 실패: {}", "Seed", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    info!("{:<12} --> 데이터베이스 연결 중...", "Seed");
    let db_manager = Arc::new(DatabaseManager::connect(&config).await?);
    db_manager.initialize_schema(&config.collection_name).await?;
    let store = PostgresItemStore::new(Arc::clone(&db_manager), config.collection_name.clone());

    match cli.command {
        Command::Seed { file } => {
            let items = seed::load_seed_data(file.as_deref())?;
            seed::seed(&store, &items).await?;
        }
        Command::Clear => {
            seed::clear(&store).await?;
        }
    }

    db_manager.pool().close().await;
    info!("{:<12} --> 데이터베이스 연결 종료", "Seed");
    Ok(())
}
// endregion: --- Main
