//! # Biblio Server
//!
//! gRPC front end for the library lending service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Biblio Server                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  LendingServiceImpl (tonic)                                      │  │
//! │  │                                                                  │  │
//! │  │  • QueryById      → QueryResponse                               │  │
//! │  │  • BorrowById     → LoanResponse                                │  │
//! │  │  • BorrowByTitle  → LoanResponse                                │  │
//! │  │  • ReturnById     → ReturnResponse                              │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │  ┌────────────────────────────▼─────────────────────────────────────┐  │
//! │  │  biblio-lending → biblio-store → biblioteca.txt                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`]. Environment variables:
//! - `BIBLIO_BIND_ADDR` - Listen address (default: 0.0.0.0)
//! - `BIBLIO_PORT` - gRPC port (default: 50051)
//! - `BIBLIO_STORE_PATH` - Store file (default: biblioteca.txt)
//! - `RUST_LOG` - Log filter

pub mod config;
pub mod error;
pub mod proto;
pub mod services;

// Re-exports
pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;

use biblio_lending::LendingService;
use biblio_store::{BookStore, StoreConfig};
use tracing::info;

use crate::proto::lending_service_server::LendingServiceServer;
use crate::services::LendingServiceImpl;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "info,biblio_store=debug,biblio_lending=debug,biblio_server=debug";

/// Opens the configured store and builds the gRPC service around it.
pub async fn build_service(
    config: &ServerConfig,
) -> Result<LendingServiceServer<LendingServiceImpl>, ServerError> {
    let store = BookStore::open(StoreConfig::new(&config.store.path)).await?;
    store.health_check().await?;
    info!(path = %store.path().display(), "Book store ready");

    let lending = LendingService::new(store);
    Ok(LendingServiceServer::new(LendingServiceImpl::new(lending)))
}
