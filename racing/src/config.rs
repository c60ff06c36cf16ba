//! Configuration for the racing server
//!
//! Each setting is resolved with the following precedence:
//! 1. Command-line flag (see `main.rs`)
//! 2. Environment variable
//! 3. Built-in default

use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "./db/racing.db";
const DEFAULT_GRPC_ENDPOINT: &str = "localhost:9000";

/// Get the SQLite database path.
///
/// Priority:
/// 1. RACING_DB_PATH env variable if set
/// 2. ./db/racing.db as fallback
pub fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("RACING_DB_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_DB_PATH)
}

/// Get the address the gRPC server listens on.
///
/// Priority:
/// 1. RACING_GRPC_ENDPOINT env variable if set
/// 2. localhost:9000 as fallback
pub fn get_grpc_endpoint() -> String {
    if let Ok(endpoint) = std::env::var("RACING_GRPC_ENDPOINT") {
        return endpoint;
    }

    DEFAULT_GRPC_ENDPOINT.to_string()
}
