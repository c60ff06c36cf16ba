//! Configuration for the sports server
//!
//! Each setting is resolved with the following precedence:
//! 1. Command-line flag (see `main.rs`)
//! 2. Environment variable
//! 3. Built-in default

use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "./db/sports.db";
const DEFAULT_GRPC_ENDPOINT: &str = "localhost:10000";

/// Get the SQLite database path.
///
/// Priority:
/// 1. SPORTS_DB_PATH env variable if set
/// 2. ./db/sports.db as fallback
pub fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("SPORTS_DB_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_DB_PATH)
}

/// Get the address the gRPC server listens on.
///
/// Priority:
/// 1. SPORTS_GRPC_ENDPOINT env variable if set
/// 2. localhost:10000 as fallback
pub fn get_grpc_endpoint() -> String {
    if let Ok(endpoint) = std::env::var("SPORTS_GRPC_ENDPOINT") {
        return endpoint;
    }

    DEFAULT_GRPC_ENDPOINT.to_string()
}
