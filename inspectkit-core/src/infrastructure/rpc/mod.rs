//! Line-delimited JSON-RPC 2.0 over stdin/stdout.
//!
//! Each line carries one request; the matching response is written as one
//! line before the next request is read.

mod server;
mod types;

pub use server::{RpcServeError, RpcServer};
pub use types::{JSONRPC_VERSION, RpcError, RpcErrorData, RpcRequest, RpcResponse};

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
