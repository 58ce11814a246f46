//! Outer surfaces over the application layer.

pub mod rpc;

pub use rpc::{RpcRequest, RpcResponse, RpcServeError, RpcServer};
