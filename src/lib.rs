//! Builds and decodes ledger operations.
//!
//! Callers describe an operation with [`models::OperationOptions`] (decimal
//! strings for amounts, checksummed addresses for accounts), [`codec::build_operation`]
//! validates it into the wire [`xdr::Operation`], and [`codec::operation_to_options`]
//! goes the other way.

pub mod codec;
pub mod models;
pub mod types;

pub use stellar_xdr::curr as xdr;

pub use codec::{build_operation, decode_operation_base64, encode_operation_base64, operation_to_options};
pub use models::{OperationError, OperationKind, OperationOptions};
