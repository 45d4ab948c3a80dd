mod decode;
mod encode;
#[cfg(test)]
mod tests;

use crate::models::{OperationError, OperationOptions};
use crate::xdr::{Limits, Operation, ReadXdr, WriteXdr};

pub use decode::operation_to_options;
pub use encode::{
    account_merge, allow_trust, build_operation, change_trust, create_account, create_passive_offer, inflation,
    manage_offer, path_payment, payment, set_options
};

/// Builds `options` and renders the operation as base64 XDR.
pub fn encode_operation_base64(options: &OperationOptions) -> Result<String, OperationError> {
    Ok(build_operation(options)?.to_xdr_base64(Limits::none())?)
}

/// Parses base64 XDR into an operation and decodes it to options.
///
/// The input must hold exactly one operation; trailing bytes are an error.
pub fn decode_operation_base64(encoded: &str) -> Result<OperationOptions, OperationError> {
    let operation = Operation::from_xdr_base64(encoded.trim(), Limits::none())?;
    operation_to_options(&operation)
}
