use crate::types::NumericError;
use crate::xdr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{field} is invalid")]
    InvalidAccountId {
        field: &'static str
    },
    #[error("Source address is invalid")]
    InvalidSource,
    #[error("{field} argument must be of type String, represent a positive number and have at most 7 digits after the decimal")]
    InvalidAmount {
        field: &'static str,
        #[source]
        reason: NumericError
    },
    #[error("price argument is required")]
    PriceRequired,
    #[error("{0}")]
    InvalidPrice(#[source] NumericError),
    #[error("{field} value must be between 0 and 255")]
    WeightOutOfRange {
        field: &'static str
    },
    #[error("Asset code must be 12 characters at max")]
    InvalidAssetCode {
        code: String
    },
    #[error("Asset is invalid: {0}")]
    InvalidAsset(String),
    #[error("offerId [{0}] must be a non-negative 64-bit integer")]
    InvalidOfferId(String),
    #[error("homeDomain must be at most 32 bytes")]
    InvalidHomeDomain,
    #[error("path must contain at most 5 assets, got [{0}]")]
    PathTooLong(usize),
    #[error("authorize flag [{0}] is neither 0 nor 1")]
    InvalidAuthorize(u32),
    #[error("Unknown operation [{0}]")]
    UnknownOperation(i32),
    #[error(transparent)]
    Xdr(#[from] xdr::Error)
}

impl OperationError {
    pub fn invalid_account_id(field: &'static str) -> Self {
        Self::InvalidAccountId { field }
    }

    pub fn invalid_amount(field: &'static str, reason: NumericError) -> Self {
        Self::InvalidAmount { field, reason }
    }

    pub fn weight_out_of_range(field: &'static str) -> Self {
        Self::WeightOutOfRange { field }
    }

    pub fn invalid_asset_code(code: &str) -> Self {
        Self::InvalidAssetCode { code: code.to_string() }
    }
}
