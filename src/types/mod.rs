mod account_id;
mod amount;
mod approximation;
mod errors;
mod price;

pub use account_id::{
    account_id_from_address, address_from_account_id, address_from_muxed_account, is_valid_account_id,
    muxed_account_from_address
};
pub use amount::{from_xdr_amount, is_valid_amount, to_xdr_amount, Amount, AMOUNT_DECIMAL_PLACES, AMOUNT_SCALE, MAX_INT64_AMOUNT};
pub use approximation::{best_rational_approximation, APPROXIMATION_TOLERANCE_SCALE, MAX_INT32};
pub use errors::NumericError;
pub use price::{from_xdr_price, to_xdr_price, PriceInput};
