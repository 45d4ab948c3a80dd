mod asset;
mod errors;
mod operations;

use serde::{Deserialize, Serialize};

pub use crate::types::PriceInput;
pub use asset::{decode_asset_code, encode_asset_code, Asset};
pub use errors::OperationError;
pub use operations::{
    AccountMerge, AllowTrust, ChangeTrust, CreateAccount, CreatePassiveOffer, ManageOffer, PathPayment, Payment,
    SetOptions, Signer
};

/// Offer id used when a `manageOffer` does not name one, meaning a new offer.
pub const DEFAULT_OFFER_ID: &str = "0";
/// Inclusive upper bound for weights and thresholds.
pub const MAX_WEIGHT: u32 = 255;
/// Most intermediate assets a `pathPayment` may route through.
pub const MAX_PATH_LENGTH: usize = 5;
pub const MAX_HOME_DOMAIN_LENGTH: usize = 32;

/// The operation variant and its fields, tagged by `"type"` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OperationKind {
    CreateAccount(CreateAccount),
    Payment(Payment),
    PathPayment(PathPayment),
    ChangeTrust(ChangeTrust),
    AllowTrust(AllowTrust),
    SetOptions(SetOptions),
    ManageOffer(ManageOffer),
    CreatePassiveOffer(CreatePassiveOffer),
    AccountMerge(AccountMerge),
    Inflation
}

impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::CreateAccount(_) => "createAccount",
            OperationKind::Payment(_) => "payment",
            OperationKind::PathPayment(_) => "pathPayment",
            OperationKind::ChangeTrust(_) => "changeTrust",
            OperationKind::AllowTrust(_) => "allowTrust",
            OperationKind::SetOptions(_) => "setOptions",
            OperationKind::ManageOffer(_) => "manageOffer",
            OperationKind::CreatePassiveOffer(_) => "createPassiveOffer",
            OperationKind::AccountMerge(_) => "accountMerge",
            OperationKind::Inflation => "inflation"
        }
    }
}

/// Caller-facing description of a single operation.
///
/// `source` overrides the transaction's source account for this operation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub kind: OperationKind
}

impl OperationOptions {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            source: None,
            kind
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
