use crate::models::asset::Asset;
use crate::types::PriceInput;
use serde::{Deserialize, Serialize};

/// Creates and funds a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub destination: String,
    pub starting_balance: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub destination: String,
    pub asset: Asset,
    pub amount: String
}

/// Sends at most `send_max` of `send_asset` so that `destination` receives exactly
/// `dest_amount` of `dest_asset`, converting through the assets in `path` in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPayment {
    pub send_asset: Asset,
    pub send_max: String,
    pub destination: String,
    pub dest_asset: Asset,
    pub dest_amount: String,
    #[serde(default)]
    pub path: Vec<Asset>
}

/// Creates, updates or deletes a trust line. A limit of `"0"` deletes it and an
/// omitted limit means the maximum amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTrust {
    pub asset: Asset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowTrust {
    pub trustor: String,
    pub asset_code: String,
    pub authorize: bool
}

/// A signer to add, update, or remove (weight 0) from an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub address: String,
    pub weight: u32
}

/// Account settings. Every field is optional and only present fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_dest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_flags: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_flags: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub med_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer: Option<Signer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_domain: Option<String>
}

/// Creates, updates or deletes (amount `"0"`) an offer. An omitted offer id
/// creates a new offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageOffer {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePassiveOffer {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInput>
}

/// Merges the source account into `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMerge {
    pub destination: String
}
