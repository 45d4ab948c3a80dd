use crate::xdr::{AccountId, MuxedAccount, PublicKey, Uint256};
use stellar_strkey::ed25519;

/// Whether `address` is a well-formed, checksummed account identifier.
pub fn is_valid_account_id(address: &str) -> bool {
    ed25519::PublicKey::from_string(address).is_ok()
}

pub fn account_id_from_address(address: &str) -> Option<AccountId> {
    ed25519::PublicKey::from_string(address)
        .ok()
        .map(|key| AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(key.0))))
}

pub fn address_from_account_id(account_id: &AccountId) -> String {
    let AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(bytes))) = account_id;
    ed25519::PublicKey(*bytes).to_string()
}

/// Plain ed25519 accounts only; multiplexed ids have no address form here.
pub fn muxed_account_from_address(address: &str) -> Option<MuxedAccount> {
    ed25519::PublicKey::from_string(address)
        .ok()
        .map(|key| MuxedAccount::Ed25519(Uint256(key.0)))
}

pub fn address_from_muxed_account(account: &MuxedAccount) -> Option<String> {
    match account {
        MuxedAccount::Ed25519(Uint256(bytes)) => Some(ed25519::PublicKey(*bytes).to_string()),
        MuxedAccount::MuxedEd25519(_) => None
    }
}
