use crate::models::errors::OperationError;
use crate::types::{account_id_from_address, address_from_account_id};
use crate::xdr;
use serde::{Deserialize, Serialize};

const ALPHANUM4_WIDTH: usize = 4;
const ALPHANUM12_WIDTH: usize = 12;

/// An asset as callers name it: the native currency, or a code issued by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Asset {
    Native,
    Credit {
        code: String,
        issuer: String
    }
}

impl Asset {
    pub fn native() -> Self {
        Asset::Native
    }

    pub fn credit(code: impl Into<String>, issuer: impl Into<String>) -> Self {
        Asset::Credit { code: code.into(), issuer: issuer.into() }
    }

    /// Credit codes must be 1 to 12 ASCII alphanumerics issued by a valid account.
    pub fn to_xdr(&self) -> Result<xdr::Asset, OperationError> {
        let (code, issuer) = match self {
            Asset::Native => return Ok(xdr::Asset::Native),
            Asset::Credit { code, issuer } => (code, issuer)
        };

        if code.is_empty() || code.len() > ALPHANUM12_WIDTH || !code.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
            return Err(OperationError::InvalidAsset(format!("code [{code}] must be 1 to 12 alphanumeric characters")))
        }

        let issuer = account_id_from_address(issuer)
            .ok_or_else(|| OperationError::InvalidAsset(format!("issuer [{issuer}] is invalid")))?;

        if code.len() <= ALPHANUM4_WIDTH {
            Ok(xdr::Asset::CreditAlphanum4(xdr::AlphaNum4 { asset_code: xdr::AssetCode4(pad_code(code)), issuer }))
        } else {
            Ok(xdr::Asset::CreditAlphanum12(xdr::AlphaNum12 { asset_code: xdr::AssetCode12(pad_code(code)), issuer }))
        }
    }

    /// The trust line form of [`Asset::to_xdr`].
    pub fn to_change_trust_xdr(&self) -> Result<xdr::ChangeTrustAsset, OperationError> {
        Ok(match self.to_xdr()? {
            xdr::Asset::Native => xdr::ChangeTrustAsset::Native,
            xdr::Asset::CreditAlphanum4(asset) => xdr::ChangeTrustAsset::CreditAlphanum4(asset),
            xdr::Asset::CreditAlphanum12(asset) => xdr::ChangeTrustAsset::CreditAlphanum12(asset)
        })
    }

    pub fn from_xdr(asset: &xdr::Asset) -> Result<Self, OperationError> {
        match asset {
            xdr::Asset::Native => Ok(Asset::Native),
            xdr::Asset::CreditAlphanum4(asset) => Ok(Asset::Credit {
                code: unpad_code(&asset.asset_code.0)?,
                issuer: address_from_account_id(&asset.issuer)
            }),
            xdr::Asset::CreditAlphanum12(asset) => Ok(Asset::Credit {
                code: unpad_code(&asset.asset_code.0)?,
                issuer: address_from_account_id(&asset.issuer)
            })
        }
    }

    /// Liquidity pool shares have no caller-facing form and are rejected.
    pub fn from_change_trust_xdr(asset: &xdr::ChangeTrustAsset) -> Result<Self, OperationError> {
        match asset {
            xdr::ChangeTrustAsset::Native => Ok(Asset::Native),
            xdr::ChangeTrustAsset::CreditAlphanum4(asset) => Asset::from_xdr(&xdr::Asset::CreditAlphanum4(asset.clone())),
            xdr::ChangeTrustAsset::CreditAlphanum12(asset) => Asset::from_xdr(&xdr::Asset::CreditAlphanum12(asset.clone())),
            xdr::ChangeTrustAsset::PoolShare(_) => Err(OperationError::InvalidAsset("pool shares are not supported".to_string()))
        }
    }
}

/// Encodes an `allowTrust` code into the 4-byte form when it fits, else the 12-byte form.
pub fn encode_asset_code(code: &str) -> Result<xdr::AssetCode, OperationError> {
    if code.len() <= ALPHANUM4_WIDTH {
        Ok(xdr::AssetCode::CreditAlphanum4(xdr::AssetCode4(pad_code(code))))
    } else if code.len() <= ALPHANUM12_WIDTH {
        Ok(xdr::AssetCode::CreditAlphanum12(xdr::AssetCode12(pad_code(code))))
    } else {
        Err(OperationError::invalid_asset_code(code))
    }
}

pub fn decode_asset_code(asset: &xdr::AssetCode) -> Result<String, OperationError> {
    match asset {
        xdr::AssetCode::CreditAlphanum4(code) => unpad_code(&code.0),
        xdr::AssetCode::CreditAlphanum12(code) => unpad_code(&code.0)
    }
}

fn pad_code<const N: usize>(code: &str) -> [u8; N] {
    let mut padded = [0u8; N];
    let length = code.len().min(N);
    padded[..length].copy_from_slice(&code.as_bytes()[..length]);
    padded
}

fn unpad_code(code: &[u8]) -> Result<String, OperationError> {
    let end = code.iter().rposition(|byte| *byte != 0).map_or(0, |index| index + 1);

    String::from_utf8(code[..end].to_vec())
        .map_err(|_| OperationError::InvalidAsset("code is not valid UTF-8".to_string()))
}
