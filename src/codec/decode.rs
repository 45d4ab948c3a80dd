use crate::models::{
    decode_asset_code, AccountMerge, AllowTrust, Asset, ChangeTrust, CreateAccount, CreatePassiveOffer, ManageOffer,
    OperationError, OperationKind, OperationOptions, PathPayment, Payment, PriceInput, SetOptions, Signer
};
use crate::types::{address_from_account_id, address_from_muxed_account, from_xdr_amount, from_xdr_price};
use crate::xdr::{AccountId, MuxedAccount, Operation, OperationBody, Price, PublicKey, SignerKey};
use tracing::debug;

/// Turns a wire operation back into plain options.
///
/// Amounts come back as exact decimal strings, prices as the decimal quotient
/// `n / d`, and account ids in their checksummed string form. Operation types
/// outside the ten supported ones fail with `UnknownOperation`.
pub fn operation_to_options(operation: &Operation) -> Result<OperationOptions, OperationError> {
    let kind = match &operation.body {
        OperationBody::CreateAccount(op) => OperationKind::CreateAccount(CreateAccount {
            destination: address_from_account_id(&op.destination),
            starting_balance: from_xdr_amount(op.starting_balance)
        }),
        OperationBody::Payment(op) => OperationKind::Payment(Payment {
            destination: muxed_address("destination", &op.destination)?,
            asset: Asset::from_xdr(&op.asset)?,
            amount: from_xdr_amount(op.amount)
        }),
        OperationBody::PathPaymentStrictReceive(op) => OperationKind::PathPayment(PathPayment {
            send_asset: Asset::from_xdr(&op.send_asset)?,
            send_max: from_xdr_amount(op.send_max),
            destination: muxed_address("destination", &op.destination)?,
            dest_asset: Asset::from_xdr(&op.dest_asset)?,
            dest_amount: from_xdr_amount(op.dest_amount),
            path: op.path.iter().map(Asset::from_xdr).collect::<Result<Vec<_>, _>>()?
        }),
        OperationBody::ChangeTrust(op) => OperationKind::ChangeTrust(ChangeTrust {
            asset: Asset::from_change_trust_xdr(&op.line)?,
            limit: Some(from_xdr_amount(op.limit))
        }),
        OperationBody::AllowTrust(op) => OperationKind::AllowTrust(AllowTrust {
            trustor: address_from_account_id(&op.trustor),
            asset_code: decode_asset_code(&op.asset)?,
            authorize: authorize(op.authorize)?
        }),
        OperationBody::SetOptions(op) => OperationKind::SetOptions(SetOptions {
            inflation_dest: op.inflation_dest.as_ref().map(address_from_account_id),
            clear_flags: op.clear_flags,
            set_flags: op.set_flags,
            master_weight: op.master_weight,
            low_threshold: op.low_threshold,
            med_threshold: op.med_threshold,
            high_threshold: op.high_threshold,
            signer: op.signer.as_ref()
                .map(|signer| Ok::<_, OperationError>(Signer {
                    address: signer_address(&signer.key)?,
                    weight: signer.weight
                }))
                .transpose()?,
            home_domain: op.home_domain.as_ref()
                .map(|domain| domain.to_utf8_string())
                .transpose()?
        }),
        OperationBody::ManageSellOffer(op) => OperationKind::ManageOffer(ManageOffer {
            selling: Asset::from_xdr(&op.selling)?,
            buying: Asset::from_xdr(&op.buying)?,
            amount: from_xdr_amount(op.amount),
            price: Some(price(&op.price)?),
            offer_id: Some(op.offer_id.to_string())
        }),
        OperationBody::CreatePassiveSellOffer(op) => OperationKind::CreatePassiveOffer(CreatePassiveOffer {
            selling: Asset::from_xdr(&op.selling)?,
            buying: Asset::from_xdr(&op.buying)?,
            amount: from_xdr_amount(op.amount),
            price: Some(price(&op.price)?)
        }),
        OperationBody::AccountMerge(destination) => OperationKind::AccountMerge(AccountMerge {
            destination: muxed_address("destination", destination)?
        }),
        OperationBody::Inflation => OperationKind::Inflation,
        other => return Err(OperationError::UnknownOperation(other.discriminant() as i32))
    };

    debug!("Decoded [{}] operation", kind.name());

    let source = operation.source_account.as_ref()
        .map(|account| address_from_muxed_account(account).ok_or(OperationError::InvalidSource))
        .transpose()?;

    Ok(OperationOptions {
        source,
        kind
    })
}

fn muxed_address(field: &'static str, account: &MuxedAccount) -> Result<String, OperationError> {
    address_from_muxed_account(account).ok_or_else(|| OperationError::invalid_account_id(field))
}

fn signer_address(key: &SignerKey) -> Result<String, OperationError> {
    match key {
        SignerKey::Ed25519(key) => Ok(address_from_account_id(&AccountId(PublicKey::PublicKeyTypeEd25519(key.clone())))),
        _ => Err(OperationError::invalid_account_id("signer.address"))
    }
}

fn authorize(flag: u32) -> Result<bool, OperationError> {
    match flag {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(OperationError::InvalidAuthorize(other))
    }
}

fn price(price: &Price) -> Result<PriceInput, OperationError> {
    from_xdr_price(price)
        .map(PriceInput::Decimal)
        .map_err(OperationError::InvalidPrice)
}
