use crate::models::{
    encode_asset_code, AccountMerge, AllowTrust, Asset, ChangeTrust, CreateAccount, CreatePassiveOffer, ManageOffer,
    OperationError, OperationKind, OperationOptions, PathPayment, Payment, PriceInput, SetOptions, DEFAULT_OFFER_ID,
    MAX_HOME_DOMAIN_LENGTH, MAX_PATH_LENGTH, MAX_WEIGHT
};
use crate::types::{account_id_from_address, muxed_account_from_address, to_xdr_price, Amount};
use crate::xdr::{
    AccountId, AllowTrustOp, ChangeTrustOp, CreateAccountOp, CreatePassiveSellOfferOp, ManageSellOfferOp, MuxedAccount,
    Operation, OperationBody, PathPaymentStrictReceiveOp, PaymentOp, Price, PublicKey, SetOptionsOp, Signer, SignerKey,
    StringM, VecM
};
use tracing::debug;

/// Builds the wire operation described by `options`.
///
/// This is the single entry point over all variants; it dispatches to the
/// per-variant constructors below. No partial operation is ever returned.
///
/// # Errors
/// Returns the first `OperationError` found while validating the fields.
pub fn build_operation(options: &OperationOptions) -> Result<Operation, OperationError> {
    let source = options.source.as_deref();

    let operation = match &options.kind {
        OperationKind::CreateAccount(fields) => create_account(fields, source),
        OperationKind::Payment(fields) => payment(fields, source),
        OperationKind::PathPayment(fields) => path_payment(fields, source),
        OperationKind::ChangeTrust(fields) => change_trust(fields, source),
        OperationKind::AllowTrust(fields) => allow_trust(fields, source),
        OperationKind::SetOptions(fields) => set_options(fields, source),
        OperationKind::ManageOffer(fields) => manage_offer(fields, source),
        OperationKind::CreatePassiveOffer(fields) => create_passive_offer(fields, source),
        OperationKind::AccountMerge(fields) => account_merge(fields, source),
        OperationKind::Inflation => inflation(source)
    }?;

    debug!("Built [{}] operation", options.kind.name());

    Ok(operation)
}

pub fn create_account(fields: &CreateAccount, source: Option<&str>) -> Result<Operation, OperationError> {
    let destination = account("destination", &fields.destination)?;
    let starting_balance = amount("startingBalance", &fields.starting_balance, false)?;

    with_source(source, OperationBody::CreateAccount(CreateAccountOp {
        destination,
        starting_balance
    }))
}

pub fn payment(fields: &Payment, source: Option<&str>) -> Result<Operation, OperationError> {
    let destination = muxed_account("destination", &fields.destination)?;
    let asset = fields.asset.to_xdr()?;
    let amount = amount("amount", &fields.amount, false)?;

    with_source(source, OperationBody::Payment(PaymentOp {
        destination,
        asset,
        amount
    }))
}

pub fn path_payment(fields: &PathPayment, source: Option<&str>) -> Result<Operation, OperationError> {
    let send_max = amount("sendMax", &fields.send_max, false)?;
    let destination = muxed_account("destination", &fields.destination)?;
    let dest_amount = amount("destAmount", &fields.dest_amount, false)?;

    if fields.path.len() > MAX_PATH_LENGTH {
        return Err(OperationError::PathTooLong(fields.path.len()))
    }

    let path = fields.path.iter()
        .map(Asset::to_xdr)
        .collect::<Result<Vec<_>, _>>()?;

    with_source(source, OperationBody::PathPaymentStrictReceive(PathPaymentStrictReceiveOp {
        send_asset: fields.send_asset.to_xdr()?,
        send_max,
        destination,
        dest_asset: fields.dest_asset.to_xdr()?,
        dest_amount,
        path: VecM::try_from(path)?
    }))
}

pub fn change_trust(fields: &ChangeTrust, source: Option<&str>) -> Result<Operation, OperationError> {
    let line = fields.asset.to_change_trust_xdr()?;
    let limit = match &fields.limit {
        Some(limit) => amount("limit", limit, true)?,
        None => Amount::MAX.raw()
    };

    with_source(source, OperationBody::ChangeTrust(ChangeTrustOp {
        line,
        limit
    }))
}

pub fn allow_trust(fields: &AllowTrust, source: Option<&str>) -> Result<Operation, OperationError> {
    let trustor = account("trustor", &fields.trustor)?;
    let asset = encode_asset_code(&fields.asset_code)?;

    with_source(source, OperationBody::AllowTrust(AllowTrustOp {
        trustor,
        asset,
        authorize: u32::from(fields.authorize)
    }))
}

pub fn set_options(fields: &SetOptions, source: Option<&str>) -> Result<Operation, OperationError> {
    let inflation_dest = fields.inflation_dest.as_deref()
        .map(|address| account("inflationDest", address))
        .transpose()?;

    let master_weight = fields.master_weight.map(|value| weight("masterWeight", value)).transpose()?;
    let low_threshold = fields.low_threshold.map(|value| weight("lowThreshold", value)).transpose()?;
    let med_threshold = fields.med_threshold.map(|value| weight("medThreshold", value)).transpose()?;
    let high_threshold = fields.high_threshold.map(|value| weight("highThreshold", value)).transpose()?;

    let signer = match &fields.signer {
        Some(signer) => Some(Signer {
            key: signer_key("signer.address", &signer.address)?,
            weight: weight("signer.weight", signer.weight)?
        }),
        None => None
    };

    let home_domain = match &fields.home_domain {
        Some(domain) if domain.len() > MAX_HOME_DOMAIN_LENGTH => return Err(OperationError::InvalidHomeDomain),
        Some(domain) => Some(StringM::<32>::try_from(domain.as_str())?.into()),
        None => None
    };

    with_source(source, OperationBody::SetOptions(SetOptionsOp {
        inflation_dest,
        clear_flags: fields.clear_flags,
        set_flags: fields.set_flags,
        master_weight,
        low_threshold,
        med_threshold,
        high_threshold,
        home_domain,
        signer
    }))
}

pub fn manage_offer(fields: &ManageOffer, source: Option<&str>) -> Result<Operation, OperationError> {
    let selling = fields.selling.to_xdr()?;
    let buying = fields.buying.to_xdr()?;
    let amount = amount("amount", &fields.amount, true)?;
    let price = price(fields.price.as_ref())?;

    let offer_id = fields.offer_id.as_deref().unwrap_or(DEFAULT_OFFER_ID);
    let offer_id = offer_id.parse::<i64>().ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| OperationError::InvalidOfferId(offer_id.to_string()))?;

    with_source(source, OperationBody::ManageSellOffer(ManageSellOfferOp {
        selling,
        buying,
        amount,
        price,
        offer_id
    }))
}

pub fn create_passive_offer(fields: &CreatePassiveOffer, source: Option<&str>) -> Result<Operation, OperationError> {
    let selling = fields.selling.to_xdr()?;
    let buying = fields.buying.to_xdr()?;
    let amount = amount("amount", &fields.amount, false)?;
    let price = price(fields.price.as_ref())?;

    with_source(source, OperationBody::CreatePassiveSellOffer(CreatePassiveSellOfferOp {
        selling,
        buying,
        amount,
        price
    }))
}

pub fn account_merge(fields: &AccountMerge, source: Option<&str>) -> Result<Operation, OperationError> {
    let destination = muxed_account("destination", &fields.destination)?;

    with_source(source, OperationBody::AccountMerge(destination))
}

pub fn inflation(source: Option<&str>) -> Result<Operation, OperationError> {
    with_source(source, OperationBody::Inflation)
}

fn with_source(source: Option<&str>, body: OperationBody) -> Result<Operation, OperationError> {
    let source_account = source
        .map(|address| muxed_account_from_address(address).ok_or(OperationError::InvalidSource))
        .transpose()?;

    Ok(Operation {
        source_account,
        body
    })
}

fn account(field: &'static str, address: &str) -> Result<AccountId, OperationError> {
    account_id_from_address(address).ok_or_else(|| OperationError::invalid_account_id(field))
}

fn muxed_account(field: &'static str, address: &str) -> Result<MuxedAccount, OperationError> {
    muxed_account_from_address(address).ok_or_else(|| OperationError::invalid_account_id(field))
}

fn signer_key(field: &'static str, address: &str) -> Result<SignerKey, OperationError> {
    let AccountId(PublicKey::PublicKeyTypeEd25519(key)) = account(field, address)?;
    Ok(SignerKey::Ed25519(key))
}

fn amount(field: &'static str, value: &str, allow_zero: bool) -> Result<i64, OperationError> {
    Amount::parse(value, allow_zero)
        .map(Amount::raw)
        .map_err(|reason| OperationError::invalid_amount(field, reason))
}

fn price(price: Option<&PriceInput>) -> Result<Price, OperationError> {
    let price = price.ok_or(OperationError::PriceRequired)?;
    to_xdr_price(price).map_err(OperationError::InvalidPrice)
}

fn weight(field: &'static str, value: u32) -> Result<u32, OperationError> {
    if value > MAX_WEIGHT {
        return Err(OperationError::weight_out_of_range(field))
    }

    Ok(value)
}
