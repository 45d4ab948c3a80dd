use super::{
    allow_trust, build_operation, change_trust, create_account, decode_operation_base64, encode_operation_base64,
    inflation, manage_offer, operation_to_options, set_options
};
use crate::models::{
    AccountMerge, AllowTrust, Asset, ChangeTrust, CreateAccount, CreatePassiveOffer, ManageOffer, OperationError,
    OperationKind, OperationOptions, PathPayment, Payment, PriceInput, SetOptions, Signer
};
use crate::types::{NumericError, MAX_INT64_AMOUNT};
use crate::xdr::{
    self, AccountId, AssetCode, AssetCode4, Limits, MuxedAccount, MuxedAccountMed25519, Operation, OperationBody, Price,
    PublicKey, Uint256, WriteXdr
};
use anyhow::{anyhow, Result};

const DESTINATION: &str = "GAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQDZ7H";
const ISSUER: &str = "GABAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEJXA";
const SOURCE: &str = "GABQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQHGPC";

fn usd() -> Asset {
    Asset::credit("USD", ISSUER)
}

fn manage_offer_fields(amount: &str, price: Option<PriceInput>) -> ManageOffer {
    ManageOffer {
        selling: Asset::native(),
        buying: usd(),
        amount: amount.to_string(),
        price,
        offer_id: None
    }
}

fn account_id(byte: u8) -> AccountId {
    AccountId(PublicKey::PublicKeyTypeEd25519(Uint256([byte; 32])))
}

fn round_trip(options: &OperationOptions) -> Result<OperationOptions> {
    let encoded = encode_operation_base64(options)?;
    Ok(decode_operation_base64(&encoded)?)
}

#[test]
fn test_every_variant_survives_encode_and_decode() -> Result<()> {
    let variants = vec![
        OperationKind::CreateAccount(CreateAccount {
            destination: DESTINATION.to_string(),
            starting_balance: "1000.5".to_string()
        }),
        OperationKind::Payment(Payment {
            destination: DESTINATION.to_string(),
            asset: usd(),
            amount: "10.1234567".to_string()
        }),
        OperationKind::PathPayment(PathPayment {
            send_asset: Asset::native(),
            send_max: "3".to_string(),
            destination: DESTINATION.to_string(),
            dest_asset: usd(),
            dest_amount: "3.1415".to_string(),
            path: vec![Asset::credit("EUR", ISSUER), Asset::credit("LONGASSET", ISSUER), Asset::native()]
        }),
        OperationKind::ChangeTrust(ChangeTrust {
            asset: Asset::credit("BTCLN", ISSUER),
            limit: Some("50".to_string())
        }),
        OperationKind::AllowTrust(AllowTrust {
            trustor: DESTINATION.to_string(),
            asset_code: "USD".to_string(),
            authorize: true
        }),
        OperationKind::SetOptions(SetOptions {
            inflation_dest: Some(DESTINATION.to_string()),
            clear_flags: Some(1),
            set_flags: Some(2),
            master_weight: Some(255),
            low_threshold: Some(0),
            med_threshold: Some(10),
            high_threshold: Some(100),
            signer: Some(Signer { address: ISSUER.to_string(), weight: 1 }),
            home_domain: Some("www.example.com".to_string())
        }),
        OperationKind::ManageOffer(ManageOffer {
            selling: Asset::native(),
            buying: usd(),
            amount: "100".to_string(),
            price: Some(PriceInput::decimal("0.5")),
            offer_id: Some("42".to_string())
        }),
        OperationKind::CreatePassiveOffer(CreatePassiveOffer {
            selling: usd(),
            buying: Asset::native(),
            amount: "11.27827".to_string(),
            price: Some(PriceInput::decimal("3.07"))
        }),
        OperationKind::AccountMerge(AccountMerge {
            destination: DESTINATION.to_string()
        }),
        OperationKind::Inflation,
    ];

    for kind in variants {
        let options = OperationOptions::new(kind.clone()).with_source(SOURCE);

        assert_eq!(round_trip(&options)?, options, "variant [{}]", kind.name());
    }

    Ok(())
}

#[test]
fn test_source_is_optional_and_validated() -> Result<()> {
    let without_source = OperationOptions::new(OperationKind::Inflation);

    assert_eq!(build_operation(&without_source)?.source_account, None);
    assert_eq!(round_trip(&without_source)?, without_source);

    let invalid = OperationOptions::new(OperationKind::Inflation).with_source("GBAD");

    assert!(matches!(build_operation(&invalid), Err(OperationError::InvalidSource)));
    assert!(matches!(inflation(Some("not an account")), Err(OperationError::InvalidSource)));

    Ok(())
}

#[test]
fn test_create_account_scales_the_starting_balance() -> Result<()> {
    let fields = CreateAccount {
        destination: DESTINATION.to_string(),
        starting_balance: "10.1234567".to_string()
    };

    let OperationBody::CreateAccount(op) = create_account(&fields, None)?.body else {
        return Err(anyhow!("expected a createAccount body"))
    };

    assert_eq!(op.starting_balance, 101_234_567);

    Ok(())
}

#[test]
fn test_create_account_rejects_invalid_fields() {
    let too_precise = CreateAccount {
        destination: DESTINATION.to_string(),
        starting_balance: "10.12345678".to_string()
    };
    let zero = CreateAccount {
        destination: DESTINATION.to_string(),
        starting_balance: "0".to_string()
    };
    let bad_destination = CreateAccount {
        destination: "GBAD".to_string(),
        starting_balance: "1".to_string()
    };

    assert!(matches!(
        create_account(&too_precise, None),
        Err(OperationError::InvalidAmount { field: "startingBalance", reason: NumericError::TooManyDecimalPlaces })
    ));
    assert!(matches!(
        create_account(&zero, None),
        Err(OperationError::InvalidAmount { reason: NumericError::Zero, .. })
    ));
    assert!(matches!(
        create_account(&bad_destination, None),
        Err(OperationError::InvalidAccountId { field: "destination" })
    ));
}

#[test]
fn test_amount_ceiling_is_enforced_at_construction() -> Result<()> {
    let at_ceiling = OperationOptions::new(OperationKind::Payment(Payment {
        destination: DESTINATION.to_string(),
        asset: Asset::native(),
        amount: MAX_INT64_AMOUNT.to_string()
    }));
    let above_ceiling = OperationOptions::new(OperationKind::Payment(Payment {
        destination: DESTINATION.to_string(),
        asset: Asset::native(),
        amount: "922337203685.4775808".to_string()
    }));

    assert_eq!(round_trip(&at_ceiling)?, at_ceiling);
    assert!(matches!(
        build_operation(&above_ceiling),
        Err(OperationError::InvalidAmount { field: "amount", reason: NumericError::Overflow })
    ));

    Ok(())
}

#[test]
fn test_amount_error_message_names_the_field() {
    let options = OperationOptions::new(OperationKind::Payment(Payment {
        destination: DESTINATION.to_string(),
        asset: Asset::native(),
        amount: "-1".to_string()
    }));

    let message = build_operation(&options).map_err(|error| error.to_string());

    assert_eq!(
        message,
        Err("amount argument must be of type String, represent a positive number and have at most 7 digits after the decimal".to_string())
    );
}

#[test]
fn test_path_payment_preserves_path_order_and_bounds_its_length() -> Result<()> {
    let path = vec![Asset::credit("AAA", ISSUER), Asset::native(), Asset::credit("BBB", ISSUER)];
    let options = OperationOptions::new(OperationKind::PathPayment(PathPayment {
        send_asset: Asset::native(),
        send_max: "1".to_string(),
        destination: DESTINATION.to_string(),
        dest_asset: usd(),
        dest_amount: "1".to_string(),
        path: path.clone()
    }));

    let OperationKind::PathPayment(decoded) = round_trip(&options)?.kind else {
        return Err(anyhow!("expected a pathPayment"))
    };

    assert_eq!(decoded.path, path);

    let too_long = OperationOptions::new(OperationKind::PathPayment(PathPayment {
        send_asset: Asset::native(),
        send_max: "1".to_string(),
        destination: DESTINATION.to_string(),
        dest_asset: usd(),
        dest_amount: "1".to_string(),
        path: vec![Asset::native(); 6]
    }));

    assert!(matches!(build_operation(&too_long), Err(OperationError::PathTooLong(6))));

    Ok(())
}

#[test]
fn test_change_trust_defaults_to_the_maximum_limit() -> Result<()> {
    let fields = ChangeTrust { asset: usd(), limit: None };

    let OperationBody::ChangeTrust(op) = change_trust(&fields, None)?.body else {
        return Err(anyhow!("expected a changeTrust body"))
    };

    assert_eq!(op.limit, i64::MAX);

    Ok(())
}

#[test]
fn test_change_trust_accepts_zero_limit_as_deletion() -> Result<()> {
    let options = OperationOptions::new(OperationKind::ChangeTrust(ChangeTrust {
        asset: usd(),
        limit: Some("0".to_string())
    }));

    assert_eq!(round_trip(&options)?, options);

    let negative = ChangeTrust { asset: usd(), limit: Some("-5".to_string()) };

    assert!(matches!(change_trust(&negative, None), Err(OperationError::InvalidAmount { field: "limit", .. })));

    Ok(())
}

#[test]
fn test_allow_trust_pads_and_strips_the_asset_code() -> Result<()> {
    let fields = AllowTrust {
        trustor: DESTINATION.to_string(),
        asset_code: "USD".to_string(),
        authorize: false
    };

    let operation = allow_trust(&fields, None)?;
    let OperationBody::AllowTrust(op) = &operation.body else {
        return Err(anyhow!("expected an allowTrust body"))
    };

    assert_eq!(op.asset, AssetCode::CreditAlphanum4(AssetCode4(*b"USD\0")));
    assert_eq!(op.authorize, 0);

    let OperationKind::AllowTrust(decoded) = operation_to_options(&operation)?.kind else {
        return Err(anyhow!("expected allowTrust options"))
    };

    assert_eq!(decoded.asset_code, "USD");
    assert!(!decoded.authorize);

    Ok(())
}

#[test]
fn test_allow_trust_rejects_codes_over_twelve_characters() {
    let fields = AllowTrust {
        trustor: DESTINATION.to_string(),
        asset_code: "ABCDEFGHIJKLM".to_string(),
        authorize: true
    };

    assert!(matches!(allow_trust(&fields, None), Err(OperationError::InvalidAssetCode { .. })));
}

#[test]
fn test_set_options_checks_weight_ranges() -> Result<()> {
    let accepted = SetOptions { master_weight: Some(255), ..SetOptions::default() };
    let rejected = SetOptions { master_weight: Some(256), ..SetOptions::default() };
    let high = SetOptions { high_threshold: Some(1000), ..SetOptions::default() };
    let signer = SetOptions {
        signer: Some(Signer { address: ISSUER.to_string(), weight: 300 }),
        ..SetOptions::default()
    };

    assert!(set_options(&accepted, None).is_ok());
    assert!(matches!(set_options(&rejected, None), Err(OperationError::WeightOutOfRange { field: "masterWeight" })));
    assert!(matches!(set_options(&high, None), Err(OperationError::WeightOutOfRange { field: "highThreshold" })));
    assert!(matches!(set_options(&signer, None), Err(OperationError::WeightOutOfRange { field: "signer.weight" })));
    assert_eq!(
        set_options(&rejected, None).map_err(|error| error.to_string()).err(),
        Some("masterWeight value must be between 0 and 255".to_string())
    );

    Ok(())
}

#[test]
fn test_set_options_validates_addresses_and_home_domain() -> Result<()> {
    let bad_inflation = SetOptions { inflation_dest: Some("GBAD".to_string()), ..SetOptions::default() };
    let bad_signer = SetOptions {
        signer: Some(Signer { address: "GBAD".to_string(), weight: 0 }),
        ..SetOptions::default()
    };
    let long_domain = SetOptions { home_domain: Some("a".repeat(33)), ..SetOptions::default() };
    let removal = OperationOptions::new(OperationKind::SetOptions(SetOptions {
        signer: Some(Signer { address: ISSUER.to_string(), weight: 0 }),
        ..SetOptions::default()
    }));

    assert!(matches!(set_options(&bad_inflation, None), Err(OperationError::InvalidAccountId { field: "inflationDest" })));
    assert!(matches!(set_options(&bad_signer, None), Err(OperationError::InvalidAccountId { field: "signer.address" })));
    assert!(matches!(set_options(&long_domain, None), Err(OperationError::InvalidHomeDomain)));
    assert_eq!(round_trip(&removal)?, removal);

    Ok(())
}

#[test]
fn test_empty_set_options_round_trips_to_empty() -> Result<()> {
    let options = OperationOptions::new(OperationKind::SetOptions(SetOptions::default()));

    assert_eq!(round_trip(&options)?, options);

    Ok(())
}

#[test]
fn test_manage_offer_allows_zero_amount_but_not_negative() -> Result<()> {
    let deletion = manage_offer_fields("0", Some(PriceInput::ratio(1, 1)));
    let negative = manage_offer_fields("-1", Some(PriceInput::ratio(1, 1)));

    assert!(manage_offer(&deletion, None).is_ok());
    assert!(matches!(
        manage_offer(&negative, None),
        Err(OperationError::InvalidAmount { field: "amount", reason: NumericError::Negative })
    ));

    Ok(())
}

#[test]
fn test_manage_offer_defaults_offer_id_and_validates_it() -> Result<()> {
    let OperationBody::ManageSellOffer(op) = manage_offer(&manage_offer_fields("5", Some(PriceInput::ratio(1, 2))), None)?.body else {
        return Err(anyhow!("expected a manageOffer body"))
    };

    assert_eq!(op.offer_id, 0);

    let mut fields = manage_offer_fields("5", Some(PriceInput::ratio(1, 2)));
    fields.offer_id = Some("abc".to_string());

    assert!(matches!(manage_offer(&fields, None), Err(OperationError::InvalidOfferId(_))));

    fields.offer_id = Some("-1".to_string());

    assert!(matches!(manage_offer(&fields, None), Err(OperationError::InvalidOfferId(_))));

    fields.offer_id = Some(i64::MAX.to_string());

    assert!(manage_offer(&fields, None).is_ok());

    Ok(())
}

#[test]
fn test_offer_price_is_required_and_positive() -> Result<()> {
    let missing = manage_offer_fields("5", None);
    let negative = manage_offer_fields("5", Some(PriceInput::ratio(-1, 2)));
    let passive = CreatePassiveOffer {
        selling: Asset::native(),
        buying: usd(),
        amount: "5".to_string(),
        price: None
    };

    assert!(matches!(manage_offer(&missing, None), Err(OperationError::PriceRequired)));
    assert!(matches!(manage_offer(&negative, None), Err(OperationError::InvalidPrice(NumericError::NonPositivePrice))));
    assert!(matches!(
        build_operation(&OperationOptions::new(OperationKind::CreatePassiveOffer(passive))),
        Err(OperationError::PriceRequired)
    ));

    Ok(())
}

#[test]
fn test_offer_price_decimal_is_approximated_and_ratio_is_kept() -> Result<()> {
    let decimal = manage_offer(&manage_offer_fields("5", Some(PriceInput::decimal("0.5"))), None)?;
    let ratio = manage_offer(&manage_offer_fields("5", Some(PriceInput::ratio(1, 3))), None)?;

    let (OperationBody::ManageSellOffer(decimal_op), OperationBody::ManageSellOffer(ratio_op)) = (&decimal.body, &ratio.body) else {
        return Err(anyhow!("expected manageOffer bodies"))
    };

    assert_eq!(decimal_op.price, Price { n: 1, d: 2 });
    assert_eq!(ratio_op.price, Price { n: 1, d: 3 });

    let OperationKind::ManageOffer(decoded) = operation_to_options(&ratio)?.kind else {
        return Err(anyhow!("expected manageOffer options"))
    };

    let Some(PriceInput::Decimal(rendered)) = decoded.price else {
        return Err(anyhow!("expected a decimal price"))
    };

    assert!(rendered.starts_with("0.333333"), "rendered [{rendered}]");

    Ok(())
}

#[test]
fn test_passive_offer_requires_a_positive_amount() {
    let zero = CreatePassiveOffer {
        selling: Asset::native(),
        buying: usd(),
        amount: "0".to_string(),
        price: Some(PriceInput::ratio(1, 1))
    };

    assert!(matches!(
        build_operation(&OperationOptions::new(OperationKind::CreatePassiveOffer(zero))),
        Err(OperationError::InvalidAmount { reason: NumericError::Zero, .. })
    ));
}

#[test]
fn test_decode_rejects_unknown_operation_types() {
    // source absent, operation type 17 (no body)
    assert!(matches!(decode_operation_base64("AAAAAAAAABE="), Err(OperationError::UnknownOperation(17))));
    // source absent, operation type 42
    assert!(matches!(decode_operation_base64("AAAAAAAAACo="), Err(OperationError::Xdr(_))));
}

#[test]
fn test_inflation_without_source_has_canonical_encoding() -> Result<()> {
    let options = OperationOptions::new(OperationKind::Inflation);
    let operation = build_operation(&options)?;

    assert_eq!(operation.to_xdr(Limits::none())?, vec![0, 0, 0, 0, 0, 0, 0, 9]);
    assert_eq!(encode_operation_base64(&options)?, "AAAAAAAAAAk=");
    assert_eq!(decode_operation_base64("AAAAAAAAAAk=\n")?, options);

    Ok(())
}

#[test]
fn test_decode_rejects_trailing_bytes_and_bad_base64() {
    assert!(matches!(decode_operation_base64("AAAAAAAAAAkAAAAA"), Err(OperationError::Xdr(_))));
    assert!(matches!(decode_operation_base64("not base64!"), Err(OperationError::Xdr(_))));
}

#[test]
fn test_allow_trust_code_keeps_nul_padding_on_the_wire() -> Result<()> {
    let fields = AllowTrust {
        trustor: DESTINATION.to_string(),
        asset_code: "USD".to_string(),
        authorize: true
    };

    let bytes = allow_trust(&fields, None)?.to_xdr(Limits::none())?;
    let code_offset = 4 + 4 + 4 + 32 + 4;

    assert_eq!(&bytes[code_offset..code_offset + 4], b"USD\0");
    assert_eq!(&bytes[code_offset + 4..], &[0, 0, 0, 1]);

    Ok(())
}

#[test]
fn test_decode_rejects_authorize_flags_other_than_zero_or_one() {
    let operation = Operation {
        source_account: None,
        body: OperationBody::AllowTrust(xdr::AllowTrustOp {
            trustor: account_id(1),
            asset: AssetCode::CreditAlphanum4(AssetCode4(*b"USD\0")),
            authorize: 2
        })
    };

    assert!(matches!(operation_to_options(&operation), Err(OperationError::InvalidAuthorize(2))));
}

#[test]
fn test_decode_rejects_multiplexed_accounts() {
    let muxed = MuxedAccount::MuxedEd25519(MuxedAccountMed25519 { id: 7, ed25519: Uint256([1u8; 32]) });
    let merge = Operation {
        source_account: None,
        body: OperationBody::AccountMerge(muxed.clone())
    };
    let sourced = Operation {
        source_account: Some(muxed),
        body: OperationBody::Inflation
    };

    assert!(matches!(operation_to_options(&merge), Err(OperationError::InvalidAccountId { field: "destination" })));
    assert!(matches!(operation_to_options(&sourced), Err(OperationError::InvalidSource)));
}

#[test]
fn test_decode_rejects_zero_denominator_prices() -> Result<()> {
    let operation = Operation {
        source_account: None,
        body: OperationBody::CreatePassiveSellOffer(xdr::CreatePassiveSellOfferOp {
            selling: xdr::Asset::Native,
            buying: xdr::Asset::Native,
            amount: 1,
            price: Price { n: 1, d: 0 }
        })
    };

    assert!(matches!(operation_to_options(&operation), Err(OperationError::InvalidPrice(NumericError::DivisionByZero))));
    assert!(matches!(
        decode_operation_base64(&operation.to_xdr_base64(Limits::none())?),
        Err(OperationError::InvalidPrice(_))
    ));

    Ok(())
}

#[test]
fn test_decode_renders_exact_amount_strings() -> Result<()> {
    let operation = Operation {
        source_account: None,
        body: OperationBody::CreateAccount(xdr::CreateAccountOp {
            destination: account_id(1),
            starting_balance: 1_000_000_000
        })
    };

    let OperationKind::CreateAccount(decoded) = operation_to_options(&operation)?.kind else {
        return Err(anyhow!("expected createAccount options"))
    };

    assert_eq!(decoded.destination, DESTINATION);
    assert_eq!(decoded.starting_balance, "100");

    Ok(())
}
