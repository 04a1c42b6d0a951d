//! Tests for decoder module

use super::*;
use crate::error::Error;
use crate::models::{
    Account, AccountBalance, AccountBank, AccountStatus, AccountType, Transaction,
    TransactionSourceCategory,
};
use crate::types::Currency;
use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;

const ACCOUNT: &str = r#"{
  "id": "account_in71c4amph0vgo2qllky",
  "bank": "first_internet_bank",
  "closed_at": null,
  "created_at": "2020-01-31T23:59:59Z",
  "currency": "USD",
  "entity_id": "entity_n8y8tnk2p9339ti393yi",
  "idempotency_key": null,
  "informational_entity_id": null,
  "interest_accrued": "0.01",
  "interest_accrued_at": "2020-01-31",
  "interest_rate": "0.055",
  "name": "My first account!",
  "program_id": "program_i2v2os4mwza1oetokh9i",
  "status": "open",
  "type": "account"
}"#;

// ============================================================================
// DecoderConfig Tests
// ============================================================================

#[test]
fn test_decoder_config_default() {
    let config = DecoderConfig::default();
    assert_eq!(config.required_fields, RequiredFields::Lenient);
    assert!(config.log_extras);
    assert!(!config.is_strict());
}

#[test]
fn test_decoder_config_strict() {
    let config = DecoderConfig::strict().with_log_extras(false);
    assert!(config.is_strict());
    assert!(!config.log_extras);
}

#[test]
fn test_decoder_config_deserialize() {
    let config: DecoderConfig = serde_json::from_str(r#"{"required_fields": "strict"}"#).unwrap();
    assert!(config.is_strict());
    assert!(config.log_extras);
}

// ============================================================================
// Field Tests
// ============================================================================

#[test]
fn test_field_missing() {
    let field = Field::missing();
    assert_eq!(field.state(), FieldState::Missing);
    assert!(field.is_missing());
    assert!(!field.is_present());
    assert!(field.raw().is_none());
}

#[test]
fn test_field_from_raw() {
    let field = Field::from_raw(RawJson::from_string("500").unwrap());
    assert_eq!(field.state(), FieldState::Present);
    assert_eq!(field.raw().unwrap(), "500");

    let field = Field::from_raw(RawJson::from_string("null").unwrap());
    assert_eq!(field.state(), FieldState::Null);
    assert!(field.is_present());
    assert!(field.is_null());
}

#[test]
fn test_raw_json_rejects_invalid_text() {
    assert!(RawJson::from_string("{\"a\":").is_err());
    let raw = RawJson::from_string(r#"{"a": [1, 2]}"#).unwrap();
    assert_eq!(raw.as_bytes(), br#"{"a": [1, 2]}"#);
    assert_eq!(raw.parse::<serde_json::Value>().unwrap()["a"][1], 2);
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_decode_account_balance() {
    let body = br#"{"id":"acc_1","current_balance":500,"available_balance":450}"#;
    let balance: AccountBalance = decode(body).unwrap();

    assert_eq!(balance.id, "acc_1");
    assert_eq!(balance.current_balance, 500);
    assert_eq!(balance.available_balance, 450);
    assert!(balance.json.extras.is_empty());
    assert_eq!(balance.json.raw.as_bytes(), body);
}

#[test]
fn test_decode_unexpected_field_goes_to_extras() {
    let body = br#"{"id":"acc_1","current_balance":500,"unexpected_field":"x"}"#;
    let balance: AccountBalance = decode(body).unwrap();

    assert_eq!(balance.current_balance, 500);
    assert_eq!(balance.json.extras.len(), 1);
    assert_eq!(balance.json.extras["unexpected_field"], "\"x\"");
    assert!(balance.json.available_balance.is_missing());
    assert_eq!(balance.available_balance, 0);
}

// ============================================================================
// Presence and Raw Tests
// ============================================================================

#[test]
fn test_presence_tracks_keys_not_values() {
    let account: Account = decode(ACCOUNT.as_bytes()).unwrap();

    assert!(account.json.id.is_present());
    assert!(account.json.closed_at.is_present());
    assert!(account.json.closed_at.is_null());
    assert_eq!(account.closed_at, None);
    assert_eq!(account.json.closed_at.raw().unwrap(), "null");
    assert_eq!(account.json.interest_rate.raw().unwrap(), "\"0.055\"");
}

#[test]
fn test_presence_missing_keys() {
    let account: Account = decode(br#"{"id": "account_1"}"#).unwrap();

    assert_eq!(account.id, "account_1");
    assert!(account.json.id.is_present());
    for spec in Account::FIELDS.iter().filter(|spec| spec.key != "id") {
        let field = account.json.field(spec.key).unwrap();
        assert!(field.is_missing(), "{} should be missing", spec.key);
    }
}

#[test]
fn test_raw_is_verbatim_input() {
    let account: Account = decode(ACCOUNT.as_bytes()).unwrap();
    assert_eq!(account.json.raw, ACCOUNT);
    assert_eq!(account.json.raw(), ACCOUNT);
}

#[test]
fn test_null_for_non_nullable_field_uses_default() {
    let balance: AccountBalance =
        decode(br#"{"id": null, "current_balance": null, "available_balance": 1}"#).unwrap();

    assert_eq!(balance.id, "");
    assert_eq!(balance.current_balance, 0);
    assert!(balance.json.id.is_null());
    assert!(balance.json.current_balance.is_null());
}

// ============================================================================
// Typed Field Tests
// ============================================================================

#[test]
fn test_decode_account_typed_fields() {
    let account: Account = decode(ACCOUNT.as_bytes()).unwrap();

    assert_eq!(account.bank, AccountBank::FirstInternetBank);
    assert_eq!(
        account.created_at,
        Utc.with_ymd_and_hms(2020, 1, 31, 23, 59, 59).unwrap()
    );
    assert_eq!(account.currency, Currency::Usd);
    assert_eq!(
        account.interest_accrued_at,
        Some(NaiveDate::from_ymd_opt(2020, 1, 31).unwrap())
    );
    assert_eq!(account.status, AccountStatus::Open);
    assert_eq!(account.kind, AccountType::Account);
    assert_eq!(account.json.kind.raw().unwrap(), "\"account\"");
}

#[test]
fn test_enum_passthrough_for_unknown_values() {
    let body = ACCOUNT
        .replace("\"open\"", "\"frozen\"")
        .replace("\"USD\"", "\"MXN\"");
    let account: Account = decode(body.as_bytes()).unwrap();

    assert_eq!(account.status, AccountStatus::Unknown("frozen".to_string()));
    assert_eq!(account.status, "frozen");
    assert_eq!(account.currency.as_str(), "MXN");
    assert!(!account.currency.is_known());
}

#[test]
fn test_nested_models_carry_their_own_metadata() {
    let body = br#"{
        "id": "transaction_uyrp7fld2ium70oa7oi",
        "account_id": "account_in71c4amph0vgo2qllky",
        "amount": 100,
        "created_at": "2020-01-31T23:59:59Z",
        "currency": "USD",
        "description": "Interest",
        "route_id": null,
        "route_type": null,
        "source": {
            "category": "interest_payment",
            "interest_payment": {
                "accrued_on_account_id": "account_in71c4amph0vgo2qllky",
                "amount": 100,
                "currency": "USD",
                "period_end": "2020-01-31T23:59:59Z",
                "period_start": "2020-01-01T00:00:00Z",
                "rate_basis": "actual_360"
            },
            "future_detail": {"a": 1}
        },
        "type": "transaction"
    }"#;
    let transaction: Transaction = decode(body).unwrap();

    let source = &transaction.source;
    assert_eq!(source.category, TransactionSourceCategory::InterestPayment);
    assert!(source.json.account_transfer_intention.is_missing());
    assert_eq!(source.json.extras["future_detail"], r#"{"a": 1}"#);
    assert!(source.json.raw.starts_with('{'));
    assert!(source.json.raw.contains("\"interest_payment\""));

    let interest = source.interest_payment.as_ref().unwrap();
    assert_eq!(interest.amount, 100);
    assert_eq!(interest.json.extras["rate_basis"], "\"actual_360\"");

    assert!(transaction.json.extras.is_empty());
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_malformed_json_fails() {
    let err = decode::<AccountBalance>(br#"{"id": "acc_1", "#).unwrap_err();
    assert!(matches!(err, Error::MalformedJson { .. }));

    let err = decode::<AccountBalance>(b"{\"id\": \"\xff\"}").unwrap_err();
    assert!(matches!(err, Error::MalformedJson { .. }));
}

#[test]
fn test_non_object_fails() {
    let err = decode::<AccountBalance>(b"[]").unwrap_err();
    assert!(matches!(
        err,
        Error::NotAnObject { ref model, ref found } if model == "AccountBalance" && found == "array"
    ));
}

#[test]
fn test_type_mismatch_names_field() {
    let err = decode::<AccountBalance>(br#"{"id":"acc_1","current_balance":"500"}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::FieldType { ref model, ref field, .. }
            if model == "AccountBalance" && field == "current_balance"
    ));
}

#[test]
fn test_malformed_timestamp_fails() {
    let body = ACCOUNT.replace("2020-01-31T23:59:59Z", "yesterday");
    let err = decode::<Account>(body.as_bytes()).unwrap_err();
    assert_eq!(err.field(), Some("created_at"));
}

#[test]
fn test_nested_type_mismatch_names_outer_field() {
    let body = br#"{"id": "t", "source": {"category": "fee_payment", "fee_payment": {"amount": "x"}}}"#;
    let err = decode::<Transaction>(body).unwrap_err();

    assert_eq!(err.field(), Some("source"));
    assert!(err.to_string().contains("FeePayment.amount"));
}

// ============================================================================
// Required Field Policy Tests
// ============================================================================

#[test]
fn test_lenient_accepts_missing_required() {
    let balance: AccountBalance = Decoder::default().decode(br#"{"id": "acc_1"}"#).unwrap();
    assert!(balance.json.current_balance.is_missing());
}

#[test]
fn test_strict_rejects_missing_required() {
    let err = Decoder::strict()
        .decode::<AccountBalance>(br#"{"id": "acc_1", "available_balance": 1}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField { ref model, ref field }
            if model == "AccountBalance" && field == "current_balance"
    ));
}

#[test]
fn test_strict_allows_missing_optional_and_null_required() {
    let balance: AccountBalance = Decoder::strict()
        .decode(br#"{"id": "acc_1", "current_balance": null, "available_balance": 1}"#)
        .unwrap();
    assert!(balance.json.kind.is_missing());
    assert!(balance.json.current_balance.is_null());
}

// ============================================================================
// Serde Integration Tests
// ============================================================================

#[test]
fn test_serde_json_entry_point_matches_decode() {
    let via_serde: Account = serde_json::from_str(ACCOUNT).unwrap();
    let via_decode: Account = decode(ACCOUNT.as_bytes()).unwrap();

    assert_eq!(via_serde, via_decode);
    assert_eq!(via_serde.json, via_decode.json);
}

#[test]
fn test_round_trip_preserves_declared_fields() {
    let original = Account {
        id: "account_1".to_string(),
        bank: AccountBank::CoreBank,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        currency: Currency::Usd,
        entity_id: Some("entity_1".to_string()),
        interest_accrued: "1.25".to_string(),
        interest_accrued_at: NaiveDate::from_ymd_opt(2024, 4, 30),
        interest_rate: "0.04".to_string(),
        name: "Operating".to_string(),
        program_id: "program_1".to_string(),
        status: AccountStatus::Unknown("under_review".to_string()),
        kind: AccountType::Account,
        ..Default::default()
    };

    let bytes = serde_json::to_vec(&original).unwrap();
    let decoded: Account = decode(&bytes).unwrap();

    assert_eq!(decoded, original);
    assert_eq!(decoded.json.raw.as_bytes(), bytes.as_slice());
    assert!(decoded.json.extras.is_empty());
    assert!(Account::FIELDS
        .iter()
        .all(|spec| decoded.json.field(spec.key).unwrap().is_present()));
}

#[test]
fn test_serialize_uses_wire_keys_and_skips_metadata() {
    let balance: AccountBalance =
        decode(br#"{"id":"acc_1","current_balance":5,"available_balance":4,"type":"balance_lookup","x":1}"#)
            .unwrap();
    let value = serde_json::to_value(&balance).unwrap();

    assert_eq!(value["type"], "balance_lookup");
    assert!(value.get("kind").is_none());
    assert!(value.get("json").is_none());
    assert!(value.get("x").is_none());
}

// ============================================================================
// Field Table Tests
// ============================================================================

#[test]
fn test_field_table_mirrors_sidecar() {
    assert_eq!(Account::NAME, "Account");
    assert_eq!(Account::FIELDS.len(), 15);
    assert_eq!(Account::FIELDS.last().unwrap().key, "type");

    let account = Account::default();
    for spec in Account::FIELDS {
        assert!(account.json.field(spec.key).is_some(), "{}", spec.key);
    }
    assert!(account.json.field("kind").is_none());
    assert!(account.json.field("raw").is_none());
}

#[test]
fn test_inspection_reports_fields_and_extras() {
    let balance: AccountBalance =
        decode(br#"{"id":"acc_1","current_balance":500,"unexpected_field":"x"}"#).unwrap();
    let report = Inspection::of(&balance).unwrap();

    assert_eq!(report.model, "AccountBalance");
    assert_eq!(report.fields.len(), AccountBalance::FIELDS.len());
    assert_eq!(report.fields[0].key, "id");
    assert_eq!(report.fields[0].state, FieldState::Present);
    assert_eq!(report.missing_required(), vec!["available_balance"]);
    assert_eq!(report.extras["unexpected_field"], "\"x\"");
    assert_eq!(report.value["current_balance"], 500);
}
