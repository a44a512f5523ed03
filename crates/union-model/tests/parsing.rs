use union_model::{
    ActivityId, BigDecimal, BigInteger, Blockchain, ContractAddress, IdParseError, ItemId,
    NumberParseError, OrderId, OwnershipId, UnionAddress,
};

#[test]
fn every_variant_round_trips_on_every_chain() {
    for chain in Blockchain::ALL {
        let address = UnionAddress::new(chain, "abc");
        assert_eq!(address.to_string().parse::<UnionAddress>().unwrap(), address);

        let contract = ContractAddress::new(chain, "abc");
        assert_eq!(
            contract.to_string().parse::<ContractAddress>().unwrap(),
            contract
        );

        let order = OrderId::new(chain, "754");
        assert_eq!(order.to_string().parse::<OrderId>().unwrap(), order);

        let activity = ActivityId::new(chain, "754");
        assert_eq!(activity.to_string().parse::<ActivityId>().unwrap(), activity);

        let item = ItemId::new(chain, "abc", BigInteger::from(123u64));
        assert_eq!(item.to_string().parse::<ItemId>().unwrap(), item);

        let ownership = OwnershipId::new(chain, "abc", BigInteger::from(123u64), "xyz");
        assert_eq!(
            ownership.to_string().parse::<OwnershipId>().unwrap(),
            ownership
        );
    }
}

#[test]
fn decode_reads_the_chain_tag_once_and_propagates_it() {
    let ownership: OwnershipId = "FLOW:abc:123:xyz".parse().unwrap();
    assert_eq!(ownership.blockchain, Blockchain::Flow);
    assert_eq!(ownership.token, UnionAddress::new(Blockchain::Flow, "abc"));
    assert_eq!(ownership.owner, UnionAddress::new(Blockchain::Flow, "xyz"));
    assert_eq!(
        ownership.item_id(),
        ItemId::new(Blockchain::Flow, "abc", BigInteger::from(123u64))
    );
}

#[test]
fn trailing_delimiters_stay_in_the_final_free_form_segment() {
    let address: UnionAddress = "ETHEREUM:a:b".parse().unwrap();
    assert_eq!(address.value, "a:b");

    let ownership: OwnershipId = "FLOW:abc:123:xyz:extra".parse().unwrap();
    assert_eq!(ownership.owner.value, "xyz:extra");
    assert_eq!(ownership.to_string(), "FLOW:abc:123:xyz:extra");
}

#[test]
fn missing_segments_fail_as_malformed() {
    let err = "ETHEREUM".parse::<ItemId>().unwrap_err();
    assert!(matches!(
        err,
        IdParseError::Malformed {
            expected_segments: 3,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "malformed identifier 'ETHEREUM': expected 3 ':'-separated segments"
    );

    assert!(matches!(
        "".parse::<UnionAddress>(),
        Err(IdParseError::Malformed {
            expected_segments: 2,
            ..
        })
    ));
    assert!(matches!(
        "ETHEREUM:abc:123".parse::<OwnershipId>(),
        Err(IdParseError::Malformed {
            expected_segments: 4,
            ..
        })
    ));
}

#[test]
fn unknown_chain_tags_are_rejected() {
    assert!(matches!(
        "MARS:123".parse::<UnionAddress>(),
        Err(IdParseError::UnknownBlockchain { .. })
    ));
    // Tag matching is case-sensitive; the wire form has one spelling.
    assert!(matches!(
        "ethereum:123".parse::<OrderId>(),
        Err(IdParseError::UnknownBlockchain { .. })
    ));
}

#[test]
fn non_numeric_token_id_is_rejected() {
    assert!(matches!(
        "ETHEREUM:abc:xyz".parse::<ItemId>(),
        Err(IdParseError::InvalidTokenId { .. })
    ));
    assert!(matches!(
        "ETHEREUM:abc:1.5:xyz".parse::<OwnershipId>(),
        Err(IdParseError::InvalidTokenId { .. })
    ));
}

#[test]
fn extra_segments_after_a_numeric_tail_surface_as_invalid_token_id() {
    // The bounded split folds trailing text into the final segment; when that
    // segment is the token id, the surplus fails the integer parse.
    assert!(matches!(
        "POLYGON:abc:123:456".parse::<ItemId>(),
        Err(IdParseError::InvalidTokenId { .. })
    ));
}

#[test]
fn item_decode_accepts_denormalized_token_id() {
    let item: ItemId = "POLYGON:abc:0123".parse().unwrap();
    assert_eq!(item.token_id, BigInteger::from(123u64));
    assert_eq!(item.to_string(), "POLYGON:abc:123");
}

#[test]
fn big_integer_canonicalization() {
    assert_eq!(BigInteger::parse("007").unwrap().as_str(), "7");
    assert_eq!(BigInteger::parse("+7").unwrap().as_str(), "7");
    assert_eq!(BigInteger::parse("-007").unwrap().as_str(), "-7");
    assert_eq!(BigInteger::parse("000").unwrap().as_str(), "0");
    assert_eq!(BigInteger::parse("-0").unwrap().as_str(), "0");
}

#[test]
fn big_integer_keeps_every_digit() {
    let text = "10000000000000000000000000000000000000000000000000000000000";
    assert_eq!(BigInteger::parse(text).unwrap().as_str(), text);
}

#[test]
fn big_decimal_strips_trailing_zeros_without_rounding() {
    assert_eq!(
        BigDecimal::parse("0.000000000130000000").unwrap().as_str(),
        "0.00000000013"
    );
    assert_eq!(BigDecimal::parse("10.00").unwrap().as_str(), "10");
    assert_eq!(BigDecimal::parse("1.10").unwrap().as_str(), "1.1");
    // Integer trailing zeros are value-bearing and stay.
    assert_eq!(BigDecimal::parse("100").unwrap().as_str(), "100");
}

#[test]
fn all_zero_forms_collapse_to_bare_zero() {
    for raw in ["0", "0.000000000", "-0", "-0.000", "0E+7", "0e-7", ".0"] {
        assert_eq!(BigDecimal::parse(raw).unwrap().as_str(), "0", "input {raw}");
    }
}

#[test]
fn scientific_notation_expands_fully() {
    assert_eq!(BigDecimal::parse("1.3E-10").unwrap().as_str(), "0.00000000013");
    assert_eq!(BigDecimal::parse("1.3E+5").unwrap().as_str(), "130000");
    assert_eq!(BigDecimal::parse("1e3").unwrap().as_str(), "1000");
    assert_eq!(BigDecimal::parse("-2.5e-3").unwrap().as_str(), "-0.0025");
    assert_eq!(BigDecimal::parse("1.23e1").unwrap().as_str(), "12.3");
}

#[test]
fn scientific_and_plain_forms_of_one_value_are_equal() {
    let scientific = BigDecimal::parse("1.3E-10").unwrap();
    let plain = BigDecimal::parse("0.000000000130000000").unwrap();
    assert_eq!(scientific, plain);
}

#[test]
fn canonicalization_is_idempotent() {
    for raw in [
        "0.000000000130000000",
        "1.3E-10",
        "-42.5000",
        "0",
        "123456789.000000001",
        "5.",
        ".5",
    ] {
        let once = BigDecimal::parse(raw).unwrap();
        let twice = BigDecimal::parse(once.as_str()).unwrap();
        assert_eq!(once, twice, "input {raw}");
    }
}

#[test]
fn lenient_fraction_forms_parse() {
    assert_eq!(BigDecimal::parse(".5").unwrap().as_str(), "0.5");
    assert_eq!(BigDecimal::parse("5.").unwrap().as_str(), "5");
    assert_eq!(BigDecimal::parse("+0.50").unwrap().as_str(), "0.5");
}

#[test]
fn malformed_number_text_is_rejected() {
    for raw in ["", "abc", "1.2.3", "1e", "--1", "1 ", " 1", "0x10"] {
        assert!(
            matches!(
                BigDecimal::parse(raw),
                Err(NumberParseError::Malformed { .. })
            ),
            "input {raw:?}"
        );
    }
    assert!(matches!(
        BigInteger::parse("1.5"),
        Err(NumberParseError::Malformed { .. })
    ));
}

#[test]
fn unrepresentable_exponents_are_rejected() {
    // Exponent too wide for i64.
    assert!(matches!(
        BigDecimal::parse("1e99999999999999999999"),
        Err(NumberParseError::ExponentOverflow { .. })
    ));
    // Exponents that fit i64 but would expand to absurd digit counts must
    // come back as errors, not die allocating the padding.
    for raw in [
        "1e9223372036854775807",
        "1e-9223372036854775807",
        "1e100000000",
        "1e-100000000",
        "1.5E+9999999",
    ] {
        assert!(
            matches!(
                BigDecimal::parse(raw),
                Err(NumberParseError::ExponentOverflow { .. })
            ),
            "input {raw}"
        );
    }
    // Large but representable exponents still expand.
    let wide = BigDecimal::parse("1e1000").unwrap();
    assert_eq!(wide.as_str().len(), 1001);
    assert!(wide.as_str().starts_with('1'));
}
