use sprout_protocols::catalog::{BuiltinLoader, ProtocolLoader};
use sprout_protocols::{
    Credit, DEFAULT_CEILING_THRESHOLD, ProtocolCatalog, ProtocolError, ScoreLevel,
    ScoreValueDomain,
};

#[test]
fn builtin_catalog_has_four_protocols() {
    let catalog = ProtocolCatalog::builtin().unwrap();
    let ids: Vec<_> = catalog.protocols().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["portage", "carolina", "ablls_r", "vb_mapp"]);
}

#[test]
fn builtin_protocols_pass_validation() {
    for protocol in BuiltinLoader.load().unwrap() {
        protocol.validate().unwrap();
        assert!(protocol.item_count() > 0, "{} has no items", protocol.id);
        assert_eq!(protocol.ceiling_threshold, DEFAULT_CEILING_THRESHOLD);
    }
}

#[test]
fn unknown_protocol_is_reported() {
    let catalog = ProtocolCatalog::builtin().unwrap();
    let err = catalog.get_protocol("bayley").unwrap_err();
    assert!(matches!(err, ProtocolError::ProtocolNotFound(id) if id == "bayley"));
}

#[test]
fn get_domain_resolves_and_reports_missing() {
    let catalog = ProtocolCatalog::builtin().unwrap();
    let domain = catalog.get_domain("carolina", "fine_motor").unwrap();
    assert_eq!(domain.name, "Fine Motor");
    assert_eq!(domain.item_count(), 8);

    let err = catalog.get_domain("carolina", "reading").unwrap_err();
    assert!(matches!(err, ProtocolError::DomainNotFound { .. }));
    let err = catalog.get_domain("nope", "reading").unwrap_err();
    assert!(matches!(err, ProtocolError::ProtocolNotFound(_)));
}

#[test]
fn item_and_sequence_lookup() {
    let catalog = ProtocolCatalog::builtin().unwrap();
    let item = catalog.get_item("portage", "lang-12-24-03").unwrap();
    assert_eq!(item.age_months, 24);
    assert_eq!(item.ordinal, 3);

    let sequence = catalog.find_sequence("vb_mapp", "echoic").unwrap();
    assert_eq!(sequence.items.len(), 5);
    assert!(catalog.get_item("portage", "car-fm-grasp-01").is_none());
}

#[test]
fn ceiling_threshold_override() {
    let mut catalog = ProtocolCatalog::builtin().unwrap();
    catalog.set_ceiling_threshold("carolina", 4).unwrap();
    assert_eq!(catalog.get_protocol("carolina").unwrap().ceiling_threshold, 4);
    assert_eq!(catalog.get_protocol("portage").unwrap().ceiling_threshold, 3);

    assert!(catalog.set_ceiling_threshold("carolina", 0).is_err());
    assert!(catalog.set_ceiling_threshold("nope", 2).is_err());
}

const SMALL_CATALOG: &str = r#"[
  {
    "id": "mini",
    "name": "Mini",
    "values": {
      "id": "two_state",
      "levels": [
        { "code": "no", "label": "No", "credit": "none" },
        { "code": "yes", "label": "Yes", "credit": "full" }
      ]
    },
    "age_referenced": true,
    "domains": [
      {
        "id": "motor",
        "name": "Motor",
        "sequences": [
          {
            "id": "walk",
            "name": "Walking",
            "items": [
              { "id": "w1", "text": "Stands", "age_months": 10, "ordinal": 1 },
              { "id": "w2", "text": "Walks", "age_months": 14, "ordinal": 2 }
            ]
          }
        ]
      }
    ]
  }
]"#;

#[test]
fn json_catalog_defaults_ceiling_threshold() {
    let catalog = ProtocolCatalog::from_json(SMALL_CATALOG).unwrap();
    let protocol = catalog.get_protocol("mini").unwrap();
    assert_eq!(protocol.ceiling_threshold, DEFAULT_CEILING_THRESHOLD);
    assert!(protocol.contains_item("w2"));
}

#[test]
fn json_catalog_rejects_unsorted_sequence() {
    let json = SMALL_CATALOG.replace(r#""ordinal": 2"#, r#""ordinal": 1"#);
    let err = ProtocolCatalog::from_json(&json).unwrap_err();
    assert!(matches!(err, ProtocolError::UnsortedSequence { item_id, .. } if item_id == "w2"));
}

#[test]
fn json_catalog_rejects_duplicate_items() {
    let json = SMALL_CATALOG.replace(r#""id": "w2""#, r#""id": "w1""#);
    let err = ProtocolCatalog::from_json(&json).unwrap_err();
    assert!(matches!(err, ProtocolError::DuplicateItem { .. }));
}

#[test]
fn duplicate_protocol_ids_are_rejected() {
    let mut protocols = BuiltinLoader.load().unwrap();
    protocols.push(protocols[0].clone());
    let err = ProtocolCatalog::new(protocols).unwrap_err();
    assert!(matches!(err, ProtocolError::DuplicateProtocol(id) if id == "portage"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ProtocolCatalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ProtocolError::Parse(_)));
}

#[test]
fn value_domain_must_start_with_no_credit() {
    let err = ScoreValueDomain::new(
        "bad",
        vec![
            ScoreLevel::new("yes", "Yes", Credit::Full),
            ScoreLevel::new("no", "No", Credit::None),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, ProtocolError::InvalidValueDomain { .. }));
}

#[test]
fn value_domain_needs_full_credit_level() {
    let err = ScoreValueDomain::new(
        "partial_only",
        vec![
            ScoreLevel::new("0", "0", Credit::None),
            ScoreLevel::new("1", "1", Credit::Partial),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, ProtocolError::InvalidValueDomain { .. }));
}
