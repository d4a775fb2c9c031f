use reminder_core::{ContractSnapshot, RenewalStatus};

#[test]
fn decodes_contract_form_payload() {
    let value = serde_json::json!({
        "produit": "Prévoyance TNS",
        "per_existant": false,
        "assurance_vie_existante": true,
        "rachat_effectue": true,
        "contrat_renouvellement_remplacement": "remplacement"
    });

    let contract: ContractSnapshot = serde_json::from_value(value).unwrap();
    assert_eq!(contract.product, "Prévoyance TNS");
    assert_eq!(contract.has_existing_retirement_plan, Some(false));
    assert!(contract.holds_life_insurance());
    assert!(contract.is_buyback_performed());
    assert_eq!(contract.renewal_status, RenewalStatus::Replacement);
}

#[test]
fn missing_flags_stay_absent_and_read_as_false() {
    let contract: ContractSnapshot =
        serde_json::from_value(serde_json::json!({ "produit": "Mutuelle" })).unwrap();

    assert_eq!(contract, ContractSnapshot::new("Mutuelle"));
    assert_eq!(contract.has_existing_retirement_plan, None);
    assert!(!contract.holds_retirement_plan());
    assert!(!contract.holds_life_insurance());
    assert!(!contract.is_buyback_performed());
    assert_eq!(contract.renewal_status, RenewalStatus::Unset);
}

#[test]
fn empty_renewal_status_is_unset_not_new() {
    let contract: ContractSnapshot = serde_json::from_value(serde_json::json!({
        "produit": "Prévoyance",
        "contrat_renouvellement_remplacement": ""
    }))
    .unwrap();

    assert_eq!(contract.renewal_status, RenewalStatus::Unset);
    assert_ne!(contract.renewal_status, RenewalStatus::New);
}

#[test]
fn null_renewal_status_is_unset() {
    let contract: ContractSnapshot = serde_json::from_value(serde_json::json!({
        "produit": "Prévoyance",
        "per_existant": null,
        "contrat_renouvellement_remplacement": null
    }))
    .unwrap();

    assert_eq!(contract.renewal_status, RenewalStatus::Unset);
    assert_eq!(contract.has_existing_retirement_plan, None);
}

#[test]
fn unknown_renewal_status_is_rejected() {
    let err = serde_json::from_value::<ContractSnapshot>(serde_json::json!({
        "produit": "Prévoyance",
        "contrat_renouvellement_remplacement": "resiliation"
    }))
    .unwrap_err();

    assert!(
        err.to_string().contains("unknown renewal status `resiliation`"),
        "unexpected error: {err}"
    );
}

#[test]
fn serializes_with_form_field_names() {
    let contract = ContractSnapshot::new("PER Individuel")
        .with_existing_retirement_plan(true)
        .with_renewal_status(RenewalStatus::Renewal);

    let json = serde_json::to_value(&contract).unwrap();
    assert_eq!(json["produit"], "PER Individuel");
    assert_eq!(json["per_existant"], true);
    assert_eq!(json["contrat_renouvellement_remplacement"], "renouvellement");
    assert!(json.get("assurance_vie_existante").is_none());
}

#[test]
fn only_renewal_and_replacement_replace_a_previous_contract() {
    assert!(RenewalStatus::Renewal.replaces_previous_contract());
    assert!(RenewalStatus::Replacement.replaces_previous_contract());
    assert!(!RenewalStatus::New.replaces_previous_contract());
    assert!(!RenewalStatus::Unset.replaces_previous_contract());
    assert_eq!(RenewalStatus::parse_form_value(" nouveau "), Some(RenewalStatus::New));
}
