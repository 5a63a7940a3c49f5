use std::fs;
use std::path::PathBuf;

use argent_models::{
    Account, AccountStatus, AllergyIntolerance, Appointment, Bundle, ChoiceType, Claim,
    Condition, Consent, Device, Encounter, Error, Observation, ObservationValue,
    OperationOutcome, Organization, Patient, Practitioner, Resource,
};
use argent_testkit::assert_round_trip;
use serde_json::Value;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fhir-test-cases")
}

fn examples_dir() -> PathBuf {
    fixtures_root().join("r5/examples")
}

fn load_fixture(name: &str) -> Vec<u8> {
    let path = examples_dir().join(name);
    assert!(path.exists(), "fixture missing at {:?}", path);
    fs::read(&path).unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
}

/// Discover every example fixture in the corpus.
fn discover_fixtures() -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(examples_dir())
        .expect("failed to list example fixtures")
        .flatten()
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();
    names
}

fn resource_type_of(bytes: &[u8]) -> String {
    let value: Value = serde_json::from_slice(bytes).expect("fixture is not valid JSON");
    value["resourceType"]
        .as_str()
        .expect("fixture has no resourceType")
        .to_string()
}

fn assert_fixture_round_trips(label: &str, resource_type: &str, bytes: &[u8]) {
    match resource_type {
        "Account" => assert_round_trip::<Account>(label, bytes),
        "AllergyIntolerance" => assert_round_trip::<AllergyIntolerance>(label, bytes),
        "Appointment" => assert_round_trip::<Appointment>(label, bytes),
        "Bundle" => assert_round_trip::<Bundle>(label, bytes),
        "Claim" => assert_round_trip::<Claim>(label, bytes),
        "Condition" => assert_round_trip::<Condition>(label, bytes),
        "Consent" => assert_round_trip::<Consent>(label, bytes),
        "Device" => assert_round_trip::<Device>(label, bytes),
        "Encounter" => assert_round_trip::<Encounter>(label, bytes),
        "Observation" => assert_round_trip::<Observation>(label, bytes),
        "OperationOutcome" => assert_round_trip::<OperationOutcome>(label, bytes),
        "Organization" => assert_round_trip::<Organization>(label, bytes),
        "Patient" => assert_round_trip::<Patient>(label, bytes),
        "Practitioner" => assert_round_trip::<Practitioner>(label, bytes),
        other => panic!("{label}: no model for resourceType {other}"),
    }
}

#[test]
fn every_fixture_round_trips() {
    let fixtures = discover_fixtures();
    assert!(
        !fixtures.is_empty(),
        "no fixtures found in {}",
        examples_dir().display()
    );

    for name in &fixtures {
        let bytes = load_fixture(name);
        let resource_type = resource_type_of(&bytes);
        assert_fixture_round_trips(name, &resource_type, &bytes);
    }
}

#[test]
fn discriminator_matches_decoded_type() {
    for name in discover_fixtures() {
        let bytes = load_fixture(&name);
        let expected = resource_type_of(&bytes);
        let resource = Resource::from_slice(&bytes)
            .unwrap_or_else(|err| panic!("{name}: dispatch failed: {err}"));
        assert_eq!(resource.resource_type(), expected, "{name}");
    }
}

#[test]
fn dispatch_rejects_unknown_resource_type() {
    let err = Resource::from_slice(br#"{"resourceType": "Specimen", "id": "x"}"#).unwrap_err();
    assert!(matches!(err, Error::UnknownResourceType(name) if name == "Specimen"));
}

#[test]
fn allergy_example_has_patient_reference() {
    let bytes = load_fixture("allergyintolerance-example.json");
    let allergy: AllergyIntolerance = serde_json::from_slice(&bytes).unwrap();

    let reference = allergy.patient.reference.as_deref().unwrap_or_default();
    assert!(!reference.is_empty(), "patient reference must be populated");
}

#[test]
fn observation_value_choice_populates_exactly_one_key() {
    let bytes = load_fixture("observation-example.json");
    let observation: Observation = serde_json::from_slice(&bytes).unwrap();
    assert!(observation.value.is_some());

    // At most one variant is representable; re-encoding must therefore write
    // exactly one key of the value[x] group.
    let encoded = serde_json::to_value(&observation).unwrap();
    let object = encoded.as_object().unwrap();
    let value_keys: Vec<&str> = ObservationValue::KEYS
        .iter()
        .copied()
        .filter(|key| object.contains_key(*key))
        .collect();
    assert_eq!(value_keys, vec!["valueQuantity"]);
}

#[test]
fn account_with_guarantor_scenario() {
    let bytes = load_fixture("account-example-with-guarantor.json");
    let account: Account = serde_json::from_slice(&bytes).unwrap();

    let guarantors = account.guarantors();
    assert!(!guarantors.is_empty(), "guarantor must be populated");
    for guarantor in guarantors {
        let party = guarantor.party.reference.as_deref().unwrap_or_default();
        assert!(!party.is_empty(), "guarantor party must reference a party");
    }
    assert!(AccountStatus::ALL.contains(&account.status));
}

#[test]
fn appointment_with_two_doctors_scenario() {
    let bytes = load_fixture("appointment-example2doctors.json");
    let appointment: Appointment = serde_json::from_slice(&bytes).unwrap();

    assert!(appointment.participants().len() >= 2);
    assert!(!appointment.status.as_str().is_empty());

    let practitioners: Vec<_> = appointment
        .participants()
        .iter()
        .filter_map(|p| p.actor.as_ref())
        .filter_map(|actor| actor.reference.as_deref())
        .filter(|reference| reference.starts_with("Practitioner/"))
        .collect();
    assert_eq!(practitioners.len(), 2);
}

#[test]
fn bundle_entries_decode_through_dispatch() {
    let bytes = load_fixture("bundle-example.json");
    let bundle: Bundle = serde_json::from_slice(&bytes).unwrap();

    assert!(bundle.is_searchset());
    assert!(bundle.entry_count() >= 2);

    for entry in bundle.entries() {
        let resource_json = entry.resource.as_ref().expect("entry carries a resource");
        let resource = Resource::from_value(resource_json).expect("entry resource decodes");
        assert!(resource.id().is_some());
    }
}

#[test]
fn round_trip_is_idempotent_through_dispatch() {
    for name in discover_fixtures() {
        let bytes = load_fixture(&name);
        let first = Resource::from_slice(&bytes).unwrap();
        let reencoded = first.to_value().unwrap();
        let second = Resource::from_value(&reencoded).unwrap();
        assert_eq!(first, second, "{name}: dispatch round trip changed the value");
    }
}
