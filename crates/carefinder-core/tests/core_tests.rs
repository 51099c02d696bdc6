use std::fs;
use tempfile::TempDir;

use carefinder_core::config::{Config, DataSettings};
use carefinder_core::error::Error;
use carefinder_core::geo::district_centre;
use carefinder_core::loader::{apply_ingestion_defaults, load_hospitals, FixtureLoader, DEFAULT_SPECIALTY, UNKNOWN_HOSPITAL};
use carefinder_core::types::{FacilityType, SourceKind};
use figment::providers::{Format, Toml};
use figment::Figment;

const HOSPITALS: &str = r#"[
  {"id": 1, "name": "Apollo Multispeciality", "city": "Chennai", "specialists": ["Cardiologist"],
   "insurance": ["Star Health"], "fee": 500, "rating": 4.6, "location": {"lat": 13.06, "lng": 80.25}},
  {"id": 2, "name": "", "city": "Madurai", "specialists": [], "insurance": [], "fee": 300}
]"#;

const CMCHIS: &str = r#"[
  {"id": "cmchis-1", "name": "GH Salem", "district": "Salem", "specialists": ["General Medicine"],
   "insurance": ["CMCHIS"], "fee": 0, "rating": 4.1, "location": {"lat": 11.66, "lng": 78.14}}
]"#;

const COVERAGE: &str = r#"[
  {"id": "INS-1", "policyName": "Standard Health Cover", "coverageAmount": "500000", "type": "Individual"}
]"#;

fn write_fixtures(dir: &std::path::Path) {
    let data = dir.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("hospitalsData.json"), HOSPITALS).unwrap();
    fs::write(data.join("cmchisHospitals.json"), CMCHIS).unwrap();
    fs::write(data.join("coverageData.json"), COVERAGE).unwrap();
}

#[test]
fn loads_all_three_fixtures_into_a_store() {
    let tmp = TempDir::new().unwrap();
    write_fixtures(tmp.path());

    let store = FixtureLoader::new(&DataSettings::default(), tmp.path()).load_store().expect("load");

    assert_eq!(store.len(SourceKind::Nhis), 2);
    assert_eq!(store.len(SourceKind::Cmchis), 1);
    assert_eq!(store.coverage().len(), 1);
    assert!(store.find_policy("ins-1").is_some(), "policy ids match case-insensitively");
    assert!(store.find_policy("  INS-1 ").is_some());
    assert!(store.find_policy("INS-2").is_none());
    assert!(store.find_policy("").is_none());

    let cmchis: Vec<_> = store.hospitals(SourceKind::Cmchis).collect();
    assert_eq!(cmchis[0].facility_type, FacilityType::GovernmentEmpanelled);
}

#[test]
fn ingestion_defaults_fill_missing_fields() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("h.json");
    fs::write(&path, HOSPITALS).unwrap();

    let records = load_hospitals(&path).expect("load");
    let blank = &records[1];
    assert_eq!(blank.id, "2");
    assert_eq!(blank.name, UNKNOWN_HOSPITAL);
    assert_eq!(blank.specialists, vec![DEFAULT_SPECIALTY.to_string()]);
    assert_eq!(blank.location, district_centre("Madurai"), "city centre used when district is blank");
    assert_eq!(records[0].name, "Apollo Multispeciality");
}

#[test]
fn spreadsheet_style_records_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cmchis.json");
    fs::write(
        &path,
        r#"[{"id": "cmchis-1", "name": null, "district": "Salem", "contact": 9876543210,
             "specialists": ["Cardiologist"], "insurance": ["CMCHIS"], "fee": 0}]"#,
    )
    .unwrap();

    let records = load_hospitals(&path).expect("numeric contact and null name are accepted");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, UNKNOWN_HOSPITAL);
    assert_eq!(records[0].contact.as_deref(), Some("9876543210"));
    assert_eq!(records[0].location, district_centre("Salem"));
}

#[test]
fn defaults_report_every_kind_of_change() {
    let mut records: Vec<carefinder_core::types::HospitalRecord> = serde_json::from_str(
        r#"[
          {"id": 1, "name": "A", "specialists": [" Dentist "], "location": {"lat": 1.0, "lng": 2.0}},
          {"id": 2, "name": "B", "specialists": [""], "location": {"lat": 1.0, "lng": 2.0}},
          {"id": 3, "name": "C", "specialists": ["Dentist"], "location": {"lat": 1.0, "lng": 2.0}}
        ]"#,
    )
    .unwrap();

    assert!(apply_ingestion_defaults(&mut records[0]), "trimmed specialist");
    assert_eq!(records[0].specialists, vec!["Dentist".to_string()]);
    assert!(apply_ingestion_defaults(&mut records[1]), "blank replaced by default");
    assert_eq!(records[1].specialists, vec![DEFAULT_SPECIALTY.to_string()]);
    assert!(!apply_ingestion_defaults(&mut records[2]));
}

#[test]
fn missing_and_malformed_fixtures_are_reported() {
    let tmp = TempDir::new().unwrap();
    let missing = load_hospitals(&tmp.path().join("nope.json"));
    assert!(matches!(missing, Err(Error::NotFound(_))));

    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(load_hospitals(&bad), Err(Error::Fixture { .. })));
}

#[test]
fn settings_merge_over_defaults() {
    let figment = Figment::new().merge(Toml::string(
        "[search]\ndefault_radius_km = 25.0\n[data]\ndir = \"/srv/fixtures\"\n",
    ));
    let settings = Config::from_figment(figment).settings().expect("settings");
    assert_eq!(settings.search.default_radius_km, 25.0);
    assert_eq!(settings.search.result_cap, 50);
    assert_eq!(settings.search.browse_cap, 20);
    assert_eq!(settings.data.dir, "/srv/fixtures");
    assert_eq!(settings.data.coverage_file, "coverageData.json");
}

#[test]
fn zero_caps_are_rejected() {
    let figment = Figment::new().merge(Toml::string("[search]\nresult_cap = 0\n"));
    let settings = Config::from_figment(figment).settings().expect("settings");
    assert!(matches!(settings.search.validate(), Err(Error::InvalidConfig(_))));
}
