mod common;

use carefinder_core::types::{ProviderTag, SourceKind};
use carefinder_match::search_insurance_policy;
use common::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn many_near(origin: carefinder_core::types::GeoPoint, n: usize) -> Vec<carefinder_core::types::HospitalRecord> {
    (0..n)
        .map(|i| {
            hospital(&i.to_string(), &format!("Clinic {i}"))
                .north_of(origin, 0.5 * (n - i) as f64)
                .insurance(if i % 2 == 0 { &["Star Health"] } else { &["PNB MetLife"] })
                .rating(3.5 + (i % 10) as f64 * 0.1)
                .build()
        })
        .collect()
}

#[test]
fn browse_is_nearest_first_and_capped_at_twenty() {
    let engine = engine(many_near(CHENNAI, 30), vec![hospital("c1", "GH Salem").at(CHENNAI).build()], vec![]);

    let hospitals = engine.get_hospitals(Some(CHENNAI));
    assert_eq!(hospitals.len(), 20);
    assert_eq!(hospitals[0].hospital.id, "29");
    assert!(hospitals.iter().all(|h| h.source == SourceKind::Nhis));
    assert!(hospitals.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn browse_without_location_is_a_seeded_shuffle() {
    let engine = engine(many_near(CHENNAI, 30), vec![], vec![]);

    let a = engine.get_hospitals_with_rng(None, &mut StdRng::seed_from_u64(7));
    let b = engine.get_hospitals_with_rng(None, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert_eq!(a.len(), 20);
    assert!(a.iter().all(|h| h.distance.is_none()));
    assert!(engine.get_hospitals(None).len() <= 20);
}

#[test]
fn policy_browse_returns_top_five_accepting_hospitals() {
    let engine = engine(many_near(CHENNAI, 30), vec![], vec![]);
    let star = search_insurance_policy("star health card").expect("policy");

    let near = engine.get_hospitals_by_policy(&star, Some(CHENNAI));
    assert_eq!(near.len(), 5);
    assert!(near.iter().all(|h| h.hospital.insurance.contains(&"Star Health".to_string())));
    assert_eq!(near[0].hospital.id, "28");

    let rated = engine.get_hospitals_by_policy(&star, None);
    assert_eq!(rated.len(), 5);
    assert!(rated.windows(2).all(|w| w[0].hospital.rating >= w[1].hospital.rating));
}

#[test]
fn issue_search_uses_policy_provider_and_symptoms() {
    let general = vec![
        hospital("1", "Heart Foundation").north_of(CHENNAI, 4.0).specialists(&["Cardiologist"]).build(),
        hospital("2", "Skin Clinic").north_of(CHENNAI, 1.0).specialists(&["Dermatologist"]).build(),
    ];
    let cmchis = vec![hospital("c1", "Cardiac Govt Hospital").north_of(CHENNAI, 2.0).specialists(&["Cardiologist"]).build()];
    let engine = engine(general, cmchis, vec![policy("INS-1", "Standard Health Cover")]);

    let found = engine.search_hospitals_by_issue("severe chest pain", Some(CHENNAI), Some("INS-1"));
    assert_eq!(found.detected_provider, Some(ProviderTag::NewHealthInsuranceScheme));
    assert_eq!(found.analysis.primary_specialty, "Cardiologist");
    assert!(found.analysis.is_emergency);
    let ids: Vec<_> = found.results.iter().map(|h| h.hospital.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);

    let by_text = engine.search_hospitals_by_issue("chest pain, I have a CMCHIS card", Some(CHENNAI), None);
    assert_eq!(by_text.detected_provider, Some(ProviderTag::Cmchis));
    assert!(by_text.results.iter().all(|h| h.source == SourceKind::Cmchis));
    assert_eq!(by_text.results.len(), 1);
}

#[test]
fn unknown_provider_is_reported_but_not_applied() {
    let general = vec![hospital("1", "Heart Foundation").north_of(CHENNAI, 4.0).specialists(&["Cardiologist"]).build()];
    let cmchis = vec![hospital("c1", "Cardiac Centre").north_of(CHENNAI, 2.0).specialists(&["Cardiologist"]).build()];
    let engine = engine(general, cmchis, vec![]);

    let found = engine.search_hospitals_by_issue("palpitation", Some(CHENNAI), Some("ZZ-404"));
    assert_eq!(found.detected_provider, Some(ProviderTag::Unknown));
    assert_eq!(found.stats.insurance_used, None);
    assert_eq!(found.results.len(), 2);
}

#[test]
fn emergency_search_falls_back_to_configured_location() {
    let general = vec![
        hospital("cbe", "Coimbatore Eye Clinic").north_of(COIMBATORE, 3.0).build(),
        hospital("cbe-gh", "Govt Hospital Coimbatore").north_of(COIMBATORE, 6.0).build(),
        hospital("chn", "Chennai Govt Hospital").at(CHENNAI).build(),
    ];
    let engine = engine(general, vec![], vec![]);

    let rec = engine.emergency_search(None);
    let ids: Vec<_> = rec.hospitals.iter().map(|h| h.hospital.id.as_str()).collect();
    assert_eq!(ids, vec!["cbe-gh", "cbe"]);

    let rec = engine.emergency_search(Some(CHENNAI));
    assert_eq!(rec.hospitals.len(), 1);
    assert_eq!(rec.hospitals[0].hospital.id, "chn");
}
