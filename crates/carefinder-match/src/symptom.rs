//! Free-text symptom triage.

use serde::Serialize;

use crate::rules::{all_matches, contains_any, KeywordRule};

pub const GENERAL_MEDICINE: &str = "General Medicine";

/// Primary specialties at or above this severity are emergencies.
pub const EMERGENCY_SEVERITY: u8 = 9;

/// Keyword sets → (specialty, severity). Order breaks severity ties.
pub const SYMPTOM_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::contains(
        &["heart", "chest pain", "palpitation", "breathless", "breathing", "cardiac", "blood pressure"],
        "Cardiologist",
        10,
    ),
    KeywordRule::contains(&["stroke", "paralysis", "seizure", "fits", "unconscious"], "Neurologist", 9),
    KeywordRule::contains(&["fracture", "accident", "trauma", "broken bone"], "Orthopedic Surgeon", 8),
    KeywordRule::contains(&["cancer", "tumor", "tumour", "chemo", "radiation", "onco"], "Oncologist", 7),
    KeywordRule::contains(&["kidney", "dialysis", "renal", "urine"], "Nephrologist", 7),
    KeywordRule::contains(
        &["pregnant", "pregnancy", "delivery", "maternity", "periods", "women"],
        "Gynecologist",
        6,
    ),
    KeywordRule::contains(&["headache", "migraine", "brain", "nerves", "dizziness"], "Neurologist", 6),
    KeywordRule::contains(&["child", "infant", "newborn", "baby", "peds"], "Pediatrician", 5),
    KeywordRule::contains(&["bone", "joint pain", "knee", "spine", "back pain", "ortho"], "Orthopedic Surgeon", 5),
    KeywordRule::contains(&["eye", "vision", "cataract", "blur", "spectacles"], "Ophthalmologist", 4),
    KeywordRule::contains(
        &["ear pain", "earache", "ear infection", "hearing", "nose", "throat", "sinus", "tonsil"],
        "ENT Specialist",
        4,
    ),
    KeywordRule::contains(&["scan", "x-ray", "mri", "ultrasound", "imaging"], "Radiologist", 4),
    KeywordRule::contains(&["skin", "rash", "itching", "acne", "hair fall"], "Dermatologist", 3),
    KeywordRule::contains(&["tooth", "teeth", "gum", "cavity", "dental"], "Dentist", 3),
    KeywordRule::contains(&["fever", "cold", "cough", "flu", "body pain", "fatigue"], "General Physician", 3),
];

/// Words that make a matched request urgent regardless of its severity.
pub const EMERGENCY_KEYWORDS: &[&str] =
    &["emergency", "accident", "bleeding", "heart attack", "ambulance", "unconscious", "trauma"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub primary_specialty: String,
    pub secondary_specialties: Vec<String>,
    pub is_emergency: bool,
    /// `None` when no rule matched.
    pub severity: Option<u8>,
}

/// Rank every matching rule by severity; the highest becomes the primary
/// specialty. A specialty appears at most once, at its highest severity.
///
/// Text that matches no rule is never an emergency.
pub fn analyze_symptoms(text: &str) -> SymptomAnalysis {
    let mut matched = all_matches(SYMPTOM_RULES, text);
    if matched.is_empty() {
        return SymptomAnalysis {
            primary_specialty: GENERAL_MEDICINE.to_string(),
            secondary_specialties: Vec::new(),
            is_emergency: false,
            severity: None,
        };
    }

    // stable: equal severities keep table order
    matched.sort_by(|a, b| b.priority.cmp(&a.priority));
    let mut specialties: Vec<&str> = Vec::with_capacity(matched.len());
    for rule in &matched {
        if !specialties.contains(&rule.result) {
            specialties.push(rule.result);
        }
    }

    let severity = matched[0].priority;
    SymptomAnalysis {
        primary_specialty: specialties[0].to_string(),
        secondary_specialties: specialties[1..].iter().map(|s| s.to_string()).collect(),
        is_emergency: severity >= EMERGENCY_SEVERITY || contains_any(text, EMERGENCY_KEYWORDS),
        severity: Some(severity),
    }
}
