//! carefinder-match
//!
//! Keyword rule tables that turn free text into a specialty, a severity and
//! an insurance provider tag. Everything here is pure and allocation-light.

pub mod advice;
pub mod insurance;
pub mod rules;
pub mod symptom;

pub use advice::{home_care_advice, CareAdvice};
pub use insurance::{
    accepts_provider, detect_provider_from_policy, provider_in_text, search_insurance_policy, PolicyMatch,
};
pub use symptom::{analyze_symptoms, SymptomAnalysis};
