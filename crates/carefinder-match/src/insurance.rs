//! Insurance provider resolution.
//!
//! Matching is substring-based, not exact, so look-alike provider names can
//! collide.

use serde::Serialize;

use carefinder_core::store::DatasetStore;
use carefinder_core::types::ProviderTag;

use crate::rules::{contains_any, first_match, KeywordRule};

/// Plan names that identify a New Health Insurance Scheme policy.
const NHIS_PLAN_MARKERS: &[&str] = &["standard health", "new health"];

/// Applied to policy ids that are not in the coverage table.
pub const POLICY_ID_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::prefix(&["mdi", "ma"], "MA"),
    KeywordRule::contains(&["hitpa"], "HI TPA", 0),
    KeywordRule::contains(&["vidal", "ttk"], "Vidal", 0),
    KeywordRule::contains(&["star"], "Star Health", 0),
    KeywordRule::contains(&["new health", "cmchis"], "New Health Insurance Scheme", 0),
];

/// Display names a user might type, in lookup order.
pub const KNOWN_POLICIES: &[&str] = &[
    "New Health Insurance Scheme",
    "Star Health",
    "MDIndia",
    "Pro Health",
    "Vidal",
    "Heritage",
    "PMJAY",
    "Ayushman Bharat",
    "CMCHIS",
];

/// Display name → provider key. Government schemes all resolve to CMCHIS here.
const DISPLAY_NAME_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::contains(&["new health", "cmchis", "ayushman", "pmjay"], "CMCHIS", 0),
    KeywordRule::contains(&["star"], "Star Health", 0),
    KeywordRule::contains(&["mdindia"], "MA", 0),
    KeywordRule::contains(&["vidal"], "Vidal", 0),
    KeywordRule::contains(&["heritage"], "HI TPA", 0),
];

/// Insurance mentions inside a conversational query.
const TEXT_MENTION_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::contains(&["cmchis", "chief minister"], "CMCHIS", 0),
    KeywordRule::contains(&["new health", "nhis"], "New Health Insurance Scheme", 0),
    KeywordRule::contains(&["star health"], "Star Health", 0),
    KeywordRule::contains(&["mdindia", "md india"], "MA", 0),
];

/// A known policy display name found in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyMatch {
    pub policy_name: String,
    pub provider_match_string: ProviderTag,
}

/// Resolve a policy id to a provider tag.
///
/// A coverage-table hit maps on the plan name: New Health / Standard Health
/// plans are NHIS and every other plan is reported as CMCHIS.
// FIXME: the CMCHIS default misfiles NHIS plans whose names carry neither
// marker; needs a provider column in the coverage fixture to resolve.
pub fn detect_provider_from_policy(store: &DatasetStore, policy_id: &str) -> ProviderTag {
    if let Some(policy) = store.find_policy(policy_id) {
        return if contains_any(&policy.policy_name, NHIS_PLAN_MARKERS) {
            ProviderTag::NewHealthInsuranceScheme
        } else {
            ProviderTag::Cmchis
        };
    }
    first_match(POLICY_ID_RULES, policy_id.trim())
        .map(|r| ProviderTag::from(r.result))
        .unwrap_or(ProviderTag::Unknown)
}

/// Find the first known policy display name mentioned in `query`.
pub fn search_insurance_policy(query: &str) -> Option<PolicyMatch> {
    let lowered = query.to_lowercase();
    KNOWN_POLICIES
        .iter()
        .find(|name| lowered.contains(&name.to_lowercase()))
        .map(|name| PolicyMatch {
            policy_name: (*name).to_string(),
            provider_match_string: provider_for_display_name(name),
        })
}

pub fn provider_for_display_name(name: &str) -> ProviderTag {
    first_match(DISPLAY_NAME_RULES, name)
        .map(|r| ProviderTag::from(r.result))
        .unwrap_or(ProviderTag::Unknown)
}

/// Provider the user names in a chat message, if any.
pub fn provider_in_text(text: &str) -> Option<ProviderTag> {
    first_match(TEXT_MENTION_RULES, text).map(|r| ProviderTag::from(r.result))
}

/// Whether a hospital's accepted-insurance list covers `provider`.
pub fn accepts_provider(insurance: &[String], provider: &ProviderTag) -> bool {
    if provider.is_unknown() {
        return false;
    }
    let wanted = provider.as_str().to_lowercase();
    insurance.iter().any(|ins| {
        let ins_lower = ins.to_lowercase();
        ins_lower.contains(&wanted)
            || match provider {
                ProviderTag::NewHealthInsuranceScheme => ins.contains("New Health") || ins.contains("CMCHIS"),
                ProviderTag::Ma => ins.starts_with("MDI") || ins == "MA",
                _ => false,
            }
    })
}
