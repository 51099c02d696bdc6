//! Domain types shared by the matcher, the engine and the CLI.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub type HospitalId = String;

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A facility entry as stored in a fixture.
///
/// - `id`: unique only within its source dataset; numeric ids are kept as text
/// - `location`: absent records cannot take part in radius queries
/// - `specialists`: never empty once loaded (defaults to "General Medicine")
/// - `fee`: consultation cost, `0` for scheme-covered facilities
///
/// Classification (`type`, `emergency`) is never stored here; see
/// [`crate::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalRecord {
    #[serde(deserialize_with = "text_or_number")]
    pub id: HospitalId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub district: String,
    #[serde(default, deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text", skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub specialists: Vec<String>,
    #[serde(default)]
    pub insurance: Vec<String>,
    #[serde(default)]
    pub fee: u32,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl HospitalRecord {
    /// Composite identity used for deduplication across datasets.
    pub fn dedup_key(&self) -> String {
        format!("{}-{}", self.id, self.name)
    }
}

/// An insurance policy from the coverage table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveragePolicy {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub policy_name: String,
    pub coverage_amount: CoverageAmount,
    #[serde(rename = "type")]
    pub policy_type: String,
}

/// Face value of a policy; spreadsheets export it either as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoverageAmount {
    Amount(serde_json::Number),
    Text(String),
}

impl fmt::Display for CoverageAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Derived facility classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    Government,
    Multispeciality,
    Specialty,
    #[serde(rename = "Government Empanelled")]
    GovernmentEmpanelled,
}

impl FacilityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::Multispeciality => "Multispeciality",
            Self::Specialty => "Specialty",
            Self::GovernmentEmpanelled => "Government Empanelled",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived emergency availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmergencyAvailability {
    #[serde(rename = "Available 24/7")]
    Available24x7,
    #[serde(rename = "On Call / Limited")]
    OnCallLimited,
}

impl EmergencyAvailability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available24x7 => "Available 24/7",
            Self::OnCallLimited => "On Call / Limited",
        }
    }
}

impl fmt::Display for EmergencyAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicates which dataset a result came from.
///
/// Renderers treat this as authoritative for the insurance badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "NHIS")]
    Nhis,
    #[serde(rename = "CMCHIS")]
    Cmchis,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nhis => "NHIS",
            Self::Cmchis => "CMCHIS",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical insurance administrator tag.
///
/// `Other` carries provider names supplied by callers that fall outside the
/// canonical set (for example "MDIndia" typed into a chat). "No filter" is
/// expressed as `Option::<ProviderTag>::None` by callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderTag {
    Cmchis,
    NewHealthInsuranceScheme,
    Ma,
    HiTpa,
    Vidal,
    StarHealth,
    Unknown,
    Other(String),
}

impl ProviderTag {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cmchis => "CMCHIS",
            Self::NewHealthInsuranceScheme => "New Health Insurance Scheme",
            Self::Ma => "MA",
            Self::HiTpa => "HI TPA",
            Self::Vidal => "Vidal",
            Self::StarHealth => "Star Health",
            Self::Unknown => "Unknown",
            Self::Other(name) => name,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl From<&str> for ProviderTag {
    fn from(value: &str) -> Self {
        match value {
            "CMCHIS" => Self::Cmchis,
            "New Health Insurance Scheme" => Self::NewHealthInsuranceScheme,
            "MA" => Self::Ma,
            "HI TPA" => Self::HiTpa,
            "Vidal" => Self::Vidal,
            "Star Health" => Self::StarHealth,
            "Unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ProviderTag {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ProviderTag> for String {
    fn from(value: ProviderTag) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spreadsheet exports write phone numbers and ids as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawText> for String {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Text(s) => s.trim().to_string(),
            RawText::Number(n) => n.to_string(),
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawText::deserialize(deserializer).map(String::from)
}

/// Like [`text_or_number`], with `null` read as an empty string.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_text(deserializer)?.unwrap_or_default())
}

/// `null` and blank text become `None`.
fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawText>::deserialize(deserializer)?;
    Ok(raw.map(String::from).filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_become_text() {
        let rec: HospitalRecord = serde_json::from_str(
            r#"{"id": 17, "name": "City Clinic", "type": "General Care", "hasEmergency": true}"#,
        )
        .expect("parse");
        assert_eq!(rec.id, "17");
        assert!(rec.location.is_none());
        assert_eq!(rec.dedup_key(), "17-City Clinic");
    }

    #[test]
    fn numeric_contacts_and_null_names_are_tolerated() {
        let rec: HospitalRecord = serde_json::from_str(
            r#"{"id": "cmchis-1", "name": null, "city": null, "contact": 9876543210, "address": "  "}"#,
        )
        .expect("parse");
        assert_eq!(rec.name, "");
        assert_eq!(rec.city, "");
        assert_eq!(rec.contact.as_deref(), Some("9876543210"));
        assert_eq!(rec.address, None);
    }

    #[test]
    fn provider_tag_round_trips_through_display_names() {
        assert_eq!(ProviderTag::from("HI TPA"), ProviderTag::HiTpa);
        assert_eq!(ProviderTag::from("MDIndia"), ProviderTag::Other("MDIndia".into()));
        let json = serde_json::to_string(&ProviderTag::NewHealthInsuranceScheme).expect("ser");
        assert_eq!(json, "\"New Health Insurance Scheme\"");
    }

    #[test]
    fn coverage_amount_accepts_text_and_numbers() {
        let p: CoveragePolicy = serde_json::from_str(
            r#"{"id":"INS-1","policyName":"Gold","coverageAmount":300000,"type":"Family"}"#,
        )
        .expect("parse");
        assert_eq!(p.coverage_amount.to_string(), "300000");
        assert_eq!(p.policy_type, "Family");
    }
}
