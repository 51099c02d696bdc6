use serde::ser::{Serialize, SerializeStruct, Serializer};

use carefinder_core::classify::DecoratedHospital;
use carefinder_core::types::{CoverageAmount, ProviderTag, SourceKind};
use carefinder_match::{accepts_provider, detect_provider_from_policy};

use crate::Engine;

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageDetails {
    pub policy_name: String,
    pub coverage_amount: CoverageAmount,
    pub policy_type: String,
    pub provider: ProviderTag,
    /// Hospitals in the provider's dataset that accept it.
    pub hospital_count: usize,
}

/// Serialises as `{"valid": false}` or `{"valid": true, "policyName": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverageResult {
    Invalid,
    Valid(CoverageDetails),
}

impl CoverageResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl Serialize for CoverageResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Invalid => {
                let mut s = serializer.serialize_struct("CoverageResult", 1)?;
                s.serialize_field("valid", &false)?;
                s.end()
            }
            Self::Valid(d) => {
                let mut s = serializer.serialize_struct("CoverageResult", 6)?;
                s.serialize_field("valid", &true)?;
                s.serialize_field("policyName", &d.policy_name)?;
                s.serialize_field("coverageAmount", &d.coverage_amount)?;
                s.serialize_field("type", &d.policy_type)?;
                s.serialize_field("provider", &d.provider)?;
                s.serialize_field("hospitalCount", &d.hospital_count)?;
                s.end()
            }
        }
    }
}

impl Engine {
    pub fn verify_coverage(&self, policy_id: &str) -> CoverageResult {
        let Some(policy) = self.store.find_policy(policy_id) else {
            return CoverageResult::Invalid;
        };
        let provider = detect_provider_from_policy(&self.store, policy_id);
        let hospital_count = self.accepting(&provider).count();
        CoverageResult::Valid(CoverageDetails {
            policy_name: policy.policy_name.clone(),
            coverage_amount: policy.coverage_amount.clone(),
            policy_type: policy.policy_type.clone(),
            provider,
            hospital_count,
        })
    }

    /// Hospitals that accept `provider`: the CMCHIS dataset for CMCHIS,
    /// otherwise the general dataset filtered by its insurance lists.
    pub(crate) fn accepting<'s>(
        &'s self,
        provider: &'s ProviderTag,
    ) -> impl Iterator<Item = DecoratedHospital<'s>> + 's {
        let source = match provider {
            ProviderTag::Cmchis => SourceKind::Cmchis,
            _ => SourceKind::Nhis,
        };
        self.store.hospitals(source).filter(move |h| accepts_provider(&h.insurance(), provider))
    }
}
