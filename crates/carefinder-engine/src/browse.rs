use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use carefinder_core::types::{GeoPoint, ProviderTag, SourceKind};
use carefinder_match::{analyze_symptoms, detect_provider_from_policy, provider_in_text, PolicyMatch, SymptomAnalysis};

use crate::query::{PoolStats, RankedHospital, Recommendation, RecommendQuery, GENERAL};
use crate::recommend::{by_distance, by_rating, Candidate};
use crate::Engine;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSearch {
    pub results: Vec<RankedHospital>,
    /// Provider resolved from the policy id, or else from the issue text.
    pub detected_provider: Option<ProviderTag>,
    pub analysis: SymptomAnalysis,
    pub stats: PoolStats,
}

impl Engine {
    /// Unfiltered browse of the general dataset: nearest first when a location
    /// is known, shuffled otherwise.
    pub fn get_hospitals(&self, location: Option<GeoPoint>) -> Vec<RankedHospital> {
        self.get_hospitals_with_rng(location, &mut rand::thread_rng())
    }

    pub fn get_hospitals_with_rng<R: Rng + ?Sized>(&self, location: Option<GeoPoint>, rng: &mut R) -> Vec<RankedHospital> {
        let pool: Vec<Candidate<'_>> =
            self.store.hospitals(SourceKind::Nhis).map(|view| Candidate { view, distance: None }).collect();
        let pool = match location {
            Some(origin) => by_distance(pool, origin),
            None => {
                let mut pool = pool;
                pool.shuffle(rng);
                pool
            }
        };
        pool.into_iter().take(self.settings.browse_cap).map(Candidate::into_ranked).collect()
    }

    /// Top hospitals accepting the provider behind a matched policy name.
    pub fn get_hospitals_by_policy(&self, policy: &PolicyMatch, location: Option<GeoPoint>) -> Vec<RankedHospital> {
        let pool: Vec<Candidate<'_>> = self
            .accepting(&policy.provider_match_string)
            .map(|view| Candidate { view, distance: None })
            .collect();
        let pool = match location {
            Some(origin) => by_distance(pool, origin),
            None => by_rating(pool),
        };
        pool.into_iter().take(self.settings.policy_cap).map(Candidate::into_ranked).collect()
    }

    /// Triage `issue`, resolve the insurance filter, then recommend.
    ///
    /// An explicit policy id wins over providers mentioned in the text. An
    /// `Unknown` provider is reported but not used as a filter.
    pub fn search_hospitals_by_issue(
        &self,
        issue: &str,
        location: Option<GeoPoint>,
        policy_id: Option<&str>,
    ) -> IssueSearch {
        let analysis = analyze_symptoms(issue);
        let detected_provider = policy_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| detect_provider_from_policy(&self.store, id))
            .or_else(|| provider_in_text(issue));
        let filter = detected_provider.clone().filter(|p| !p.is_unknown());

        let query = RecommendQuery::new(analysis.primary_specialty.clone())
            .near(location)
            .emergency(analysis.is_emergency)
            .insurance(filter);
        let Recommendation { hospitals, stats } = self.recommend_hospitals(&query);

        IssueSearch { results: hospitals, detected_provider, analysis, stats }
    }

    /// 24/7-first search with no specialty or insurance filter. Falls back to
    /// the configured location when the caller has none.
    pub fn emergency_search(&self, location: Option<GeoPoint>) -> Recommendation {
        let origin = location.unwrap_or(self.settings.fallback_location);
        self.recommend_hospitals(&RecommendQuery::new(GENERAL).near(Some(origin)).emergency(true))
    }
}
