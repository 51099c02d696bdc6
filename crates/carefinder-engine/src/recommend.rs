use std::collections::HashSet;

use carefinder_core::classify::DecoratedHospital;
use carefinder_core::geo::distance_km;
use carefinder_core::types::{EmergencyAvailability, GeoPoint, ProviderTag, SourceKind};

use crate::query::{PoolStats, RankedHospital, Recommendation, RecommendQuery, GENERAL};
use crate::Engine;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub view: DecoratedHospital<'a>,
    pub distance: Option<f64>,
}

impl Candidate<'_> {
    pub fn into_ranked(self) -> RankedHospital {
        RankedHospital::from_view(&self.view, self.distance)
    }
}

impl Engine {
    /// Rank hospitals for a specialty near an optional point.
    ///
    /// Pipeline: dataset selection by insurance, radius filter and sort,
    /// exact-then-loose specialty tiers, `(id, name)` dedup, 24/7-first
    /// partition for emergencies, truncation to the result cap.
    pub fn recommend_hospitals(&self, query: &RecommendQuery) -> Recommendation {
        let radius = query.radius_km.unwrap_or(self.settings.default_radius_km);

        let pool = self.select_pool(query.insurance_provider.as_ref());
        let total_in_pool = pool.len();

        let pool = match query.location {
            Some(origin) => within_radius(pool, origin, radius),
            None => by_rating(pool),
        };
        let insurance_match_count = pool.len();

        let results = emergency_first(dedup(specialty_tiers(pool, &query.specialty)), query.is_emergency);
        let symptom_match_count = results.len();

        tracing::debug!(
            specialty = %query.specialty,
            insurance = ?query.insurance_provider,
            total_in_pool,
            insurance_match_count,
            symptom_match_count,
            "Recommendation pool"
        );

        Recommendation {
            hospitals: results.into_iter().take(self.settings.result_cap).map(Candidate::into_ranked).collect(),
            stats: PoolStats {
                total_in_pool,
                insurance_match_count,
                symptom_match_count,
                insurance_used: query.insurance_provider.clone(),
            },
        }
    }

    /// CMCHIS and NHIS queries never see each other's dataset; anything else
    /// searches both, general records first.
    pub(crate) fn select_pool(&self, provider: Option<&ProviderTag>) -> Vec<Candidate<'_>> {
        let sources: &[SourceKind] = match provider {
            Some(ProviderTag::Cmchis) => &[SourceKind::Cmchis],
            Some(ProviderTag::NewHealthInsuranceScheme) => &[SourceKind::Nhis],
            _ => &[SourceKind::Nhis, SourceKind::Cmchis],
        };
        sources
            .iter()
            .flat_map(|&s| self.store.hospitals(s))
            .map(|view| Candidate { view, distance: None })
            .collect()
    }
}

/// Attach distances, drop everything beyond `radius` (and anything without
/// coordinates), nearest first.
pub(crate) fn within_radius(pool: Vec<Candidate<'_>>, origin: GeoPoint, radius: f64) -> Vec<Candidate<'_>> {
    let mut kept: Vec<_> = pool
        .into_iter()
        .filter_map(|mut c| {
            let d = distance_km(origin, c.view.record.location?);
            c.distance = Some(d);
            (d <= radius).then_some(c)
        })
        .collect();
    kept.sort_by(|a, b| a.distance.unwrap_or(f64::MAX).total_cmp(&b.distance.unwrap_or(f64::MAX)));
    kept
}

/// Attach distances where possible and sort nearest first; records without
/// coordinates trail in their original order.
pub(crate) fn by_distance(pool: Vec<Candidate<'_>>, origin: GeoPoint) -> Vec<Candidate<'_>> {
    let mut pool: Vec<_> = pool
        .into_iter()
        .map(|mut c| {
            c.distance = c.view.record.location.map(|loc| distance_km(origin, loc));
            c
        })
        .collect();
    pool.sort_by(|a, b| a.distance.unwrap_or(f64::INFINITY).total_cmp(&b.distance.unwrap_or(f64::INFINITY)));
    pool
}

/// Highest rating first; unrated counts as 0.
pub(crate) fn by_rating(mut pool: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    pool.sort_by(|a, b| b.view.rating().total_cmp(&a.view.rating()));
    pool
}

fn specialty_tiers<'a>(pool: Vec<Candidate<'a>>, specialty: &str) -> Vec<Candidate<'a>> {
    let specialty = specialty.trim();
    if specialty.is_empty() || specialty == GENERAL {
        return pool;
    }
    let wanted = specialty.to_lowercase();
    let mut exact = Vec::new();
    let mut loose = Vec::new();
    for c in pool {
        let record = c.view.record;
        if record.specialists.iter().any(|s| s.to_lowercase().contains(&wanted)) {
            exact.push(c);
        } else if record.name.to_lowercase().contains(&wanted)
            || c.view.facility_type.as_str().to_lowercase().contains(&wanted)
        {
            loose.push(c);
        }
    }
    exact.extend(loose);
    exact
}

fn dedup(results: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    let mut seen = HashSet::new();
    results.into_iter().filter(|c| seen.insert(c.view.record.dedup_key())).collect()
}

fn emergency_first(results: Vec<Candidate<'_>>, is_emergency: bool) -> Vec<Candidate<'_>> {
    if !is_emergency {
        return results;
    }
    let (mut ready, rest): (Vec<_>, Vec<_>) =
        results.into_iter().partition(|c| c.view.emergency == EmergencyAvailability::Available24x7);
    ready.extend(rest);
    ready
}
