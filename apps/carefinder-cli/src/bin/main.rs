use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use carefinder_core::config::Config;
use carefinder_core::geo::DistrictGeocoder;
use carefinder_core::traits::Geocoder;
use carefinder_core::types::{GeoPoint, ProviderTag};
use carefinder_engine::{Engine, RecommendQuery};
use carefinder_match::{detect_provider_from_policy, home_care_advice, search_insurance_policy};

const DEFAULT_LOG_FILTER: &str = "carefinder=info";

#[derive(Parser, Debug)]
#[command(name = "carefinder", about = "Find Tamil Nadu hospitals by symptom, insurance and distance.")]
struct Cli {
    /// Directory that relative data paths resolve against.
    #[arg(long, global = true, default_value = ".")]
    base: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Place {
    /// Latitude of the search centre (needs --lng).
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,
    /// District or city name, resolved from the built-in district table.
    #[arg(long, conflicts_with = "lat")]
    city: Option<String>,
}

impl Place {
    fn resolve(&self, geocoder: &dyn Geocoder) -> anyhow::Result<Option<GeoPoint>> {
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            return Ok(Some(GeoPoint::new(lat, lng)));
        }
        let Some(city) = self.city.as_deref() else {
            return Ok(None);
        };
        match geocoder.locate(city)? {
            Some(point) => Ok(Some(point)),
            None => bail!("unknown district or city: {city}"),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank hospitals for a specialty.
    Recommend {
        specialty: String,
        #[command(flatten)]
        place: Place,
        #[arg(long)]
        emergency: bool,
        /// Provider key such as "CMCHIS" or "Star Health".
        #[arg(long)]
        insurance: Option<String>,
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Triage a free-text health issue and recommend hospitals for it.
    Issue {
        text: String,
        #[command(flatten)]
        place: Place,
        #[arg(long)]
        policy: Option<String>,
    },
    /// Check a policy id against the coverage table.
    Verify { policy_id: String },
    /// Resolve a policy id to its provider.
    Detect { policy_id: String },
    /// List hospitals from the general dataset.
    Browse {
        #[command(flatten)]
        place: Place,
    },
    /// Hospitals accepting the insurance named in free text.
    Policy {
        text: String,
        #[command(flatten)]
        place: Place,
    },
    /// Round-the-clock hospitals near a place.
    Emergency {
        #[command(flatten)]
        place: Place,
    },
    /// Home-care advice for a common complaint.
    Advice { text: String },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // advice needs no datasets
    if let Command::Advice { text } = &cli.command {
        return match home_care_advice(text) {
            Some(advice) => print_json(advice),
            None => {
                println!("No home-care advice for that; try describing a symptom such as fever or cough.");
                Ok(())
            }
        };
    }

    let config = Config::load().context("loading configuration")?;
    let engine = Engine::from_config(&config, &cli.base)?;
    let geocoder = DistrictGeocoder;

    match cli.command {
        Command::Recommend { specialty, place, emergency, insurance, radius } => {
            let mut query = RecommendQuery::new(specialty)
                .near(place.resolve(&geocoder)?)
                .emergency(emergency)
                .insurance(insurance.map(ProviderTag::from));
            if let Some(radius) = radius {
                query = query.radius(radius);
            }
            print_json(&engine.recommend_hospitals(&query))
        }
        Command::Issue { text, place, policy } => {
            print_json(&engine.search_hospitals_by_issue(&text, place.resolve(&geocoder)?, policy.as_deref()))
        }
        Command::Verify { policy_id } => print_json(&engine.verify_coverage(&policy_id)),
        Command::Detect { policy_id } => print_json(&detect_provider_from_policy(engine.store(), &policy_id)),
        Command::Browse { place } => print_json(&engine.get_hospitals(place.resolve(&geocoder)?)),
        Command::Policy { text, place } => {
            let Some(policy) = search_insurance_policy(&text) else {
                bail!("no known insurance policy mentioned in {text:?}");
            };
            tracing::info!(policy = %policy.policy_name, provider = %policy.provider_match_string, "Matched policy");
            print_json(&engine.get_hospitals_by_policy(&policy, place.resolve(&geocoder)?))
        }
        Command::Emergency { place } => print_json(&engine.emergency_search(place.resolve(&geocoder)?)),
        Command::Advice { .. } => Ok(()),
    }
}
