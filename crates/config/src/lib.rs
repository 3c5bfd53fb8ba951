//! Configuration models and loaders for the Hohmann calculator.
//!
//! Two catalogs are supported: central bodies (one TOML file per body, or a YAML list) and
//! reference problems (a YAML list, or one TOML file per problem).

use std::fs::File;
use std::path::{Path, PathBuf};

use hohmann_core::constants::MU_EARTH_KM3_S2;
use serde::Deserialize;
use thiserror::Error;

/// Central body parsed from the body catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mu_km3_s2: f64,
    pub radius_km: f64,
}

/// Named transfer problem evaluated by the reference problem runner.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProblemConfig {
    pub name: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub mu_km3_s2: Option<f64>,
    pub transfer: TransferConfig,
}

/// Transfer inputs in problem manifests. Radii are in km.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransferConfig {
    Hohmann {
        r1_km: f64,
        r2_km: f64,
    },
    BiElliptic {
        r1_km: f64,
        r2_km: f64,
        r_intermediate_km: f64,
    },
    Point {
        rp1_km: f64,
        ra1_km: f64,
        rp2_km: f64,
        ra2_km: f64,
        #[serde(default)]
        from_apogee: bool,
    },
    HPoint {
        a_km: f64,
        ap_km: f64,
        b_km: f64,
        bp_km: f64,
        #[serde(default)]
        from_apogee: bool,
    },
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body '{0}' not found in catalog")]
    UnknownBody(String),
}

/// Load central bodies from a YAML list or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load reference problems from a YAML list or a directory of TOML files.
pub fn load_problems<P: AsRef<Path>>(path: P) -> Result<Vec<ProblemConfig>, ConfigError> {
    load_records(path)
}

/// Case-insensitive lookup by body name.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Result<&'a BodyConfig, ConfigError> {
    let upper = name.to_uppercase();
    bodies
        .iter()
        .find(|b| b.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::UnknownBody(name.to_string()))
}

/// Pick the gravitational parameter for a request: an explicit value wins over a named body,
/// and Earth is used when neither is given.
pub fn resolve_mu(
    bodies: &[BodyConfig],
    body: Option<&str>,
    mu_km3_s2: Option<f64>,
) -> Result<f64, ConfigError> {
    if let Some(mu) = mu_km3_s2 {
        return Ok(mu);
    }
    match body {
        Some(name) => Ok(find_body(bodies, name)?.mu_km3_s2),
        None => Ok(MU_EARTH_KM3_S2),
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("loading configuration from {}", path.display());
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
