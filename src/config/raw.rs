use geoenrich_core::entities::{AddressColumn, ErrorPolicy};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("geoenrich.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub files: Option<Files>,
    pub csv: Option<Csv>,
    pub pipeline: Option<Pipeline>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Files {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Files {
    fn default() -> Self {
        Config::default().files.expect("Files configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Csv {
    pub delimiter: char,
    pub address_column: AddressColumn,
    pub latitude_column: String,
    pub longitude_column: String,
}

impl Default for Csv {
    fn default() -> Self {
        Config::default().csv.expect("CSV configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pipeline {
    pub progress_interval: u64,
    pub on_resolve_error: ErrorPolicy,
}

impl Default for Pipeline {
    fn default() -> Self {
        Config::default().pipeline.expect("Pipeline configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Opencage,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub opencage: Option<OpenCage>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: String,
}
