use anyhow::{anyhow, Result};
use geoenrich_core::pipeline::Settings;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geoenrich.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub files: Files,
    pub pipeline: Settings,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            cfg.geocoding.gateway = Some(GeocodingGateway::OpenCage { api_key });
        }
        Ok(cfg)
    }
}

pub struct Files {
    pub input: PathBuf,
    pub output: PathBuf,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    OpenCage { api_key: String },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            files,
            csv,
            pipeline,
            geocoding,
            gateway,
        } = from;

        let raw::Files { input, output } = files.unwrap_or_default();
        let files = Files { input, output };

        let raw::Csv {
            delimiter,
            address_column,
            latitude_column,
            longitude_column,
        } = csv.unwrap_or_default();
        let delimiter = u8::try_from(delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| anyhow!("The delimiter '{delimiter}' is not an ASCII character"))?;
        if latitude_column == longitude_column {
            return Err(anyhow!("Latitude and longitude need different column names"));
        }

        let raw::Pipeline {
            progress_interval,
            on_resolve_error,
        } = pipeline.unwrap_or_default();

        let pipeline = Settings {
            address_column,
            latitude_column,
            longitude_column,
            delimiter,
            progress_interval,
            on_resolve_error,
        };

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let gateway = gateway.ok_or_else(|| anyhow!("Missing gateway configuration"))?;
                let gw = match gw_name {
                    raw::GeocodingGateway::Opencage => {
                        let raw::OpenCage { api_key } = gateway.opencage.ok_or_else(|| {
                            anyhow!("Missing 'opencage' gateway configuration")
                        })?;
                        GeocodingGateway::OpenCage { api_key }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        Ok(Self {
            files,
            pipeline,
            geocoding,
        })
    }
}
