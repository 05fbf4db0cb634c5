use crate::config;
use anyhow::{anyhow, Result};
use geoenrich_core::gateways::geocode::GeoCodingGateway;
use geoenrich_gateways::opencage::OpenCage;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Box<dyn GeoCodingGateway>> {
    match &cfg.gateway {
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            Ok(Box::new(OpenCage::new(api_key.clone())))
        }
        None => Err(anyhow!(
            "No geocoding gateway was configured: set OPENCAGE_API_KEY or configure [gateway.opencage]"
        )),
    }
}
