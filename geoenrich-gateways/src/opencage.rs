use anyhow::Context as _;
use geocoding::{Forward, Opencage as Client, Point};
use geoenrich_core::{entities::Candidate, gateways::geocode::GeoCodingGateway};

/// Forward geocoding with the OpenCage Data API.
pub struct OpenCage {
    client: Client<'static>,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(api_key),
        }
    }
}

fn point_to_candidate(point: &Point<f64>) -> Candidate {
    // x is the longitude, y the latitude
    Candidate::new(point.y(), point.x())
}

impl GeoCodingGateway for OpenCage {
    fn forward(&self, address: &str) -> anyhow::Result<Vec<Candidate>> {
        log::debug!("Requesting location of '{address}'");
        let points: Vec<Point<f64>> = self
            .client
            .forward(address)
            .with_context(|| format!("OpenCage request for '{address}' failed"))?;
        log::debug!("Found {} locations for '{address}'", points.len());
        Ok(points.iter().map(point_to_candidate).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_gateway_with_api_key() {
        let _gw: Box<dyn GeoCodingGateway> = Box::new(OpenCage::new("secret".to_string()));
    }

    #[test]
    fn map_point_to_candidate() {
        let point = Point::new(13.405, 52.52);
        assert_eq!(point_to_candidate(&point), Candidate::new(52.52, 13.405));
    }
}
