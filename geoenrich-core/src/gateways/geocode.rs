use crate::entities::Candidate;

pub trait GeoCodingGateway {
    /// Look up an address and return all matches in the order of the service.
    ///
    /// No match at all is `Ok` with an empty list.
    fn forward(&self, address: &str) -> anyhow::Result<Vec<Candidate>>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn forward(&self, address: &str) -> anyhow::Result<Vec<Candidate>> {
        (**self).forward(address)
    }
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn forward(&self, address: &str) -> anyhow::Result<Vec<Candidate>> {
        (**self).forward(address)
    }
}
