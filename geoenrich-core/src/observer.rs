//! Notifications about the progress of an enrichment run.
//!
//! The pipeline itself never prints anything. Everything a user
//! should see is passed as an [`Event`] to an [`Observer`].

use crate::entities::{Candidate, Summary};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Started {
        input: &'a Path,
        output: &'a Path,
    },
    /// Emitted for the first row and then every n-th row.
    Progress {
        row: u64,
    },
    Resolving {
        address: &'a str,
    },
    Resolved {
        address: &'a str,
        candidate: Candidate,
    },
    Unresolved {
        address: &'a str,
    },
    /// Only emitted if failed rows are skipped.
    Failed {
        row: u64,
        address: &'a str,
        error: &'a anyhow::Error,
    },
    Finished {
        summary: Summary,
    },
}

pub trait Observer {
    fn notify(&self, event: Event<'_>);
}

impl<O> Observer for &O
where
    O: Observer + ?Sized,
{
    fn notify(&self, event: Event<'_>) {
        (**self).notify(event);
    }
}

/// Writes human readable progress messages to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn notify(&self, event: Event<'_>) {
        use Event as E;
        match event {
            E::Started { input, output } => {
                log::info!(
                    "Adding latitude and longitude from {} to {}",
                    input.display(),
                    output.display()
                );
            }
            E::Progress { row } => {
                log::info!("Processing row {row}");
            }
            E::Resolving { address } => {
                log::info!("Retrieving latitude and longitude for '{address}'");
            }
            E::Resolved {
                address,
                candidate: Candidate { lat, lng },
            } => {
                log::info!("Latitude and longitude for '{address}' are: {lat}, {lng}");
            }
            E::Unresolved { address } => {
                log::warn!("No location found for '{address}'");
            }
            E::Failed {
                row,
                address,
                error,
            } => {
                log::warn!("Failed to resolve '{address}' (row {row}): {error:#}");
            }
            E::Finished { summary } => {
                log::info!("Latitude and longitude added to {summary}");
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn notify(&self, _: Event<'_>) {}
}
