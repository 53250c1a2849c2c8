//! Station directory data access.
//!
//! The directory backend owns the station data; this module fetches
//! snapshots of it. Raw wire records are validated and converted into
//! domain types on the way in, so the rest of the server only ever
//! sees well-formed stations.

mod client;
mod convert;
mod error;
mod mock;
mod types;

use std::sync::Arc;

use crate::domain::Station;

pub use client::{DirectoryClient, DirectoryClientConfig};
pub use convert::{convert_station, convert_stations};
pub use error::DirectoryError;
pub use mock::MockDirectoryClient;
pub use types::{ChargerDto, StationDto, StationsPage};

/// A station source: the real backend or local mock data.
#[derive(Debug, Clone)]
pub enum DirectorySource {
    Remote(DirectoryClient),
    Mock(MockDirectoryClient),
}

impl DirectorySource {
    /// Fetch and convert the full station snapshot.
    ///
    /// Invalid records are dropped during conversion, never returned.
    pub async fn fetch_stations(&self) -> Result<Vec<Arc<Station>>, DirectoryError> {
        let dtos = match self {
            DirectorySource::Remote(client) => client.fetch_all().await?,
            DirectorySource::Mock(mock) => mock.fetch_all().await?,
        };
        Ok(convert_stations(dtos))
    }
}
