//! Data layer (hosted data API).

pub mod data_api;

pub use data_api::DataApi;

/// Data API endpoint paths as constants.
pub mod endpoints {
    /// Remote procedure returning candidate stations near an origin.
    pub const NEARBY_STATIONS_RPC: &str = "rpc/nearby_stations";
    pub const STATIONS: &str = "stations";
    pub const REPORTS: &str = "reports";
}
