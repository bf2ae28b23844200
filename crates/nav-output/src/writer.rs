//! The `OutputWriter` trait implemented by all backend writers.

use nav_network::{RoadNetwork, RouteResult};

use crate::{OutputResult, TripSummary};

/// Trait implemented by the receipt and CSV writers.
pub trait OutputWriter {
    /// Write one routed trip.  `network` supplies city names.
    fn write_route(
        &mut self,
        network: &RoadNetwork,
        route:   &RouteResult,
        summary: &TripSummary,
    ) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: calling it more than once is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
