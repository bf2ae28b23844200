//! `nav-output` — presentation sinks for route results.
//!
//! Two backends, both implementing [`OutputWriter`]:
//!
//! | Writer            | Output                                                |
//! |-------------------|-------------------------------------------------------|
//! | [`ReceiptWriter`] | Human-readable trip receipt on any `io::Write`        |
//! | [`CsvWriter`]     | `route_legs.csv`, `route_summaries.csv` in a directory |
//!
//! Monetary cost and the hours/minutes split live in [`TripSummary`]; the
//! router never sees prices.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_output::{OutputWriter, ReceiptWriter, TripSummary};
//!
//! let route = network.find_shortest_route(start, end, speed)?;
//! let summary = TripSummary::new(&route, &config);
//! let mut out = ReceiptWriter::new(std::io::stdout());
//! out.write_route(&network, &route, &summary)?;
//! ```

pub mod csv;
pub mod error;
pub mod receipt;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use receipt::ReceiptWriter;
pub use row::{LegRow, RouteSummaryRow};
pub use summary::TripSummary;
pub use writer::OutputWriter;
