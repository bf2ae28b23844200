//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `route_legs.csv`
//! - `route_summaries.csv`
//!
//! Each written route gets the next `query_id` (from 0), which joins the two
//! files.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::debug;

use nav_network::{RoadNetwork, RouteResult};

use crate::row::{LegRow, RouteSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputResult, TripSummary};

/// Writes routed trips to two CSV files.
pub struct CsvWriter {
    legs:          Writer<File>,
    summaries:     Writer<File>,
    next_query_id: u64,
    finished:      bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut legs = Writer::from_path(dir.join("route_legs.csv"))?;
        legs.write_record([
            "query_id", "leg", "from_city", "to_city", "road", "traffic", "road_type",
            "distance_km", "time_minutes", "fuel_litres",
        ])?;

        let mut summaries = Writer::from_path(dir.join("route_summaries.csv"))?;
        summaries.write_record([
            "query_id", "origin", "destination", "speed_kmh", "legs", "distance_km",
            "time_minutes", "fuel_litres", "fuel_cost", "currency",
        ])?;

        Ok(Self {
            legs,
            summaries,
            next_query_id: 0,
            finished: false,
        })
    }

    /// Number of routes written so far.
    pub fn routes_written(&self) -> u64 {
        self.next_query_id
    }

    fn write_leg(&mut self, row: &LegRow) -> OutputResult<()> {
        self.legs.write_record(&[
            row.query_id.to_string(),
            row.leg_index.to_string(),
            row.from_city.to_string(),
            row.to_city.to_string(),
            row.road_name.clone(),
            row.traffic.to_owned(),
            row.road_type.to_owned(),
            row.distance_km.to_string(),
            row.time_minutes.to_string(),
            row.fuel_litres.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RouteSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.query_id.to_string(),
            row.origin.clone(),
            row.destination.clone(),
            row.speed_kmh.to_string(),
            row.legs.to_string(),
            row.total_distance_km.to_string(),
            row.total_time_minutes.to_string(),
            row.total_fuel_litres.to_string(),
            format!("{:.2}", row.fuel_cost),
            row.currency.clone(),
        ])?;
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_route(
        &mut self,
        network: &RoadNetwork,
        route:   &RouteResult,
        summary: &TripSummary,
    ) -> OutputResult<()> {
        let query_id = self.next_query_id;
        for (i, leg) in route.legs.iter().enumerate() {
            self.write_leg(&LegRow::new(query_id, i as u32, leg))?;
        }
        self.write_summary(&RouteSummaryRow::new(query_id, network, route, summary))?;
        self.next_query_id += 1;
        debug!("csv: wrote route {query_id} ({} legs)", route.legs.len());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.legs.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
