//! Plain-text trip receipt.
//!
//! ```text
//! ########################################################
//!                   FASTEST ROUTE RECEIPT
//! ########################################################
//!  Origin      : Karachi
//!  Destination : Multan
//!  Avg Speed   : 100 km/h
//! --------------------------------------------------------
//! Leg From -> To      Via Road          Cond.     Dist.
//! --------------------------------------------------------
//! Karachi->Hyderabad  M-9 Motorway      Jammed    165 km
//! ...
//! --------------------------------------------------------
//!                    TOTAL DISTANCE :        915 km
//!                    ESTIMATED TIME : 12h 17m
//!                     FUEL REQUIRED : 58.1 L
//!                    EST. FUEL COST : PKR 16266.67 (petrol)
//! ########################################################
//! ```

use std::io::Write;

use nav_network::{RoadNetwork, RouteResult};

use crate::writer::OutputWriter;
use crate::{OutputResult, TripSummary};

const WIDTH: usize = 56;
/// Longest `From->To` label before it is cut to keep the table aligned.
const MAX_LEG_LABEL: usize = 18;

/// Renders routes as human-readable receipts.
pub struct ReceiptWriter<W: Write> {
    out: W,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for ReceiptWriter<W> {
    fn write_route(
        &mut self,
        network: &RoadNetwork,
        route:   &RouteResult,
        summary: &TripSummary,
    ) -> OutputResult<()> {
        let name = |id| network.city_name(id).unwrap_or("?");
        let heavy = "#".repeat(WIDTH);
        let light = "-".repeat(WIDTH);
        let out = &mut self.out;

        writeln!(out)?;
        writeln!(out, "{heavy}")?;
        writeln!(out, "{:^WIDTH$}", "FASTEST ROUTE RECEIPT")?;
        writeln!(out, "{heavy}")?;
        writeln!(out, " Origin      : {}", name(route.origin))?;
        writeln!(out, " Destination : {}", name(route.destination))?;
        writeln!(out, " Avg Speed   : {} km/h", route.speed_kmh)?;
        writeln!(out, "{light}")?;
        writeln!(out, "{:<20}{:<18}{:<10}Dist.", "Leg From -> To", "Via Road", "Cond.")?;
        writeln!(out, "{light}")?;

        if route.is_trivial() {
            writeln!(out, "(already at destination)")?;
        }
        for leg in &route.legs {
            let label: String = format!("{}->{}", name(leg.from), name(leg.to))
                .chars()
                .take(MAX_LEG_LABEL)
                .collect();
            writeln!(
                out,
                "{:<20}{:<18}{:<10}{} km",
                label, leg.road_name, leg.traffic_label(), leg.distance_km
            )?;
        }

        writeln!(out, "{light}")?;
        writeln!(out, "{:>35}{:>10} km", "TOTAL DISTANCE : ", route.total_distance_km)?;
        writeln!(out, "{:>35}{}h {}m", "ESTIMATED TIME : ", summary.hours, summary.minutes)?;
        writeln!(out, "{:>35}{:.1} L", "FUEL REQUIRED : ", route.total_fuel_litres)?;
        writeln!(
            out,
            "{:>35}{} {:.2} ({})",
            "EST. FUEL COST : ", summary.currency, summary.fuel_cost, summary.fuel_kind
        )?;
        writeln!(out, "{heavy}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
