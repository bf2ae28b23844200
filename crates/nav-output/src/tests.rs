//! Tests for nav-output.

#[cfg(test)]
mod helpers {
    use nav_core::{CityId, RoadType, TrafficLevel};
    use nav_network::{RoadNetwork, RoadNetworkBuilder};

    /// `A(1) - B(2) - C(3)` plus a long-named city 4 joined to C.
    pub fn network() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        b.add_city(CityId(1), "A").unwrap();
        b.add_city(CityId(2), "B").unwrap();
        b.add_city(CityId(3), "C").unwrap();
        b.add_city(CityId(4), "Dera Ismail Khan").unwrap();
        b.add_road(CityId(1), CityId(2), 100.0, TrafficLevel::Clear, RoadType::Motorway, "AB")
            .unwrap();
        b.add_road(CityId(2), CityId(3), 100.0, TrafficLevel::Clear, RoadType::Motorway, "BC")
            .unwrap();
        b.add_road(CityId(3), CityId(4), 80.0, TrafficLevel::Heavy, RoadType::Local, "N-55")
            .unwrap();
        b.build()
    }
}

#[cfg(test)]
mod summary {
    use nav_core::{CityId, FuelKind, NavConfig};

    use crate::summary::split_minutes;
    use crate::TripSummary;

    #[test]
    fn split_truncates_fractional_minutes() {
        assert_eq!(split_minutes(120.0), (2, 0));
        assert_eq!(split_minutes(737.1), (12, 17));
        assert_eq!(split_minutes(59.99), (0, 59));
        assert_eq!(split_minutes(0.0), (0, 0));
        assert_eq!(split_minutes(-3.0), (0, 0));
    }

    #[test]
    fn cost_uses_configured_fuel() {
        let net = super::helpers::network();
        let route = net.find_shortest_route(CityId(1), CityId(3), 80.0).unwrap();
        // 80 km/h on motorway: 16 km/L → 200 km = 12.5 L.
        assert_eq!(route.total_fuel_litres, 12.5);

        let petrol = TripSummary::new(&route, &NavConfig::default());
        assert_eq!(petrol.fuel_cost, 12.5 * 280.0);
        assert_eq!(petrol.currency, "PKR");
        assert_eq!((petrol.hours, petrol.minutes), (2, 30));

        let diesel_cfg = NavConfig { fuel_kind: FuelKind::Diesel, ..NavConfig::default() };
        let diesel = TripSummary::new(&route, &diesel_cfg);
        assert_eq!(diesel.fuel_cost, 12.5 * 295.0);
        assert_eq!(diesel.fuel_kind, FuelKind::Diesel);
    }
}

#[cfg(test)]
mod receipt {
    use nav_core::{CityId, NavConfig};

    use crate::{OutputWriter, ReceiptWriter, TripSummary};

    fn render(from: u32, to: u32, speed: f64) -> String {
        let net = super::helpers::network();
        let route = net.find_shortest_route(CityId(from), CityId(to), speed).unwrap();
        let summary = TripSummary::new(&route, &NavConfig::default());
        let mut w = ReceiptWriter::new(Vec::new());
        w.write_route(&net, &route, &summary).unwrap();
        w.finish().unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn lists_legs_in_order() {
        let text = render(1, 3, 100.0);
        let ab = text.find("A->B").expect("first leg");
        let bc = text.find("B->C").expect("second leg");
        assert!(ab < bc);
        assert!(text.contains(" Origin      : A"));
        assert!(text.contains(" Destination : C"));
        assert!(text.contains(" Avg Speed   : 100 km/h"));
        assert!(text.contains("Clear"));
    }

    #[test]
    fn totals_block() {
        let text = render(1, 3, 100.0);
        assert!(text.contains("TOTAL DISTANCE :        200 km"), "{text}");
        assert!(text.contains("ESTIMATED TIME : 2h 0m"), "{text}");
        // 200 km / 15.75 km/L = 12.698… L
        assert!(text.contains("FUEL REQUIRED : 12.7 L"), "{text}");
        assert!(text.contains("EST. FUEL COST : PKR 3555.56 (petrol)"), "{text}");
    }

    #[test]
    fn long_leg_label_is_cut() {
        let text = render(3, 4, 60.0);
        assert!(text.contains("C->Dera Ismail Kha "), "{text}");
        assert!(!text.contains("C->Dera Ismail Khan"));
        assert!(text.contains("Heavy"));
    }

    #[test]
    fn trivial_route() {
        let text = render(2, 2, 60.0);
        assert!(text.contains("(already at destination)"));
        assert!(text.contains("ESTIMATED TIME : 0h 0m"));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use nav_core::{CityId, NavConfig};

    use crate::{CsvWriter, OutputWriter, TripSummary};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn write_routes(w: &mut CsvWriter, pairs: &[(u32, u32)]) {
        let net = super::helpers::network();
        for &(a, b) in pairs {
            let route = net.find_shortest_route(CityId(a), CityId(b), 90.0).unwrap();
            let summary = TripSummary::new(&route, &NavConfig::default());
            w.write_route(&net, &route, &summary).unwrap();
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("route_legs.csv").exists());
        assert!(dir.path().join("route_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("route_legs.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["query_id", "leg", "from_city", "to_city", "road", "traffic", "road_type",
             "distance_km", "time_minutes", "fuel_litres"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("route_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2[..3], ["query_id", "origin", "destination"]);
    }

    #[test]
    fn legs_and_summaries_share_query_ids() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_routes(&mut w, &[(1, 3), (4, 2)]);
        assert_eq!(w.routes_written(), 2);
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("route_legs.csv")).unwrap();
        let legs: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        // 1→2→3 is two legs, 4→3→2 is two legs.
        assert_eq!(legs.len(), 4);
        assert_eq!(&legs[0][0], "0");
        assert_eq!(&legs[0][2], "1");
        assert_eq!(&legs[1][3], "3");
        assert_eq!(&legs[2][0], "1");
        assert_eq!(&legs[2][4], "N-55");
        assert_eq!(&legs[2][5], "Heavy");
        assert_eq!(&legs[2][6], "Local");

        let mut rdr = csv::Reader::from_path(dir.path().join("route_summaries.csv")).unwrap();
        let sums: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(sums.len(), 2);
        assert_eq!(&sums[0][1], "A");
        assert_eq!(&sums[1][1], "Dera Ismail Khan");
        assert_eq!(&sums[1][4], "2");
        assert_eq!(&sums[1][9], "PKR");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_routes(&mut w, &[(1, 2)]);
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
