pub mod flight_snapshot;
