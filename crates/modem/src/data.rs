//! In-memory ModEM dataset.

use std::collections::{BTreeMap, BTreeSet};

use crate::component::Component;
use crate::error::ModemError;
use crate::station::{Location, Station};

/// Header of one data block (one data type) in a ModEM file.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockHeader {
    /// Free-text description line, without the leading `#`.
    pub description: String,
    /// Column header line, without the leading `#`.
    pub columns: String,
    /// Data type, e.g. `Full_Impedance`.
    pub data_type: String,
    /// Time-harmonic sign convention, e.g. `exp(-i\omega t)`.
    pub sign_convention: String,
    /// Units of the transfer functions.
    pub units: String,
    /// Orientation angle of the measurement frame in degrees.
    pub orientation: f64,
    /// Origin of the model grid (latitude, longitude and optional elevation).
    pub origin: Vec<f64>,
    /// Period count declared in the file.
    pub declared_periods: usize,
    /// Station count declared in the file.
    pub declared_stations: usize,
    /// Component names in order of first appearance in the block.
    pub components: Vec<String>,
}

impl BlockHeader {
    /// Creates a header with the given data type and empty metadata.
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            columns: "Period(s) Code GG_Lat GG_Lon X(m) Y(m) Z(m) Component Real Imag Error"
                .to_string(),
            data_type: data_type.into(),
            sign_convention: "exp(-i\\omega t)".to_string(),
            units: "[V/m]/[T]".to_string(),
            orientation: 0.0,
            origin: vec![0.0, 0.0, 0.0],
            declared_periods: 0,
            declared_stations: 0,
            components: Vec::new(),
        }
    }
}

/// A magnetotelluric dataset: periods, stations, and their components.
///
/// Periods are kept ascending and distinct. Stations are keyed by code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModemData {
    blocks: Vec<BlockHeader>,
    periods: Vec<f64>,
    stations: BTreeMap<String, Station>,
}

impl ModemData {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// All distinct periods, ascending.
    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    /// Number of distinct periods.
    pub fn n_periods(&self) -> usize {
        self.periods.len()
    }

    /// Number of stations.
    pub fn n_stations(&self) -> usize {
        self.stations.len()
    }

    /// Stations keyed by code.
    pub fn stations(&self) -> &BTreeMap<String, Station> {
        &self.stations
    }

    /// Mutable access to the stations.
    pub fn stations_mut(&mut self) -> &mut BTreeMap<String, Station> {
        &mut self.stations
    }

    /// Returns the station with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`ModemError::MissingStation`] if no such station exists.
    pub fn station(&self, code: &str) -> Result<&Station, ModemError> {
        self.stations
            .get(code)
            .ok_or_else(|| ModemError::MissingStation {
                station: code.to_string(),
            })
    }

    /// Mutable counterpart of [`ModemData::station`].
    ///
    /// # Errors
    ///
    /// Returns [`ModemError::MissingStation`] if no such station exists.
    pub fn station_mut(&mut self, code: &str) -> Result<&mut Station, ModemError> {
        self.stations
            .get_mut(code)
            .ok_or_else(|| ModemError::MissingStation {
                station: code.to_string(),
            })
    }

    /// Looks up one component by period, station code, and name.
    ///
    /// # Errors
    ///
    /// Returns [`ModemError::MissingStation`] or
    /// [`ModemError::MissingComponent`].
    pub fn get_component(
        &self,
        period: f64,
        station: &str,
        name: &str,
    ) -> Result<&Component, ModemError> {
        self.station(station)?.get_component(period, name)
    }

    /// Mutable counterpart of [`ModemData::get_component`].
    ///
    /// # Errors
    ///
    /// Returns [`ModemError::MissingStation`] or
    /// [`ModemError::MissingComponent`].
    pub fn get_component_mut(
        &mut self,
        period: f64,
        station: &str,
        name: &str,
    ) -> Result<&mut Component, ModemError> {
        self.station_mut(station)?.get_component_mut(period, name)
    }

    /// Data block headers in file order.
    pub fn blocks(&self) -> &[BlockHeader] {
        &self.blocks
    }

    /// Appends a block header and returns its index.
    pub fn push_block(&mut self, header: BlockHeader) -> usize {
        self.blocks.push(header);
        self.blocks.len() - 1
    }

    /// Inserts one measurement into block `block`.
    ///
    /// The station is created on first sight with `location`; later rows keep
    /// the first location. The period is merged into the sorted period list
    /// and `name` is appended to the block's component order if new.
    ///
    /// # Errors
    ///
    /// Returns [`ModemError::DuplicateComponent`] if the station already has
    /// `name` at `period`, or [`ModemError::MissingHeader`] if `block` does
    /// not exist.
    pub fn insert(
        &mut self,
        block: usize,
        period: f64,
        station: &str,
        location: Location,
        name: &str,
        component: Component,
    ) -> Result<(), ModemError> {
        let header = self
            .blocks
            .get_mut(block)
            .ok_or_else(|| ModemError::MissingHeader {
                line: 0,
                reason: format!("no data block with index {block}"),
            })?;

        self.stations
            .entry(station.to_string())
            .or_insert_with(|| Station::new(station, location))
            .insert_component(period, name, component)?;

        if !header.components.iter().any(|c| c == name) {
            header.components.push(name.to_string());
        }
        if let Err(pos) = self.periods.binary_search_by(|p| p.total_cmp(&period)) {
            self.periods.insert(pos, period);
        }
        Ok(())
    }

    /// Counts the distinct periods and stations that hold data in `block`.
    pub fn block_extent(&self, block: usize) -> (usize, usize) {
        let mut periods: BTreeSet<u64> = BTreeSet::new();
        let mut stations = 0;
        for station in self.stations.values() {
            let mut seen = false;
            for period in station.periods() {
                if station.components_at(period).any(|(_, c)| c.block() == block) {
                    periods.insert(period.to_bits());
                    seen = true;
                }
            }
            if seen {
                stations += 1;
            }
        }
        (periods.len(), stations)
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::*;

    fn z(re: f64) -> Component {
        Component::new(Complex64::new(re, 0.0), 0.0, 0)
    }

    #[test]
    fn insert_tracks_sorted_distinct_periods() {
        let mut data = ModemData::new();
        let b = data.push_block(BlockHeader::new("Full_Impedance"));
        let loc = Location::default();
        data.insert(b, 10.0, "S01", loc, "ZXY", z(1.0)).unwrap();
        data.insert(b, 0.1, "S01", loc, "ZXY", z(1.0)).unwrap();
        data.insert(b, 10.0, "S02", loc, "ZXY", z(1.0)).unwrap();
        data.insert(b, 1.0, "S02", loc, "ZYX", z(1.0)).unwrap();
        assert_eq!(data.periods(), &[0.1, 1.0, 10.0]);
        assert_eq!(data.n_stations(), 2);
        assert_eq!(data.blocks()[0].components, vec!["ZXY", "ZYX"]);
    }

    #[test]
    fn first_location_wins() {
        let mut data = ModemData::new();
        let b = data.push_block(BlockHeader::new("Full_Impedance"));
        let first = Location {
            latitude: -20.0,
            longitude: 130.0,
            ..Location::default()
        };
        let second = Location {
            latitude: 5.0,
            ..Location::default()
        };
        data.insert(b, 1.0, "S01", first, "ZXX", z(1.0)).unwrap();
        data.insert(b, 1.0, "S01", second, "ZXY", z(1.0)).unwrap();
        assert_eq!(data.station("S01").unwrap().location(), &first);
    }

    #[test]
    fn insert_into_unknown_block_fails() {
        let mut data = ModemData::new();
        let err = data
            .insert(0, 1.0, "S01", Location::default(), "ZXX", z(1.0))
            .unwrap_err();
        assert!(matches!(err, ModemError::MissingHeader { .. }));
        assert_eq!(data.n_stations(), 0);
    }

    #[test]
    fn dataset_lookup_errors() {
        let mut data = ModemData::new();
        let b = data.push_block(BlockHeader::new("Full_Impedance"));
        data.insert(b, 1.0, "S01", Location::default(), "ZXX", z(1.0))
            .unwrap();
        assert!(matches!(
            data.get_component(1.0, "S02", "ZXX"),
            Err(ModemError::MissingStation { .. })
        ));
        assert!(matches!(
            data.get_component(1.0, "S01", "ZYY"),
            Err(ModemError::MissingComponent { .. })
        ));
        data.get_component_mut(1.0, "S01", "ZXX").unwrap().set_error(2.0);
        assert_eq!(data.get_component(1.0, "S01", "ZXX").unwrap().error(), 2.0);
    }

    #[test]
    fn block_extent_counts_per_block() {
        let mut data = ModemData::new();
        let imp = data.push_block(BlockHeader::new("Full_Impedance"));
        let tip = data.push_block(BlockHeader::new("Full_Vertical_Components"));
        let loc = Location::default();
        for (period, code) in [(1.0, "S01"), (2.0, "S01"), (1.0, "S02")] {
            data.insert(imp, period, code, loc, "ZXY", z(1.0)).unwrap();
        }
        data.insert(
            tip,
            2.0,
            "S02",
            loc,
            "TX",
            Component::new(Complex64::new(0.1, 0.0), 0.0, tip),
        )
        .unwrap();
        assert_eq!(data.block_extent(imp), (2, 2));
        assert_eq!(data.block_extent(tip), (1, 1));
        assert_eq!(data.block_extent(7), (0, 0));
    }
}
