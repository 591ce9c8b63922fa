//! Per-station storage of components indexed by period.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::component::Component;
use crate::error::ModemError;

/// Geographic and model-space position of a station.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    /// Geographic latitude in degrees.
    pub latitude: f64,
    /// Geographic longitude in degrees.
    pub longitude: f64,
    /// Model x coordinate (north) in metres.
    pub x: f64,
    /// Model y coordinate (east) in metres.
    pub y: f64,
    /// Model z coordinate (depth) in metres.
    pub z: f64,
}

/// Total-ordered wrapper so periods can key a `BTreeMap`.
#[derive(Debug, Clone, Copy)]
struct PeriodKey(f64);

impl PartialEq for PeriodKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PeriodKey {}

impl PartialOrd for PeriodKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PeriodKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A measurement site and all components recorded there.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    code: String,
    location: Location,
    data: BTreeMap<PeriodKey, BTreeMap<String, Component>>,
}

impl Station {
    /// Creates a station with no data.
    pub fn new(code: impl Into<String>, location: Location) -> Self {
        Self {
            code: code.into(),
            location,
            data: BTreeMap::new(),
        }
    }

    /// Returns the station code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the station position.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Periods at which this station has at least one component, ascending.
    pub fn periods(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.keys().map(|k| k.0)
    }

    /// Total number of components across all periods.
    pub fn n_components(&self) -> usize {
        self.data.values().map(BTreeMap::len).sum()
    }

    /// Returns the component `name` measured at `period`.
    ///
    /// # Errors
    ///
    /// Returns [`ModemError::MissingComponent`] if the station has no such
    /// component at that exact period.
    pub fn get_component(&self, period: f64, name: &str) -> Result<&Component, ModemError> {
        self.data
            .get(&PeriodKey(period))
            .and_then(|by_name| by_name.get(name))
            .ok_or_else(|| missing(&self.code, period, name))
    }

    /// Mutable counterpart of [`Station::get_component`].
    ///
    /// # Errors
    ///
    /// Returns [`ModemError::MissingComponent`] if the station has no such
    /// component at that exact period.
    pub fn get_component_mut(
        &mut self,
        period: f64,
        name: &str,
    ) -> Result<&mut Component, ModemError> {
        let code = &self.code;
        self.data
            .get_mut(&PeriodKey(period))
            .and_then(|by_name| by_name.get_mut(name))
            .ok_or_else(|| missing(code, period, name))
    }

    /// Iterates the components recorded at `period`, ordered by name.
    pub fn components_at(&self, period: f64) -> impl Iterator<Item = (&str, &Component)> {
        self.data
            .get(&PeriodKey(period))
            .into_iter()
            .flat_map(|by_name| by_name.iter().map(|(n, c)| (n.as_str(), c)))
    }

    /// Adds a component at `period`.
    ///
    /// # Errors
    ///
    /// Returns [`ModemError::DuplicateComponent`] if `name` already exists at
    /// that period.
    pub fn insert_component(
        &mut self,
        period: f64,
        name: impl Into<String>,
        component: Component,
    ) -> Result<(), ModemError> {
        let name = name.into();
        let by_name = self.data.entry(PeriodKey(period)).or_default();
        if by_name.contains_key(&name) {
            return Err(ModemError::DuplicateComponent {
                period,
                station: self.code.clone(),
                component: name,
            });
        }
        by_name.insert(name, component);
        Ok(())
    }
}

fn missing(code: &str, period: f64, name: &str) -> ModemError {
    ModemError::MissingComponent {
        period,
        station: code.to_string(),
        component: name.to_string(),
    }
}
