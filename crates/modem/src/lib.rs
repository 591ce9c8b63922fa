//! # mtsynth-modem
//!
//! Read and write magnetotelluric data files in the ModEM format. A file is
//! loaded into a [`ModemData`] keyed by period and station; each station holds
//! the complex transfer-function [`Component`]s measured at each period.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mtsynth_modem::{read_modem, write_modem};
//!
//! let mut data = read_modem(Path::new("survey.dat"))?;
//! for &period in &data.periods().to_vec() {
//!     for station in data.stations_mut().values_mut() {
//!         station.get_component_mut(period, "ZXY")?.set_error(0.1);
//!     }
//! }
//! write_modem(Path::new("out.dat"), &data, "# errors set to 0.1")?;
//! # Ok::<(), mtsynth_modem::ModemError>(())
//! ```

mod component;
mod data;
mod error;
mod reader;
mod station;
mod writer;

pub use component::{Component, TensorComponent};
pub use data::{BlockHeader, ModemData};
pub use error::ModemError;
pub use reader::{parse_modem, read_modem};
pub use station::{Location, Station};
pub use writer::{format_modem, write_modem};
