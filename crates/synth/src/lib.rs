//! Synthetic error estimation for magnetotelluric impedance data.
//!
//! For every (period, station) pair of a [`ModemData`] set, one error value
//! is derived from the off-diagonal impedances and written to all four
//! tensor components:
//!
//! 1. **Base**: `sqrt(|ZXY.re| * |ZYX.re|)`
//! 2. **Noise**: one draw from `Normal(base * mean_fraction, sigma)`
//! 3. **Assign**: the draw becomes the error of ZXX, ZXY, ZYX and ZYY
//!
//! The random source is passed in by the caller, so a seeded RNG gives
//! reproducible output. [`SynthConfig::rng`] builds one from the configured
//! seed.

mod config;
mod error;
mod summary;

pub use config::{DEFAULT_MEAN_FRACTION, DEFAULT_SIGMA, SynthConfig};
pub use error::SynthError;
pub use summary::SynthSummary;

use mtsynth_modem::{ModemData, ModemError, Station, TensorComponent};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, info, trace};

/// Builds a seeded or OS-sourced RNG.
pub fn make_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    }
}

/// Noise-free error estimate from the real parts of ZXY and ZYX.
///
/// Always non-negative for finite inputs.
pub fn base_error(zxy_real: f64, zyx_real: f64) -> f64 {
    (zxy_real.abs() * zyx_real.abs()).sqrt()
}

/// Assigns a synthetic error to every (period, station) pair in place.
///
/// Every station is visited for every period of the dataset. For each pair
/// the four tensor components are looked up first; the error is only written
/// once all four exist.
///
/// # Errors
///
/// Returns [`SynthError::InvalidConfig`] before touching any data if the
/// configuration is invalid, [`SynthError::Lookup`] if a station lacks one of
/// the four components at a period, and [`SynthError::Distribution`] if the
/// noise distribution cannot be built (e.g. NaN impedances). Pairs processed
/// before the failure keep their new errors.
#[tracing::instrument(
    skip(data, config, rng),
    fields(n_periods = data.n_periods(), n_stations = data.n_stations())
)]
pub fn synthesize_errors<R: Rng + ?Sized>(
    data: &mut ModemData,
    config: &SynthConfig,
    rng: &mut R,
) -> Result<SynthSummary, SynthError> {
    config.validate()?;

    let periods = data.periods().to_vec();
    let mut summary = SynthSummary::new();

    for period in periods {
        debug!(period, "assigning synthetic errors");
        for station in data.stations_mut().values_mut() {
            let error = synthesize_pair(station, period, config, rng)?;
            summary.record(error);
        }
    }

    info!(
        n_pairs = summary.n_pairs(),
        mean_error = summary.mean(),
        "synthetic errors assigned"
    );
    Ok(summary)
}

/// Computes and assigns the error for one (period, station) pair.
fn synthesize_pair<R: Rng + ?Sized>(
    station: &mut Station,
    period: f64,
    config: &SynthConfig,
    rng: &mut R,
) -> Result<f64, SynthError> {
    // ZXX and ZYY do not enter the estimate but must exist.
    let mut reals = [0.0; 4];
    for (slot, kind) in reals.iter_mut().zip(TensorComponent::ALL) {
        *slot = station
            .get_component(period, kind.name())
            .map_err(|e| lookup_error(period, station, e))?
            .real();
    }
    let [_zxx, zxy, zyx, _zyy] = reals;

    let base = base_error(zxy, zyx);
    let error = draw_error(base * config.mean_fraction(), config.sigma(), rng)?;

    // All four were found above, so the Err arm only fires if the station
    // changed in between. It maps to the same Lookup error as the reads.
    for kind in TensorComponent::ALL {
        match station.get_component_mut(period, kind.name()) {
            Ok(component) => component.set_error(error),
            Err(e) => return Err(lookup_error(period, station, e)),
        }
    }

    trace!(period, station = %station.code(), base, error, "pair done");
    Ok(error)
}

fn draw_error<R: Rng + ?Sized>(mean: f64, sigma: f64, rng: &mut R) -> Result<f64, SynthError> {
    if !mean.is_finite() {
        return Err(SynthError::Distribution {
            mean,
            sigma,
            message: "mean is not finite".to_string(),
        });
    }
    let normal = Normal::new(mean, sigma).map_err(|e| SynthError::Distribution {
        mean,
        sigma,
        message: e.to_string(),
    })?;
    Ok(normal.sample(rng))
}

fn lookup_error(period: f64, station: &Station, source: ModemError) -> SynthError {
    SynthError::Lookup {
        period,
        station: station.code().to_string(),
        source,
    }
}
