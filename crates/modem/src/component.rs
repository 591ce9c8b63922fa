//! Impedance tensor components.

use std::fmt;

use num_complex::Complex64;

/// The four elements of the 2x2 impedance tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TensorComponent {
    /// Ex response to Hx.
    Zxx,
    /// Ex response to Hy.
    Zxy,
    /// Ey response to Hx.
    Zyx,
    /// Ey response to Hy.
    Zyy,
}

impl TensorComponent {
    /// All four tensor elements in row-major order.
    pub const ALL: [TensorComponent; 4] = [Self::Zxx, Self::Zxy, Self::Zyx, Self::Zyy];

    /// Returns the component name as written in ModEM files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Zxx => "ZXX",
            Self::Zxy => "ZXY",
            Self::Zyx => "ZYX",
            Self::Zyy => "ZYY",
        }
    }

    /// Looks up a tensor element by its ModEM name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TensorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single complex transfer-function measurement and its error.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    value: Complex64,
    error: f64,
    /// Index of the file block this component was read from.
    block: usize,
}

impl Component {
    /// Creates a component belonging to data block `block`.
    pub fn new(value: Complex64, error: f64, block: usize) -> Self {
        Self {
            value,
            error,
            block,
        }
    }

    /// Returns the complex value.
    pub fn value(&self) -> Complex64 {
        self.value
    }

    /// Returns the real part.
    pub fn real(&self) -> f64 {
        self.value.re
    }

    /// Returns the imaginary part.
    pub fn imag(&self) -> f64 {
        self.value.im
    }

    /// Returns the error estimate.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Overwrites the error estimate. The value is stored as given.
    pub fn set_error(&mut self, error: f64) {
        self.error = error;
    }

    /// Returns the index of the data block this component belongs to.
    pub fn block(&self) -> usize {
        self.block
    }
}
