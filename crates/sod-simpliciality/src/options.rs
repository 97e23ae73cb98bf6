use serde::{Deserialize, Serialize};
use sod_core::SodError;

/// Size filters shared by every simpliciality metric.
///
/// Edges smaller than `min_size` are ignored. With `exclude_min_size` set,
/// edges of exactly `min_size` members are not evaluated as candidate
/// simplices since they are trivially simplicial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplicialityOptions {
    /// Smallest edge size taken into account.
    pub min_size: usize,
    /// Skip edges of exactly `min_size` members when picking candidates.
    pub exclude_min_size: bool,
}

impl Default for SimplicialityOptions {
    fn default() -> Self {
        Self {
            min_size: 2,
            exclude_min_size: true,
        }
    }
}

impl SimplicialityOptions {
    /// Options with explicit values for both fields.
    pub fn new(min_size: usize, exclude_min_size: bool) -> Self {
        Self {
            min_size,
            exclude_min_size,
        }
    }

    /// Smallest size an edge needs to be evaluated as a candidate simplex.
    pub fn threshold(&self) -> usize {
        self.min_size + usize::from(self.exclude_min_size)
    }

    /// Rejects options no metric can be evaluated with.
    pub fn validate(&self) -> Result<(), SodError> {
        if self.min_size == 0 {
            return Err(SodError::input("invalid-min-size", "min_size must be positive")
                .with_context("min_size", self.min_size));
        }
        Ok(())
    }
}
