//! # Observed sky configuration
//!
//! [`SkyParams`] tunes how an [`ObservedSky`](crate::observed_sky::ObservedSky)
//! snapshot is computed. It never changes *what* is computed: every setting
//! yields the same positions, in the same order.
//!
//! Parameters
//! -----------------
//! * `parallel_threshold` – number of catalogue stars from which the per-star
//!   pipeline (equatorial → horizontal → plane) runs on the rayon thread pool.
//!   Smaller catalogues are processed sequentially.
//! * `min_chunk_len` – minimum number of stars handed to one rayon task.
//!
//! Defaults
//! -----------------
//! * `parallel_threshold`: 2048
//! * `min_chunk_len`: 256
//!
//! `SkyParams` derives `serde` traits so that a host application can store it
//! in its own configuration file. Missing fields take their default value, and
//! deserialized values go through the same validation as [`SkyParamsBuilder::build`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rigel_errors::RigelError;

/// Tuning parameters of the observed sky computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SkyParamsConfig")]
pub struct SkyParams {
    /// Catalogue size from which stars are projected in parallel.
    pub parallel_threshold: usize,
    /// Minimum number of stars per rayon task, at least 1.
    pub min_chunk_len: usize,
}

impl SkyParams {
    /// Construct a new [`SkyParams`] with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`SkyParamsBuilder`] to configure custom parameters.
    ///
    /// ```rust
    /// use rigel::sky_params::SkyParams;
    ///
    /// let params = SkyParams::builder()
    ///     .parallel_threshold(0) // always parallel
    ///     .min_chunk_len(64)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.min_chunk_len, 64);
    /// ```
    pub fn builder() -> SkyParamsBuilder {
        SkyParamsBuilder::new()
    }

    /// Return `true` if a catalogue of `star_count` stars is processed in parallel.
    pub fn is_parallel_for(&self, star_count: usize) -> bool {
        star_count >= self.parallel_threshold
    }
}

impl Default for SkyParams {
    fn default() -> Self {
        Self {
            parallel_threshold: 2048,
            min_chunk_len: 256,
        }
    }
}

/// Unvalidated [`SkyParams`] as read from a configuration file.
#[derive(Deserialize)]
#[serde(default)]
struct SkyParamsConfig {
    parallel_threshold: usize,
    min_chunk_len: usize,
}

impl Default for SkyParamsConfig {
    fn default() -> Self {
        let SkyParams {
            parallel_threshold,
            min_chunk_len,
        } = SkyParams::default();
        Self {
            parallel_threshold,
            min_chunk_len,
        }
    }
}

impl TryFrom<SkyParamsConfig> for SkyParams {
    type Error = RigelError;

    fn try_from(config: SkyParamsConfig) -> Result<Self, Self::Error> {
        SkyParams::builder()
            .parallel_threshold(config.parallel_threshold)
            .min_chunk_len(config.min_chunk_len)
            .build()
    }
}

/// Builder for [`SkyParams`], with validation.
#[derive(Debug, Clone)]
pub struct SkyParamsBuilder {
    params: SkyParams,
}

impl Default for SkyParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SkyParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: SkyParams::default(),
        }
    }

    pub fn parallel_threshold(mut self, v: usize) -> Self {
        self.params.parallel_threshold = v;
        self
    }

    pub fn min_chunk_len(mut self, v: usize) -> Self {
        self.params.min_chunk_len = v;
        self
    }

    /// Validate and return the parameters.
    ///
    /// Errors
    /// ------
    /// * [`RigelError::InvalidSkyParams`] if `min_chunk_len == 0`.
    pub fn build(self) -> Result<SkyParams, RigelError> {
        if self.params.min_chunk_len == 0 {
            return Err(RigelError::InvalidSkyParams(
                "min_chunk_len must be >= 1".into(),
            ));
        }
        Ok(self.params)
    }
}

impl fmt::Display for SkyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Observed Sky Parameters")?;
            writeln!(f, "-----------------------")?;
            writeln!(
                f,
                "  parallel_threshold = {:<8} # stars before switching to rayon",
                self.parallel_threshold
            )?;
            write!(
                f,
                "  min_chunk_len      = {:<8} # minimum stars per rayon task",
                self.min_chunk_len
            )
        } else {
            write!(
                f,
                "SkyParams(parallel_threshold={}, min_chunk_len={})",
                self.parallel_threshold, self.min_chunk_len
            )
        }
    }
}
