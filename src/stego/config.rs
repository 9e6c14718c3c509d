// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Codec selection and parameters.
//!
//! The quantization step and the delta magnitude are explicit parameters that
//! travel with every call, so several robustness/capacity profiles can coexist.
//! Both sides of a watermark must use the same values.

use core::fmt;
use core::str::FromStr;

use crate::stego::error::StegoError;

/// Default QIM quantization step `S`.
pub const DEFAULT_QIM_STEP: f64 = 0.001;

/// Default Delta-Additive offset `D`.
pub const DEFAULT_DELTA: f64 = 0.0005;

/// Default expected message length (characters) when the caller has none.
pub const DEFAULT_MESSAGE_LENGTH: usize = 20;

/// Embedding method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Quantization Index Modulation on X. Robust to small perturbations.
    #[default]
    Qim,
    /// Additive ±D offset on Y. Fragile.
    Delta,
    /// QIM and Delta together; extraction picks the more plausible reading.
    Hybrid,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Qim, Method::Delta, Method::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Qim => "qim",
            Self::Delta => "delta",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qim" => Ok(Self::Qim),
            "delta" | "delta-additive" => Ok(Self::Delta),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(StegoError::UnknownMethod(s.to_string())),
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<f64, StegoError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(StegoError::InvalidParameter { name, value })
    }
}

/// QIM parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QimParams {
    step: f64,
}

impl QimParams {
    /// # Errors
    /// [`StegoError::InvalidParameter`] unless `step` is finite and > 0.
    pub fn new(step: f64) -> Result<Self, StegoError> {
        Ok(Self { step: check_positive("step", step)? })
    }

    /// Quantization step `S`.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for QimParams {
    fn default() -> Self {
        Self { step: DEFAULT_QIM_STEP }
    }
}

/// Delta-Additive parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaParams {
    delta: f64,
}

impl DeltaParams {
    /// # Errors
    /// [`StegoError::InvalidParameter`] unless `delta` is finite and > 0.
    pub fn new(delta: f64) -> Result<Self, StegoError> {
        Ok(Self { delta: check_positive("delta", delta)? })
    }

    /// Offset magnitude `D`.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Extraction period `2D`.
    pub fn period(&self) -> f64 {
        2.0 * self.delta
    }
}

impl Default for DeltaParams {
    fn default() -> Self {
        Self { delta: DEFAULT_DELTA }
    }
}

/// Full codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CodecConfig {
    pub method: Method,
    pub qim: QimParams,
    pub delta: DeltaParams,
}

impl CodecConfig {
    /// Default parameters with the given method.
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// # Errors
    /// [`StegoError::InvalidParameter`] for a non-positive or non-finite step.
    pub fn with_qim_step(mut self, step: f64) -> Result<Self, StegoError> {
        self.qim = QimParams::new(step)?;
        Ok(self)
    }

    /// # Errors
    /// [`StegoError::InvalidParameter`] for a non-positive or non-finite delta.
    pub fn with_delta(mut self, delta: f64) -> Result<Self, StegoError> {
        self.delta = DeltaParams::new(delta)?;
        Ok(self)
    }
}
