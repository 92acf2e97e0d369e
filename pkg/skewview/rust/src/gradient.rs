// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Two-tone fill for the skew area: green while `|skew| < threshold`, red
//! outside of it.

use serde::Serialize;

pub const IN_BOUNDS_COLOR: &str = "green";
pub const OUT_OF_BOUNDS_COLOR: &str = "red";

/// Normalized vertical positions (0 = top, 1 = bottom) where the fill
/// crosses `+threshold` (`upper`) and `-threshold` (`lower`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientSplit {
    pub upper: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: &'static str,
}

impl GradientSplit {
    /// Hard-edged stops for a top-to-bottom linear gradient.
    pub fn stops(&self) -> [GradientStop; 4] {
        [
            GradientStop {
                offset: self.upper,
                color: OUT_OF_BOUNDS_COLOR,
            },
            GradientStop {
                offset: self.upper,
                color: IN_BOUNDS_COLOR,
            },
            GradientStop {
                offset: self.lower,
                color: IN_BOUNDS_COLOR,
            },
            GradientStop {
                offset: self.lower,
                color: OUT_OF_BOUNDS_COLOR,
            },
        ]
    }
}

/// Everything in bounds; used when there is no data to scale against.
impl Default for GradientSplit {
    fn default() -> Self {
        GradientSplit {
            upper: 0.0,
            lower: 1.0,
        }
    }
}

/// Computes the gradient split for a skew series and threshold.
///
/// When every value is identical the range is zero; the ratio then takes its
/// limit (1 if the threshold line is above the data, 0 otherwise), so a flat
/// series renders entirely in one colour. An empty series yields the default.
pub fn compute_split_offsets(
    skew_values: impl IntoIterator<Item = i64>,
    threshold: f64,
) -> GradientSplit {
    let bounds = skew_values
        .into_iter()
        .fold(None, |bounds: Option<(i64, i64)>, skew| match bounds {
            None => Some((skew, skew)),
            Some((min, max)) => Some((min.min(skew), max.max(skew))),
        });
    let Some((data_min, data_max)) = bounds else {
        return GradientSplit::default();
    };

    let (data_min, data_max) = (data_min as f64, data_max as f64);
    let range = data_max - data_min;
    let y0 = normalized(threshold - data_min, range);
    let y1 = normalized(-threshold - data_min, range);

    GradientSplit {
        upper: 1.0 - y0,
        lower: 1.0 - y1,
    }
}

/// `offset / range` clamped to [0, 1], total for a zero range.
fn normalized(offset: f64, range: f64) -> f64 {
    let ratio = if range > 0.0 {
        offset / range
    } else if offset > 0.0 {
        1.0
    } else {
        0.0
    };
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Whether a skew is large enough to be flagged.
pub fn is_abnormal(skew: i64, threshold: f64) -> bool {
    skew.unsigned_abs() as f64 >= threshold
}
