// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Derives the agent skew chart from an in-memory event log.
//!
//! One render pass runs leaf-first:
//!
//! 1. [`snapshot::extract`] flattens `GET_AGENT_SNAPSHOT succeeded.` events
//!    into [`Snapshot`] records.
//! 2. [`interval::segment`] collapses consecutive snapshots sharing a state
//!    name into [`Interval`]s, which become background bands.
//! 3. [`gradient::compute_split_offsets`] finds where the skew area switches
//!    between in-bounds and out-of-bounds colouring.
//! 4. [`Palette::classify`] picks the band colour for a state name.
//!
//! [`InteractionState`] holds the user-driven knobs (threshold, band
//! visibility, legend highlight) and [`ChartModel`] bundles everything a
//! chart renderer needs.

// Correctness
#![deny(clippy::indexing_slicing)]
#![deny(clippy::string_slice)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::undocumented_unsafe_blocks)]
// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod chart;
pub mod config;
mod errors;
pub mod gradient;
pub mod interaction;
pub mod interval;
pub mod log_event;
pub mod palette;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export the public API
pub use chart::ChartModel;
pub use config::ViewConfig;
pub use errors::Error;
pub use gradient::{GradientSplit, compute_split_offsets};
pub use interaction::InteractionState;
pub use interval::{Interval, ReferenceArea, reference_areas, segment};
pub use log_event::{LogEvent, SNAPSHOT_SUCCEEDED, parse_log};
pub use palette::{Palette, PaletteEntry};
pub use snapshot::{Snapshot, extract};
