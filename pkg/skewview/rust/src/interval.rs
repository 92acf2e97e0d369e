// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Segments the snapshot sequence into same-state runs and turns them into
//! the background bands drawn behind the skew chart.

use std::iter;

use serde::Serialize;
use tracing::trace;

use crate::interaction::InteractionState;
use crate::palette::Palette;
use crate::snapshot::Snapshot;

/// A maximal run of consecutive snapshots with the same state name.
///
/// Holds its first snapshot apart from the rest, so an interval is never
/// empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<'a> {
    first: &'a Snapshot,
    rest: &'a [Snapshot],
}

impl<'a> Interval<'a> {
    pub fn first(&self) -> &'a Snapshot {
        self.first
    }

    pub fn last(&self) -> &'a Snapshot {
        self.rest.last().unwrap_or(self.first)
    }

    /// Snapshots of the interval in log order, starting with [`Self::first`].
    pub fn members(&self) -> impl Iterator<Item = &'a Snapshot> + use<'a> {
        iter::once(self.first).chain(self.rest)
    }

    pub fn state_name(&self) -> &'a str {
        self.first.state_name()
    }

    pub fn snapshot_count(&self) -> usize {
        self.rest.len() + 1
    }
}

/// Groups `snapshots` into intervals in a single left-to-right pass.
///
/// Adjacent intervals always differ in state name and the members of all
/// intervals, concatenated, are exactly `snapshots`.
pub fn segment(snapshots: &[Snapshot]) -> Vec<Interval<'_>> {
    snapshots
        .chunk_by(|a, b| a.state_name() == b.state_name())
        .filter_map(|run| {
            let (first, rest) = run.split_first()?;
            Some(Interval { first, rest })
        })
        .collect()
}

/// A background band for one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceArea {
    /// Identity key of the interval's first snapshot.
    pub key: String,
    pub state_name: String,
    pub palette_key: &'static str,
    pub color: &'static str,
    pub opacity: f64,
    pub x1: Option<i64>,
    pub x2: Option<i64>,
}

/// Builds one band per interval, spanning from its first snapshot to the
/// first snapshot of the next interval (the last band ends at its own last
/// snapshot). Returns no bands while the reference area is hidden.
pub fn reference_areas(
    intervals: &[Interval<'_>],
    palette: &Palette,
    interaction: &InteractionState,
) -> Vec<ReferenceArea> {
    if interaction.reference_area_hidden() {
        trace!(intervals = intervals.len(), "reference area hidden");
        return Vec::new();
    }

    intervals
        .iter()
        .enumerate()
        .map(|(i, interval)| {
            let start = interval.first();
            let end = intervals
                .get(i + 1)
                .map_or_else(|| interval.last(), |next| next.first());
            let entry = palette.classify(interval.state_name());
            ReferenceArea {
                key: start.identity_key.clone(),
                state_name: interval.state_name().to_string(),
                palette_key: entry.key,
                color: entry.color,
                opacity: interaction.highlight_opacity(entry.key),
                x1: start.epoch_millis,
                x2: end.epoch_millis,
            }
        })
        .collect()
}
