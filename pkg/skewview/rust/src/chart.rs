// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! One complete render pass, packaged as plain data for a chart renderer.

use chrono::{SecondsFormat, TimeZone, Utc};
use serde::Serialize;
use tracing::debug;

use crate::gradient::{GradientSplit, GradientStop, compute_split_offsets, is_abnormal};
use crate::interaction::InteractionState;
use crate::interval::{ReferenceArea, reference_areas, segment};
use crate::log_event::LogEvent;
use crate::palette::{LegendEntry, Palette};
use crate::snapshot::{Snapshot, extract};

const SHOW_REFERENCE_AREA: &str = "Show Reference Area";
const HIDE_REFERENCE_AREA: &str = "Hide Reference Area";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartModel {
    pub points: Vec<ChartPoint>,
    pub skew_threshold: f64,
    pub gradient: GradientSplit,
    pub gradient_stops: [GradientStop; 4],
    pub reference_areas: Vec<ReferenceArea>,
    pub legend: Vec<LegendEntry>,
    /// Caption of the button that flips band visibility.
    pub toggle_label: &'static str,
}

/// A plotted snapshot with its presentation fields alongside, not merged in,
/// so source fields can never shadow them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub snapshot: Snapshot,
    pub axis_label: Option<String>,
    pub tooltip: Tooltip,
}

/// Hover details for one point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    /// ISO-8601 UTC timestamp, `None` when the snapshot time is unknown.
    pub date: Option<String>,
    pub state: String,
    pub skew: i64,
    pub too_large: bool,
}

impl Tooltip {
    pub fn for_snapshot(snapshot: &Snapshot, threshold: f64) -> Self {
        Tooltip {
            date: snapshot.epoch_millis.and_then(format_iso_timestamp),
            state: snapshot.state_name().to_string(),
            skew: snapshot.skew(),
            too_large: is_abnormal(snapshot.skew(), threshold),
        }
    }

    pub fn skew_label(&self) -> String {
        if self.too_large {
            format!("skew : {} ms (Too large!)", self.skew)
        } else {
            format!("skew : {} ms", self.skew)
        }
    }
}

impl ChartModel {
    /// Derives every chart input from `log`. Nothing is cached between
    /// passes; only `interaction` carries over.
    pub fn build(log: &[LogEvent], palette: &Palette, interaction: &InteractionState) -> Self {
        let threshold = interaction.skew_threshold();
        let snapshots = extract(log);
        let gradient = compute_split_offsets(snapshots.iter().map(Snapshot::skew), threshold);
        let intervals = segment(&snapshots);
        let reference_areas = reference_areas(&intervals, palette, interaction);
        debug!(
            snapshots = snapshots.len(),
            intervals = intervals.len(),
            upper = gradient.upper,
            lower = gradient.lower,
            "built skew chart"
        );

        let points = snapshots
            .into_iter()
            .map(|snapshot| ChartPoint {
                axis_label: snapshot.epoch_millis.map(format_axis_tick),
                tooltip: Tooltip::for_snapshot(&snapshot, threshold),
                snapshot,
            })
            .collect();

        ChartModel {
            points,
            skew_threshold: threshold,
            gradient,
            gradient_stops: gradient.stops(),
            reference_areas,
            legend: palette.legend(interaction),
            toggle_label: if interaction.reference_area_hidden() {
                SHOW_REFERENCE_AREA
            } else {
                HIDE_REFERENCE_AREA
            },
        }
    }
}

/// Formats epoch milliseconds as `HH:MM:SS` in UTC.
pub fn format_axis_tick(ms: i64) -> String {
    match Utc.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => format!("{}ms", ms),
    }
}

/// Formats epoch milliseconds as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn format_iso_timestamp(ms: i64) -> Option<String> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
