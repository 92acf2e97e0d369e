// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Flattens snapshot events into the point sequence plotted by the view.

use std::ops::Range;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::log_event::{LogEvent, SnapshotObject, SnapshotRecord};

/// Serialized names of the fields [`Snapshot`] derives. Source fields with the
/// same names are dropped from the flattened record so each key is emitted once.
const DERIVED_FIELDS: [&str; 7] = [
    "derivedDate",
    "derivedTime",
    "derivedTimezoneSuffix",
    "epochMillis",
    "sourceEventKey",
    "identityKey",
    "validEventKeyRange",
];

/// A point-in-time agent state and skew, derived from one snapshot object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(flatten)]
    pub record: SnapshotRecord,
    /// `YYYY-MM-DD` part of the timestamp.
    pub derived_date: String,
    /// `HH:MM:SS.sss` part of the timestamp.
    pub derived_time: String,
    /// Offset designator trailing the time, e.g. `Z` or `+09:00`.
    pub derived_timezone_suffix: String,
    /// UTC epoch milliseconds, `None` when the timestamp does not parse.
    pub epoch_millis: Option<i64>,
    pub source_event_key: i64,
    /// `<source_event_key>-<object index>`, unique within one pass.
    pub identity_key: String,
    /// Half-open range of event keys this snapshot is authoritative for.
    /// Serialized as `{"start": .., "end": ..}`.
    pub valid_event_key_range: Range<i64>,
}

impl Snapshot {
    fn new(event_key: i64, index: usize, mut record: SnapshotRecord) -> Self {
        for field in DERIVED_FIELDS {
            if record.extra.remove(field).is_some() {
                debug!(
                    event_key,
                    index,
                    field,
                    "dropping source field shadowed by a derived field"
                );
            }
        }
        let timestamp = record.snapshot_timestamp.as_str();
        Snapshot {
            derived_date: char_slice(timestamp, 0, Some(10)),
            derived_time: char_slice(timestamp, 11, Some(23)),
            derived_timezone_suffix: char_slice(timestamp, 23, None),
            epoch_millis: parse_epoch_millis(timestamp),
            source_event_key: event_key,
            identity_key: format!("{event_key}-{index}"),
            valid_event_key_range: event_key..event_key,
            record,
        }
    }

    pub fn state_name(&self) -> &str {
        &self.record.state.name
    }

    pub fn skew(&self) -> i64 {
        self.record.skew
    }

    /// Event keys this snapshot is authoritative for, ascending.
    pub fn valid_event_keys(&self) -> Range<i64> {
        self.valid_event_key_range.clone()
    }

    pub fn is_authoritative_for(&self, event_key: i64) -> bool {
        self.valid_event_key_range.contains(&event_key)
    }
}

/// Extracts snapshots from `log`, preserving event order and object order.
///
/// The log is expected in ascending key order and is not re-sorted. Objects
/// of snapshot events that fail to decode are skipped.
pub fn extract(log: &[LogEvent]) -> Vec<Snapshot> {
    let mut snapshots: Vec<Snapshot> = log
        .iter()
        .filter(|event| event.is_snapshot())
        .flat_map(|event| {
            event
                .objects
                .iter()
                .enumerate()
                .filter_map(move |(index, object)| {
                    match SnapshotObject::deserialize(object) {
                        Ok(object) => Some(Snapshot::new(event.key, index, object.snapshot)),
                        Err(e) => {
                            warn!(
                                event_key = event.key,
                                index,
                                error = %e,
                                "skipping undecodable snapshot object"
                            );
                            None
                        }
                    }
                })
        })
        .collect();

    // Each snapshot holds until the next snapshot's event; the last one runs
    // through the final event of the whole log.
    let upper_bounds: Vec<i64> = snapshots
        .iter()
        .skip(1)
        .map(|next| next.source_event_key)
        .chain(log.last().map(|event| event.key.saturating_add(1)))
        .collect();
    for (snapshot, upper) in snapshots.iter_mut().zip(upper_bounds) {
        let lower = snapshot.source_event_key;
        snapshot.valid_event_key_range = lower..upper.max(lower);
    }

    debug!(
        events = log.len(),
        snapshots = snapshots.len(),
        "extracted agent snapshots"
    );
    snapshots
}

/// Parses an ISO-8601 timestamp into UTC epoch milliseconds.
///
/// Timestamps without an offset designator are read as UTC.
pub fn parse_epoch_millis(timestamp: &str) -> Option<i64> {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => Some(parsed.timestamp_millis()),
        Err(_) => match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
            Ok(naive) => Some(naive.and_utc().timestamp_millis()),
            Err(e) => {
                debug!(timestamp, error = %e, "unparsable snapshot timestamp");
                None
            }
        },
    }
}

/// Character range `[start, end)` of `s`, clamped to its length.
fn char_slice(s: &str, start: usize, end: Option<usize>) -> String {
    let chars = s.chars().skip(start);
    match end {
        Some(end) => chars.take(end.saturating_sub(start)).collect(),
        None => chars.collect(),
    }
}
