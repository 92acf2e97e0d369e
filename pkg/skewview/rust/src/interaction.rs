// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! User-driven view state, owned by the view and read on every render pass.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::ViewConfig;
use crate::palette::Palette;

pub const DEFAULT_SKEW_THRESHOLD_MS: f64 = 10_000.0;

/// Opacity of legend entries and bands that are not under focus.
pub const DIMMED_OPACITY: f64 = 0.25;

const FULL_OPACITY: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    skew_threshold: f64,
    reference_area_hidden: bool,
    highlight_opacity: BTreeMap<&'static str, f64>,
}

impl InteractionState {
    /// Default state: 10 s threshold, bands visible, nothing dimmed.
    pub fn new(palette: &Palette) -> Self {
        InteractionState {
            skew_threshold: DEFAULT_SKEW_THRESHOLD_MS,
            reference_area_hidden: false,
            highlight_opacity: palette
                .entries()
                .map(|entry| (entry.key, FULL_OPACITY))
                .collect(),
        }
    }

    /// Seeds the state from a validated config.
    pub fn from_config(config: &ViewConfig, palette: &Palette) -> Self {
        InteractionState {
            skew_threshold: config.skew_threshold_ms,
            reference_area_hidden: config.reference_area_hidden,
            ..Self::new(palette)
        }
    }

    pub fn skew_threshold(&self) -> f64 {
        self.skew_threshold
    }

    pub fn reference_area_hidden(&self) -> bool {
        self.reference_area_hidden
    }

    /// Opacity for a palette key; keys outside the palette render opaque.
    pub fn highlight_opacity(&self, key: &str) -> f64 {
        self.highlight_opacity
            .get(key)
            .copied()
            .unwrap_or(FULL_OPACITY)
    }

    pub fn toggle_reference_area_visibility(&mut self) {
        self.reference_area_hidden = !self.reference_area_hidden;
        debug!(
            hidden = self.reference_area_hidden,
            "toggled reference area"
        );
    }

    /// Highlights one palette key and dims the others, or restores every key
    /// when `focused` is `None`. Unknown keys leave the state untouched.
    pub fn set_highlight_focus(&mut self, focused: Option<&str>) {
        match focused {
            Some(key) if !self.highlight_opacity.contains_key(key) => {
                debug!(key, "ignoring highlight focus on unknown palette key");
            }
            Some(key) => {
                for (name, opacity) in self.highlight_opacity.iter_mut() {
                    *opacity = if *name == key {
                        FULL_OPACITY
                    } else {
                        DIMMED_OPACITY
                    };
                }
            }
            None => {
                for opacity in self.highlight_opacity.values_mut() {
                    *opacity = FULL_OPACITY;
                }
            }
        }
    }
}
