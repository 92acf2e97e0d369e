// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use serde::Serialize;

use crate::interaction::InteractionState;

/// Key of the bucket for states no palette entry matches.
pub const CUSTOM_STATE_KEY: &str = "__custom";

const CUSTOM_STATE_LABEL: &str = "Custom State";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub key: &'static str,
    pub color: &'static str,
}

/// Ordered state-name matchers with a fallback entry.
///
/// Matching is a case-sensitive substring test; the first entry in table
/// order wins, so more specific keys must come before keys they contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: &'static [PaletteEntry],
    fallback: PaletteEntry,
}

/// Colours for the agent states reported by the contact center.
pub static AGENT_STATES: Palette = Palette {
    entries: &[
        PaletteEntry { key: "Available", color: "#88ff88" },
        PaletteEntry { key: "PendingBusy", color: "#fff8a2" },
        PaletteEntry { key: "Busy", color: "#ffcc88" },
        PaletteEntry { key: "AfterCallWork", color: "#888888" },
        PaletteEntry { key: "FailedConnectAgent", color: "#ff8488" },
        PaletteEntry { key: "FailedConnectCustomer", color: "#ff8488" },
        PaletteEntry { key: "CallingCustomer", color: "#fff8a2" },
        PaletteEntry { key: "MissedCallAgent", color: "#bbbbff" },
    ],
    fallback: PaletteEntry {
        key: CUSTOM_STATE_KEY,
        color: "#ffffff",
    },
};

/// One row of the chart legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub opacity: f64,
}

impl Palette {
    pub const fn new(entries: &'static [PaletteEntry], fallback: PaletteEntry) -> Self {
        Palette { entries, fallback }
    }

    /// Resolves the palette entry for a state name. Never fails: unknown
    /// states land in the fallback entry.
    pub fn classify(&self, state_name: &str) -> PaletteEntry {
        self.entries
            .iter()
            .find(|entry| state_name.contains(entry.key))
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> PaletteEntry {
        self.fallback
    }

    /// All entries in table order, fallback last.
    pub fn entries(&self) -> impl Iterator<Item = PaletteEntry> + '_ {
        self.entries
            .iter()
            .copied()
            .chain(std::iter::once(self.fallback))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries().any(|entry| entry.key == key)
    }

    pub fn legend(&self, interaction: &InteractionState) -> Vec<LegendEntry> {
        self.entries()
            .map(|entry| LegendEntry {
                key: entry.key,
                label: if entry.key == self.fallback.key {
                    CUSTOM_STATE_LABEL
                } else {
                    entry.key
                },
                color: entry.color,
                opacity: interaction.highlight_opacity(entry.key),
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        AGENT_STATES
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_match() {
        let entry = AGENT_STATES.classify("AfterCallWork");
        assert_eq!(entry.key, "AfterCallWork");
        assert_eq!(entry.color, "#888888");
    }

    #[test]
    fn test_classify_substring_match() {
        let entry = AGENT_STATES.classify("FailedConnectAgent_retry");
        assert_eq!(entry.key, "FailedConnectAgent");
        assert_eq!(entry.color, "#ff8488");
    }

    #[test]
    fn test_classify_prefers_table_order() {
        // Contains both "PendingBusy" and "Busy"; PendingBusy is listed first.
        assert_eq!(AGENT_STATES.classify("PendingBusy").key, "PendingBusy");
        // "Available" precedes "Busy" in the table.
        assert_eq!(AGENT_STATES.classify("Busy_Available").key, "Available");
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(AGENT_STATES.classify("available").key, CUSTOM_STATE_KEY);
    }

    #[test]
    fn test_classify_falls_back() {
        let entry = AGENT_STATES.classify("Lunch");
        assert_eq!(entry, AGENT_STATES.fallback());
        assert_eq!(entry.color, "#ffffff");
        assert_eq!(AGENT_STATES.classify("").key, CUSTOM_STATE_KEY);
    }

    #[test]
    fn test_custom_palette() {
        static ENTRIES: [PaletteEntry; 1] = [PaletteEntry {
            key: "Offline",
            color: "#000000",
        }];
        let palette = Palette::new(
            &ENTRIES,
            PaletteEntry {
                key: "other",
                color: "#cccccc",
            },
        );

        assert_eq!(palette.classify("Offline").color, "#000000");
        assert_eq!(palette.classify("Available").key, "other");
        assert_eq!(palette.entries().count(), 2);
    }

    #[test]
    fn test_legend_lists_fallback_last_with_label() {
        let interaction = InteractionState::new(&AGENT_STATES);
        let legend = AGENT_STATES.legend(&interaction);

        assert_eq!(legend.len(), 9);
        assert_eq!(legend[0].key, "Available");
        assert_eq!(legend[0].label, "Available");
        assert_eq!(legend[8].key, CUSTOM_STATE_KEY);
        assert_eq!(legend[8].label, "Custom State");
        assert!(legend.iter().all(|entry| entry.opacity == 1.0));
    }
}
