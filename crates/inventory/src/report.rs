//! Filtering and grouped summaries over recorded entries.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use slatstock_core::ValueObject;

use crate::entry::InventoryEntry;
use crate::rules::{Category, Color, PositionType, ProductionStep};

/// Transient query criteria. Absent fields impose no constraint; the
/// default value matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryFilter {
    pub category: Option<Category>,
    pub color: Option<Color>,
    #[serde(rename = "productionStep")]
    pub step: Option<ProductionStep>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl ValueObject for InventoryFilter {}

impl InventoryFilter {
    /// Whether an entry satisfies every present criterion.
    ///
    /// Date bounds are inclusive and compare against the entry's creation
    /// date in the device's local timezone.
    pub fn matches(&self, entry: &InventoryEntry) -> bool {
        if let Some(category) = self.category {
            if entry.category != category {
                return false;
            }
        }
        if let Some(color) = self.color {
            if entry.color != color {
                return false;
            }
        }
        if let Some(step) = self.step {
            if entry.step != step {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let date = local_entry_date(entry);
            if let Some(from) = self.date_from {
                if date < from {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if date > to {
                    return false;
                }
            }
        }

        true
    }
}

/// Calendar date of an entry in the device's local timezone.
fn local_entry_date(entry: &InventoryEntry) -> NaiveDate {
    entry.timestamp.with_timezone(&Local).date_naive()
}

/// Entries satisfying the filter, input order preserved.
pub fn filter_entries(entries: &[InventoryEntry], filter: &InventoryFilter) -> Vec<InventoryEntry> {
    entries.iter().filter(|e| filter.matches(e)).cloned().collect()
}

/// The 5-tuple a summary card is keyed by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub category: Category,
    pub color: Color,
    pub length_mm: u32,
    pub position: PositionType,
    pub step: ProductionStep,
}

impl ValueObject for GroupKey {}

impl GroupKey {
    pub fn of(entry: &InventoryEntry) -> Self {
        Self {
            category: entry.category,
            color: entry.color,
            length_mm: entry.length_mm,
            position: entry.position,
            step: entry.step,
        }
    }
}

/// One summary card: all entries sharing a group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryGroup {
    pub key: GroupKey,
    /// Number of entries in the group.
    pub count: usize,
    /// Sum of `quantity` over the group.
    pub total_quantity: u64,
    /// Member entries, input order preserved.
    pub entries: Vec<InventoryEntry>,
}

/// Grouped view over a set of entries.
///
/// Groups iterate in first-seen order, not sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySummary {
    groups: Vec<SummaryGroup>,
}

impl InventorySummary {
    pub fn groups(&self) -> &[SummaryGroup] {
        &self.groups
    }

    pub fn get(&self, key: &GroupKey) -> Option<&SummaryGroup> {
        self.groups.iter().find(|g| g.key == *key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total quantity across all groups.
    pub fn total_quantity(&self) -> u64 {
        self.groups.iter().map(|g| g.total_quantity).sum()
    }
}

/// Group entries by their 5-tuple key.
pub fn summarize(entries: &[InventoryEntry]) -> InventorySummary {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<SummaryGroup> = Vec::new();

    for entry in entries {
        let key = GroupKey::of(entry);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(SummaryGroup {
                key,
                count: 0,
                total_quantity: 0,
                entries: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.count += 1;
        group.total_quantity += u64::from(entry.quantity);
        group.entries.push(entry.clone());
    }

    InventorySummary { groups }
}
