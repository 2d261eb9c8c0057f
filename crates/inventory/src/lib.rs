//! Inventory domain: rule tables, entries, filtering and summaries.
//!
//! This crate contains the business rules of the slat tracker, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod entry;
pub mod report;
pub mod rules;

pub use entry::{InventoryEntry, MAX_PHOTO_BYTES, NewEntry};
pub use report::{
    GroupKey, InventoryFilter, InventorySummary, SummaryGroup, filter_entries, summarize,
};
pub use rules::{
    Category, CategoryLengths, Color, PositionType, ProductionStep, available_lengths,
    is_side_length, lengths_for, positions_for,
};
