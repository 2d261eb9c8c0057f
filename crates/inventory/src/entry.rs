//! Inventory entries and creation-time validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use slatstock_core::{DomainError, DomainResult, Entity, EntryId};

use crate::rules::{
    Category, Color, PositionType, ProductionStep, available_lengths, positions_for,
};

/// Upper bound on an inline photo attachment, decoded bytes.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// One physical-inventory observation.
///
/// Immutable once created: there is no update operation, only create and
/// delete. Field names and enum labels on the wire match the persisted
/// factory blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub id: EntryId,
    pub category: Category,
    pub color: Color,
    #[serde(rename = "length")]
    pub length_mm: u32,
    #[serde(rename = "positionType")]
    pub position: PositionType,
    #[serde(rename = "productionStep")]
    pub step: ProductionStep,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pallet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Creation time, epoch milliseconds on the wire. Assigned at creation,
    /// immutable.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Entity for InventoryEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields collected for a new entry, before an id and timestamp exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub category: Category,
    pub color: Color,
    pub length_mm: u32,
    pub position: PositionType,
    pub step: ProductionStep,
    pub quantity: u32,
    pub pallet_id: Option<String>,
    pub photo_url: Option<String>,
}

impl NewEntry {
    /// Check the creation invariants.
    ///
    /// Rejections surface to the caller as-is; no partial record is created.
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        if !available_lengths(self.category).contains(&self.length_mm) {
            return Err(DomainError::validation(format!(
                "length {} mm is not configured for {}",
                self.length_mm, self.category,
            )));
        }

        let valid_positions = positions_for(self.category, self.length_mm, self.step);
        if !valid_positions.contains(&self.position) {
            return Err(DomainError::validation(format!(
                "position {} is not valid for {} ({} mm) at step {}",
                self.position, self.category, self.length_mm, self.step,
            )));
        }

        if let Some(pallet_id) = &self.pallet_id {
            if pallet_id.trim().is_empty() {
                return Err(DomainError::validation(
                    "pallet id cannot be blank; omit it instead",
                ));
            }
        }

        if let Some(photo_url) = &self.photo_url {
            if decoded_photo_bytes(photo_url) > MAX_PHOTO_BYTES {
                return Err(DomainError::validation(format!(
                    "photo exceeds the {} MB limit",
                    MAX_PHOTO_BYTES / (1024 * 1024),
                )));
            }
        }

        Ok(())
    }

    /// Build the immutable record once an id and timestamp are assigned.
    pub fn into_entry(self, id: EntryId, timestamp: DateTime<Utc>) -> InventoryEntry {
        InventoryEntry {
            id,
            category: self.category,
            color: self.color,
            length_mm: self.length_mm,
            position: self.position,
            step: self.step,
            quantity: self.quantity,
            pallet_id: self.pallet_id,
            photo_url: self.photo_url,
            timestamp,
        }
    }
}

/// Decoded source size of an inline photo reference.
///
/// Base64 data URIs inflate the source by 4/3, so the cap is checked against
/// the decoded payload; plain references count their literal length.
fn decoded_photo_bytes(photo_url: &str) -> usize {
    match photo_url.split_once(";base64,") {
        Some((_, payload)) => {
            let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
            (payload.len() / 4 * 3).saturating_sub(padding)
        }
        None => photo_url.len(),
    }
}
