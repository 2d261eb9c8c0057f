//! Static category/length configuration and the position rule table.
//!
//! All enumerations here are closed sets; every lookup is a total function
//! with no error path. Serde labels match the persisted wire format of the
//! factory blob, so an existing device's data parses unchanged.

use serde::{Deserialize, Serialize};

/// Material category of a slat.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothes,
    Trousers,
    #[serde(rename = "Pull Out")]
    PullOut,
}

impl Category {
    pub const ALL: &'static [Category] = &[Category::Clothes, Category::Trousers, Category::PullOut];

    /// Wire/display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Clothes => "Clothes",
            Category::Trousers => "Trousers",
            Category::PullOut => "Pull Out",
        }
    }
}

/// Slat color code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Wh,
    Wso,
    Grey,
    Beige,
}

impl Color {
    pub const ALL: &'static [Color] = &[Color::Wh, Color::Wso, Color::Grey, Color::Beige];

    /// Wire/display label.
    pub fn label(self) -> &'static str {
        match self {
            Color::Wh => "WH",
            Color::Wso => "WSO",
            Color::Grey => "GREY",
            Color::Beige => "BEIGE",
        }
    }
}

/// Production stage an entry was observed at.
///
/// Wire labels are the floor's own (partly Polish) stage names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductionStep {
    /// Pile output ("Po Pile"): slats straight off the pile, no position yet.
    #[serde(rename = "Po Pile")]
    PileOutput,
    Hotstamping,
    /// Milling ("Frezarka").
    #[serde(rename = "Frezarka")]
    Milling,
    /// Post-wheels ("Po kółkach").
    #[serde(rename = "Po kółkach")]
    PostWheels,
    /// First cycle ("Pierwszy cykl").
    #[serde(rename = "Pierwszy cykl")]
    FirstCycle,
}

impl ProductionStep {
    pub const ALL: &'static [ProductionStep] = &[
        ProductionStep::PileOutput,
        ProductionStep::Hotstamping,
        ProductionStep::Milling,
        ProductionStep::PostWheels,
        ProductionStep::FirstCycle,
    ];

    /// Wire/display label.
    pub fn label(self) -> &'static str {
        match self {
            ProductionStep::PileOutput => "Po Pile",
            ProductionStep::Hotstamping => "Hotstamping",
            ProductionStep::Milling => "Frezarka",
            ProductionStep::PostWheels => "Po kółkach",
            ProductionStep::FirstCycle => "Pierwszy cykl",
        }
    }
}

/// Position a slat occupies in the finished product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionType {
    #[serde(rename = "Przód")]
    Front,
    #[serde(rename = "Tył")]
    Back,
    /// The single position used at pile output.
    #[serde(rename = "Domyślne")]
    Default,
    /// Undifferentiated side slats (post-first-cycle steps).
    #[serde(rename = "Boki")]
    Sides,
    #[serde(rename = "Lewy")]
    Left,
    #[serde(rename = "Lewy HS")]
    LeftHs,
    #[serde(rename = "Prawy")]
    Right,
    #[serde(rename = "Prawy HS")]
    RightHs,
}

impl PositionType {
    pub const ALL: &'static [PositionType] = &[
        PositionType::Front,
        PositionType::Back,
        PositionType::Default,
        PositionType::Sides,
        PositionType::Left,
        PositionType::LeftHs,
        PositionType::Right,
        PositionType::RightHs,
    ];

    /// Wire/display label.
    pub fn label(self) -> &'static str {
        match self {
            PositionType::Front => "Przód",
            PositionType::Back => "Tył",
            PositionType::Default => "Domyślne",
            PositionType::Sides => "Boki",
            PositionType::Left => "Lewy",
            PositionType::LeftHs => "Lewy HS",
            PositionType::Right => "Prawy",
            PositionType::RightHs => "Prawy HS",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::fmt::Display for ProductionStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::fmt::Display for PositionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Declared cut lengths (mm) for one category, split by slat role.
///
/// The two sets are disjoint; `side` membership is what the position rule
/// table keys on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CategoryLengths {
    pub front_back: &'static [u32],
    pub side: &'static [u32],
}

/// Static length table, declared order (not sorted).
pub const fn lengths_for(category: Category) -> CategoryLengths {
    match category {
        Category::Clothes => CategoryLengths {
            front_back: &[961, 711, 461],
            side: &[531, 301],
        },
        Category::Trousers | Category::PullOut => CategoryLengths {
            front_back: &[926, 676, 426],
            side: &[531, 301],
        },
    }
}

/// All lengths valid for a category: front/back lengths followed by side
/// lengths, in the table's declared order.
pub fn available_lengths(category: Category) -> Vec<u32> {
    let lengths = lengths_for(category);
    lengths
        .front_back
        .iter()
        .chain(lengths.side)
        .copied()
        .collect()
}

/// Whether `length_mm` is classified as a side length for `category`.
pub fn is_side_length(category: Category, length_mm: u32) -> bool {
    lengths_for(category).side.contains(&length_mm)
}

/// Valid positions for a (category, length, step) combination.
///
/// Rule priority: pile output always yields the single default position;
/// the first cycle distinguishes left/right side slats (with and without
/// hotstamp); every later step collapses side slats to "Sides". Non-side
/// lengths are always front/back once past the pile.
pub fn positions_for(
    category: Category,
    length_mm: u32,
    step: ProductionStep,
) -> &'static [PositionType] {
    const FRONT_BACK: &[PositionType] = &[PositionType::Front, PositionType::Back];
    const FIRST_CYCLE_SIDES: &[PositionType] = &[
        PositionType::Left,
        PositionType::LeftHs,
        PositionType::Right,
        PositionType::RightHs,
    ];
    const SIDES_ONLY: &[PositionType] = &[PositionType::Sides];
    const DEFAULT_ONLY: &[PositionType] = &[PositionType::Default];

    let side = is_side_length(category, length_mm);
    match step {
        ProductionStep::PileOutput => DEFAULT_ONLY,
        ProductionStep::FirstCycle => {
            if side {
                FIRST_CYCLE_SIDES
            } else {
                FRONT_BACK
            }
        }
        ProductionStep::Hotstamping | ProductionStep::Milling | ProductionStep::PostWheels => {
            if side {
                SIDES_ONLY
            } else {
                FRONT_BACK
            }
        }
    }
}
