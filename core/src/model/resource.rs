use crate::types::{FixtureId, Turn};
use serde::{Deserialize, Serialize};

/// An amount with its unit of measure, e.g. 50 "bushels".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub number: f64,
    pub units:  String,
}

impl Quantity {
    pub fn new(number: f64, units: impl Into<String>) -> Self {
        Self { number, units: units.into() }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.units)
    }
}

/// A stockpile of some resource held by a unit or fortress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePile {
    pub id:       FixtureId,
    /// Broad category: "food", "wood", "metal", ...
    pub kind:     String,
    /// Specific contents: "grain", "oak", ...
    pub contents: String,
    pub quantity: Quantity,
    /// Turn the pile was produced; -1 when unknown.
    pub created:  Turn,
}

impl ResourcePile {
    /// A copy of this pile holding `number` of the same units.
    pub fn with_amount(&self, number: f64) -> Self {
        Self {
            quantity: Quantity::new(number, self.quantity.units.clone()),
            ..self.clone()
        }
    }

    /// A new pile split off from this one: same kind, contents, units and
    /// creation turn, but a fresh ID and its own amount.
    pub fn split_off(&self, id: FixtureId, number: f64) -> Self {
        Self { id, ..self.with_amount(number) }
    }
}

/// A piece of equipment; `count` identical items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implement {
    pub id:    FixtureId,
    pub kind:  String,
    #[serde(default = "one")]
    pub count: i32,
}

fn one() -> i32 {
    1
}
