use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BeerId, BeerName, BeerStyle, Price, Upc};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Beer {
    pub id: BeerId,
    pub version: i32,
    pub name: BeerName,
    pub style: BeerStyle,
    pub upc: Upc,
    pub quantity_on_hand: Option<i32>,
    pub price: Price,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBeer {
    pub name: BeerName,
    pub style: BeerStyle,
    pub upc: Upc,
    pub quantity_on_hand: Option<i32>,
    pub price: Price,
}

impl NewBeer {
    #[must_use]
    pub fn new(
        name: BeerName,
        style: BeerStyle,
        upc: Upc,
        quantity_on_hand: Option<i32>,
        price: Price,
    ) -> Self {
        Self {
            name,
            style,
            upc,
            quantity_on_hand,
            price,
        }
    }
}

/// Complete replacement state for the mutable fields of a [`Beer`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateBeer {
    pub name: BeerName,
    pub style: BeerStyle,
    pub upc: Upc,
    pub quantity_on_hand: Option<i32>,
    pub price: Price,
}

/// Partial changes for a [`Beer`]; `None` keeps the stored value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PatchBeer {
    pub name: Option<BeerName>,
    pub style: Option<BeerStyle>,
    pub upc: Option<Upc>,
    pub quantity_on_hand: Option<i32>,
    pub price: Option<Price>,
}

impl PatchBeer {
    /// Merges the patch over the current state of `beer`.
    #[must_use]
    pub fn apply_to(&self, beer: &Beer) -> UpdateBeer {
        UpdateBeer {
            name: self.name.clone().unwrap_or_else(|| beer.name.clone()),
            style: self.style.unwrap_or(beer.style),
            upc: self.upc.clone().unwrap_or_else(|| beer.upc.clone()),
            quantity_on_hand: self.quantity_on_hand.or(beer.quantity_on_hand),
            price: self.price.unwrap_or(beer.price),
        }
    }
}

impl Beer {
    /// Hides the stock level without touching persisted data.
    pub fn redact_inventory(&mut self) {
        self.quantity_on_hand = None;
    }
}
