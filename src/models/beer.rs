use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::beer::{
    Beer as DomainBeer, NewBeer as DomainNewBeer, UpdateBeer as DomainUpdateBeer,
};
use crate::domain::types::{BeerId, BeerName, BeerStyle, Price, TypeConstraintError, Upc};

/// Case-folded form of a beer name, stored next to it for matching and
/// ordering. Search fragments are folded the same way.
pub fn search_key(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::beers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::beer::Beer`].
pub struct Beer {
    pub id: String,
    pub version: i32,
    pub beer_name: String,
    pub beer_name_search: String,
    pub beer_style: String,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    pub price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::beers)]
/// Insertable form of [`Beer`].
pub struct NewBeer<'a> {
    pub id: String,
    pub version: i32,
    pub beer_name: &'a str,
    pub beer_name_search: String,
    pub beer_style: &'static str,
    pub upc: &'a str,
    pub quantity_on_hand: Option<i32>,
    pub price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::beers)]
#[diesel(treat_none_as_null = true)]
/// Full overwrite of the mutable columns. The version is bumped in SQL by the
/// repository.
pub struct UpdateBeer<'a> {
    pub beer_name: &'a str,
    pub beer_name_search: String,
    pub beer_style: &'static str,
    pub upc: &'a str,
    pub quantity_on_hand: Option<i32>,
    pub price: String,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewBeer<'a> {
    /// Row for a freshly created beer with server assigned id and timestamps.
    pub fn new(id: BeerId, beer: &'a DomainNewBeer, now: NaiveDateTime) -> Self {
        Self {
            id: id.to_string(),
            version: 0,
            beer_name: beer.name.as_str(),
            beer_name_search: search_key(beer.name.as_str()),
            beer_style: beer.style.as_str(),
            upc: beer.upc.as_str(),
            quantity_on_hand: beer.quantity_on_hand,
            price: beer.price.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateBeer<'a> {
    pub fn new(beer: &'a DomainUpdateBeer, now: NaiveDateTime) -> Self {
        Self {
            beer_name: beer.name.as_str(),
            beer_name_search: search_key(beer.name.as_str()),
            beer_style: beer.style.as_str(),
            upc: beer.upc.as_str(),
            quantity_on_hand: beer.quantity_on_hand,
            price: beer.price.to_string(),
            updated_at: now,
        }
    }
}

impl TryFrom<Beer> for DomainBeer {
    type Error = TypeConstraintError;

    fn try_from(beer: Beer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: beer.id.parse::<BeerId>()?,
            version: beer.version,
            name: BeerName::new(beer.beer_name)?,
            style: beer.beer_style.parse::<BeerStyle>()?,
            upc: Upc::new(beer.upc)?,
            quantity_on_hand: beer.quantity_on_hand,
            price: beer.price.parse::<Price>()?,
            created_at: beer.created_at,
            updated_at: beer.updated_at,
        })
    }
}
