//! DTOs exposed by the beer endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::beer::Beer;
use crate::domain::types::{BeerId, BeerStyle, Price};

/// Beer as returned to API clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: BeerId,
    pub version: i32,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    pub price: Price,
    pub created_date: NaiveDateTime,
    pub update_date: NaiveDateTime,
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            version: beer.version,
            beer_name: beer.name.into_inner(),
            beer_style: beer.style,
            upc: beer.upc.into_inner(),
            quantity_on_hand: beer.quantity_on_hand,
            price: beer.price,
            created_date: beer.created_at,
            update_date: beer.updated_at,
        }
    }
}

/// Query parameters accepted by `GET /api/v1/beer`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerListQuery {
    /// Case-insensitive name fragment; blank counts as absent.
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    /// `Some(false)` hides the stock level of every returned beer.
    pub show_inventory: Option<bool>,
    /// One-based page number.
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;
    use crate::domain::types::{BeerName, Upc};

    #[test]
    fn beer_dto_uses_camel_case_and_string_price() {
        let now = Utc::now().naive_utc();
        let beer = Beer {
            id: BeerId::new(),
            version: 1,
            name: BeerName::new("Galaxy Cat").unwrap(),
            style: BeerStyle::PaleAle,
            upc: Upc::new("12356").unwrap(),
            quantity_on_hand: None,
            price: Price::new(Decimal::new(1299, 2)).unwrap(),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(BeerDto::from(beer)).unwrap();

        assert_eq!(value["beerName"], json!("Galaxy Cat"));
        assert_eq!(value["beerStyle"], json!("PALE_ALE"));
        assert_eq!(value["price"], json!("12.99"));
        assert_eq!(value["quantityOnHand"], json!(null));
        assert!(value.get("createdDate").is_some());
        assert!(value.get("updateDate").is_some());
    }

    #[test]
    fn list_query_reads_camel_case_keys() {
        let query: BeerListQuery = serde_json::from_value(json!({
            "beerName": "cat",
            "beerStyle": "IPA",
            "showInventory": false,
            "pageNumber": 2,
            "pageSize": 10
        }))
        .unwrap();

        assert_eq!(query.beer_name.as_deref(), Some("cat"));
        assert_eq!(query.beer_style, Some(BeerStyle::Ipa));
        assert_eq!(query.show_inventory, Some(false));
        assert_eq!(query.page_number, Some(2));
        assert_eq!(query.page_size, Some(10));
    }
}
