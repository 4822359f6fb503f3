//! Bodies of the beer create, update and patch requests.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::beer::{NewBeer, PatchBeer, UpdateBeer};
use crate::domain::types::{BeerName, BeerStyle, Price, Upc};
use crate::forms::{FormError, not_blank, present};

fn non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

/// Complete beer state sent with `POST` and `PUT`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerForm {
    /// Version the client last saw; ignored on create.
    pub version: Option<i32>,
    #[validate(required, length(min = 1, max = 50), custom(function = "not_blank"))]
    pub beer_name: Option<String>,
    #[validate(required)]
    pub beer_style: Option<BeerStyle>,
    #[validate(required, length(min = 1, max = 255), custom(function = "not_blank"))]
    pub upc: Option<String>,
    pub quantity_on_hand: Option<i32>,
    #[validate(required, custom(function = "non_negative"))]
    pub price: Option<Decimal>,
}

/// Validated beer state converted into domain values.
#[derive(Debug)]
pub struct BeerPayload {
    pub version: Option<i32>,
    pub name: BeerName,
    pub style: BeerStyle,
    pub upc: Upc,
    pub quantity_on_hand: Option<i32>,
    pub price: Price,
}

impl TryFrom<BeerForm> for BeerPayload {
    type Error = FormError;

    fn try_from(form: BeerForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = form.beer_name.ok_or(FormError::Missing("beerName"))?;
        let style = form.beer_style.ok_or(FormError::Missing("beerStyle"))?;
        let upc = form.upc.ok_or(FormError::Missing("upc"))?;
        let price = form.price.ok_or(FormError::Missing("price"))?;

        Ok(Self {
            version: form.version,
            name: BeerName::new(name).map_err(FormError::field("beerName"))?,
            style,
            upc: Upc::new(upc).map_err(FormError::field("upc"))?,
            quantity_on_hand: form.quantity_on_hand,
            price: Price::new(price).map_err(FormError::field("price"))?,
        })
    }
}

impl BeerPayload {
    pub fn into_new_beer(self) -> NewBeer {
        NewBeer::new(
            self.name,
            self.style,
            self.upc,
            self.quantity_on_hand,
            self.price,
        )
    }

    pub fn into_update(self) -> UpdateBeer {
        UpdateBeer {
            name: self.name,
            style: self.style,
            upc: self.upc,
            quantity_on_hand: self.quantity_on_hand,
            price: self.price,
        }
    }
}

/// Partial beer changes sent with `PATCH`; missing, null or blank fields
/// keep the stored value.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerPatchForm {
    pub version: Option<i32>,
    #[validate(length(max = 50))]
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    #[validate(length(max = 255))]
    pub upc: Option<String>,
    pub quantity_on_hand: Option<i32>,
    #[validate(custom(function = "non_negative"))]
    pub price: Option<Decimal>,
}

#[derive(Debug)]
pub struct BeerPatchPayload {
    pub version: Option<i32>,
    pub patch: PatchBeer,
}

impl TryFrom<BeerPatchForm> for BeerPatchPayload {
    type Error = FormError;

    fn try_from(form: BeerPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = present(form.beer_name)
            .map(BeerName::new)
            .transpose()
            .map_err(FormError::field("beerName"))?;
        let upc = present(form.upc)
            .map(Upc::new)
            .transpose()
            .map_err(FormError::field("upc"))?;
        let price = form
            .price
            .map(Price::new)
            .transpose()
            .map_err(FormError::field("price"))?;

        Ok(Self {
            version: form.version,
            patch: PatchBeer {
                name,
                style: form.beer_style,
                upc,
                quantity_on_hand: form.quantity_on_hand,
                price,
            },
        })
    }
}
