//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., bounded non-blank names,
//! non-negative prices, well-formed identifiers) so that once a value reaches
//! the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::{ops::Deref, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeded the allowed number of characters.
    #[error("value must be at most {0} characters long")]
    TooLong(usize),
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
    /// Provided style name is not one of the known beer styles.
    #[error("unknown beer style: {0}")]
    UnknownBeerStyle(String),
    /// Provided price was below zero.
    #[error("price cannot be negative")]
    NegativePrice,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate newtypes for UUID-backed entity identifiers.
macro_rules! uuid_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the raw `Uuid` backing this identifier.
            pub const fn get(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|_| TypeConstraintError::InvalidUuid)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

uuid_newtype!(BeerId, "Unique identifier for a beer.");
uuid_newtype!(CustomerId, "Unique identifier for a customer.");
uuid_newtype!(CategoryId, "Unique identifier for a beer category.");

/// Trims the value and checks it is non-empty and at most `max` characters.
fn bounded_text(value: String, max: usize) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() > max {
        return Err(TypeConstraintError::TooLong(max));
    }
    Ok(trimmed.to_string())
}

macro_rules! bounded_string_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Maximum number of characters accepted.
            pub const MAX_LEN: usize = $max;

            /// Constructs a trimmed, non-empty value within the length bound.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                bounded_text(value.into(), Self::MAX_LEN).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_string_newtype!(BeerName, 50, "Display name of a beer.");
bounded_string_newtype!(Upc, 255, "Universal product code of a beer.");
bounded_string_newtype!(CustomerName, 255, "Display name of a customer.");
bounded_string_newtype!(CategoryName, 50, "Name of a beer category.");

/// Style a beer belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl BeerStyle {
    pub const ALL: [BeerStyle; 10] = [
        BeerStyle::Lager,
        BeerStyle::Pilsner,
        BeerStyle::Stout,
        BeerStyle::Gose,
        BeerStyle::Porter,
        BeerStyle::Ale,
        BeerStyle::Wheat,
        BeerStyle::Ipa,
        BeerStyle::PaleAle,
        BeerStyle::Saison,
    ];

    /// Stored and wire representation of the style.
    pub const fn as_str(self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Pilsner => "PILSNER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Gose => "GOSE",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Ale => "ALE",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Ipa => "IPA",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Saison => "SAISON",
        }
    }
}

impl Display for BeerStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeerStyle {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BeerStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TypeConstraintError::UnknownBeerStyle(wanted.to_string()))
    }
}

/// Non-negative monetary amount.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Wraps the amount, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, TypeConstraintError> {
        if value < Decimal::ZERO {
            return Err(TypeConstraintError::NegativePrice);
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| TypeConstraintError::InvalidValue(format!("price: {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = TypeConstraintError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_names_trim_and_reject_blank() {
        assert_eq!(BeerName::new("  Mango Bobs ").unwrap().as_str(), "Mango Bobs");
        assert_eq!(BeerName::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn beer_name_rejects_more_than_fifty_chars() {
        let long = "x".repeat(51);
        assert_eq!(BeerName::new(long), Err(TypeConstraintError::TooLong(50)));
        assert!(BeerName::new("x".repeat(50)).is_ok());
    }

    #[test]
    fn beer_style_parses_wire_names() {
        assert_eq!("PALE_ALE".parse::<BeerStyle>(), Ok(BeerStyle::PaleAle));
        assert_eq!("ipa".parse::<BeerStyle>(), Ok(BeerStyle::Ipa));
        assert!(matches!(
            "PILS".parse::<BeerStyle>(),
            Err(TypeConstraintError::UnknownBeerStyle(_))
        ));
        for style in BeerStyle::ALL {
            assert_eq!(style.as_str().parse::<BeerStyle>(), Ok(style));
        }
    }

    #[test]
    fn price_rejects_negative_amounts() {
        assert!(Price::new(Decimal::new(1299, 2)).is_ok());
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert_eq!(
            Price::new(Decimal::new(-1, 0)),
            Err(TypeConstraintError::NegativePrice)
        );
        assert_eq!("12.99".parse::<Price>().unwrap().get(), Decimal::new(1299, 2));
    }

    #[test]
    fn ids_parse_from_strings() {
        let id = BeerId::new();
        assert_eq!(id.to_string().parse::<BeerId>(), Ok(id));
        assert_eq!(
            "not-a-uuid".parse::<CustomerId>(),
            Err(TypeConstraintError::InvalidUuid)
        );
    }
}
