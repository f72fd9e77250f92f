//! Conversion: CoinMarketsEntry → Coin (TryFrom + validation).

use super::wire;
use super::{Coin, ValidationError};

impl TryFrom<wire::CoinMarketsEntry> for Coin {
    type Error = ValidationError;

    fn try_from(source: wire::CoinMarketsEntry) -> Result<Self, Self::Error> {
        if source.id.is_empty() {
            return Err(ValidationError::MissingId);
        }

        let name = match source.name {
            Some(n) if !n.is_empty() => n,
            _ => return Err(ValidationError::MissingName),
        };

        Ok(Coin {
            id: source.id.into(),
            symbol: source.symbol.unwrap_or_default().to_uppercase(),
            name,
            image: source.image.unwrap_or_default(),
        })
    }
}
