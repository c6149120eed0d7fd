use std::str::FromStr;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::InvalidDecimal;

#[derive(Debug)]
pub(crate) struct DecimalModel(Decimal);
impl FromStr for DecimalModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(',', "");
        let number = Decimal::from_str(raw.trim()).map_err(|_| InvalidDecimal::new(s))?;
        Ok(DecimalModel(number))
    }
}
impl<'de> Deserialize<'de> for DecimalModel {
    fn deserialize<D>(deserializer: D) -> Result<DecimalModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DecimalModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}
impl Into<Decimal> for DecimalModel {
    fn into(self) -> Decimal {
        self.0
    }
}
