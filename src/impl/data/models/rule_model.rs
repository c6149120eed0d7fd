use chrono::NaiveDate;
use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    entities::{Account, Meta, SharingRule},
    errors::{InvalidQuantizeStep, InvalidRuleFraction, InvalidValidityRange},
};

use super::{decimal_model::DecimalModel, iso_date_model::ISODateModel};

/// RON deserialization model for one sharing rule.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct SharingRuleModel {
    tag: String,
    no_tag: String,
    open_date: ISODateModel,
    #[serde(default)]
    reroot: Option<String>,
    counterparty: String,
    fraction: DecimalModel,
    #[serde(default)]
    meta: Meta,
    quantize: DecimalModel,
    start_date: ISODateModel,
    end_date: ISODateModel,
}

impl SharingRuleModel {
    /// Converts into the domain rule, validating the configuration. Called
    /// while the rule list is loaded, so a bad rule fails the whole run
    /// before any entry is processed.
    pub(crate) fn try_into_rule(self) -> Result<SharingRule, ServerError> {
        let fraction: Decimal = self.fraction.into();
        let quantize: Decimal = self.quantize.into();
        let start_date: NaiveDate = self.start_date.into();
        let end_date: NaiveDate = self.end_date.into();

        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(InvalidRuleFraction::new(&self.tag, &fraction));
        }
        if quantize <= Decimal::ZERO {
            return Err(InvalidQuantizeStep::new(&self.tag, &quantize));
        }
        if start_date >= end_date {
            return Err(InvalidValidityRange::new(&self.tag, &start_date, &end_date));
        }

        Ok(SharingRule {
            tag: self.tag,
            no_tag: self.no_tag,
            open_date: self.open_date.into(),
            reroot: self.reroot,
            counterparty: Account::new(self.counterparty),
            fraction,
            meta: self.meta,
            quantize,
            start_date,
            end_date,
        })
    }
}
