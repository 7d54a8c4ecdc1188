//! Producers are the supply sources operating within a province. Each one
//! pairs a unit cost with a production quantity.
use crate::id::define_id_type;
use crate::input::{ProducerRecord, RawValue};
use crate::units::{MoneyPerQuantity, Quantity};
use log::warn;

define_id_type! {ProducerID}

/// A supply source with a unit cost and a production quantity.
///
/// Producers are owned exclusively by their province. Mutation goes
/// through the province, which keeps its running production total in step
/// with the producers it holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Producer {
    name: ProducerID,
    cost: MoneyPerQuantity,
    production: Quantity,
}

impl Producer {
    /// Create a producer from a raw record.
    pub(crate) fn new(record: &ProducerRecord) -> Self {
        Self {
            name: record.name.clone(),
            cost: MoneyPerQuantity(record.cost),
            production: Quantity(record.production),
        }
    }

    /// The producer's unique name
    pub fn name(&self) -> &ProducerID {
        &self.name
    }

    /// Cost of producing one unit
    pub fn cost(&self) -> MoneyPerQuantity {
        self.cost
    }

    /// Quantity currently produced
    pub fn production(&self) -> Quantity {
        self.production
    }

    /// Set the unit cost, coercing the raw value to a whole number.
    ///
    /// The coercion is unguarded: non-numeric input stores NaN, which
    /// poisons every derived property that reads this producer's cost.
    pub(crate) fn set_cost(&mut self, raw: RawValue) {
        let cost = raw.coerce_integer();
        if cost.is_nan() {
            warn!("Non-numeric cost for producer {}; storing NaN", self.name);
        }
        self.cost = MoneyPerQuantity(cost);
    }

    /// Set the production quantity, coercing the raw value to a whole
    /// number and treating non-numeric input as zero.
    ///
    /// Returns the signed change in production for the owning province to
    /// fold into its running total.
    pub(crate) fn set_production(&mut self, raw: RawValue) -> Quantity {
        let production = Quantity(raw.coerce_integer_or_zero());
        let delta = production - self.production;
        self.production = production;
        delta
    }
}
