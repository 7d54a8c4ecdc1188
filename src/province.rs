//! Provinces are the demand/supply accounting units of the market model.
//! A province owns an ordered collection of producers and derives its
//! shortfall and profit under merit-order dispatch.
use crate::id::define_id_type;
use crate::input::{ProducerRecord, ProvinceRecord, RawValue};
use crate::producer::Producer;
use crate::units::{Money, MoneyPerQuantity, Quantity};
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, warn};

define_id_type! {ProvinceID}

/// A demand/supply accounting unit aggregating producers, demand and price.
///
/// The running production total is maintained by every mutation path
/// rather than recomputed on read, so it always equals the sum of the
/// producers' current production quantities.
#[derive(Clone, Debug, PartialEq)]
pub struct Province {
    name: ProvinceID,
    producers: Vec<Producer>,
    total_production: Quantity,
    demand: Quantity,
    price: MoneyPerQuantity,
}

impl Province {
    /// Create a province from a raw record, registering each of its
    /// producers in order.
    pub fn new(record: ProvinceRecord) -> Self {
        let mut province = Self {
            name: record.name,
            producers: Vec::new(),
            total_production: Quantity(0.0),
            demand: Quantity(record.demand),
            price: MoneyPerQuantity(record.price),
        };
        for producer in &record.producers {
            province.add_producer(producer);
        }

        province
    }

    /// The province's unique name
    pub fn name(&self) -> &ProvinceID {
        &self.name
    }

    /// The province's producers, in registration order
    pub fn producers(&self) -> &[Producer] {
        &self.producers
    }

    /// Running sum of the producers' production quantities
    pub fn total_production(&self) -> Quantity {
        self.total_production
    }

    /// Quantity of local demand
    pub fn demand(&self) -> Quantity {
        self.demand
    }

    /// Market price per unit of satisfied demand
    pub fn price(&self) -> MoneyPerQuantity {
        self.price
    }

    /// Register a producer, folding its production into the running total.
    ///
    /// This is the single registration path: construction uses it once per
    /// record and later additions go through it unchanged.
    pub fn add_producer(&mut self, record: &ProducerRecord) {
        let producer = Producer::new(record);
        debug!(
            "Registering producer {} in province {}",
            producer.name(),
            self.name
        );
        self.total_production += producer.production();
        self.producers.push(producer);
    }

    /// Set the demand quantity, coercing the raw value to a whole number.
    ///
    /// The coercion is unguarded: non-numeric input stores NaN, which
    /// poisons every derived property.
    pub fn set_demand(&mut self, raw: impl Into<RawValue>) {
        self.demand = Quantity(self.coerce_unguarded(raw.into(), "demand"));
    }

    /// Set the market price, coercing the raw value to a whole number.
    ///
    /// The coercion is unguarded: non-numeric input stores NaN, which
    /// poisons every derived property.
    pub fn set_price(&mut self, raw: impl Into<RawValue>) {
        self.price = MoneyPerQuantity(self.coerce_unguarded(raw.into(), "price"));
    }

    /// Set the unit cost of the producer at `index`.
    ///
    /// Like [`Province::set_demand`], the coercion is unguarded.
    pub fn set_producer_cost(&mut self, index: usize, raw: impl Into<RawValue>) -> Result<()> {
        self.producer_mut(index)?.set_cost(raw.into());
        Ok(())
    }

    /// Set the production quantity of the producer at `index`, applying
    /// the signed change to the running production total.
    ///
    /// Non-numeric input is treated as zero production. The running total
    /// is updated from the change alone; the producer list is never
    /// rescanned.
    pub fn set_producer_production(
        &mut self,
        index: usize,
        raw: impl Into<RawValue>,
    ) -> Result<()> {
        let delta = self.producer_mut(index)?.set_production(raw.into());
        self.total_production += delta;
        Ok(())
    }

    /// Production shortfall relative to demand; negative means surplus.
    pub fn shortfall(&self) -> Quantity {
        self.demand - self.total_production
    }

    /// The portion of demand actually covered by local production
    pub fn satisfied_demand(&self) -> Quantity {
        self.demand.min(self.total_production)
    }

    /// Revenue on satisfied demand at the market price
    pub fn demand_value(&self) -> Money {
        self.satisfied_demand() * self.price
    }

    /// Total procurement cost of covering demand with the cheapest
    /// producers first (merit-order dispatch).
    ///
    /// Producers are walked in ascending cost order, each contributing the
    /// smaller of its production and the demand still uncovered, so
    /// producers beyond the point where demand is exhausted contribute
    /// nothing. The sort operates on a copy: reading this property never
    /// changes the stored producer ordering. Equal-cost producers dispatch
    /// in registration order and NaN costs order last.
    pub fn demand_cost(&self) -> Money {
        let mut remaining_demand = self.demand;
        let mut result = Money(0.0);
        for producer in self
            .producers
            .iter()
            .sorted_by(|a, b| a.cost().value().total_cmp(&b.cost().value()))
        {
            let contribution = remaining_demand.min(producer.production());
            remaining_demand -= contribution;
            result += contribution * producer.cost();
        }

        result
    }

    /// Profit accruing to the province: revenue on satisfied demand minus
    /// the merit-order cost of covering it
    pub fn profit(&self) -> Money {
        self.demand_value() - self.demand_cost()
    }

    /// Coerce a raw field value without a NaN guard, logging when a
    /// poisoning value is about to be stored.
    fn coerce_unguarded(&self, raw: RawValue, field: &str) -> f64 {
        let value = raw.coerce_integer();
        if value.is_nan() {
            warn!("Non-numeric {field} for province {}; storing NaN", self.name);
        }

        value
    }

    fn producer_mut(&mut self, index: usize) -> Result<&mut Producer> {
        self.producers
            .get_mut(index)
            .with_context(|| format!("No producer at index {index}"))
    }
}
