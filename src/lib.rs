//! A library for valuing provincial supply and demand under merit-order dispatch.
#![warn(missing_docs)]
mod id;
pub mod input;
pub mod producer;
pub mod province;
pub mod units;

#[cfg(test)]
mod fixture;
