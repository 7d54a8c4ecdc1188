//! Fixtures for tests

use crate::input::{ProducerRecord, ProvinceRecord};
use crate::province::Province;
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// Three producers with overlapping costs and a total production of 25
#[fixture]
pub fn producer_records() -> Vec<ProducerRecord> {
    vec![
        ProducerRecord {
            name: "producer1".into(),
            cost: 10.0,
            production: 9.0,
        },
        ProducerRecord {
            name: "producer2".into(),
            cost: 12.0,
            production: 10.0,
        },
        ProducerRecord {
            name: "producer3".into(),
            cost: 10.0,
            production: 6.0,
        },
    ]
}

/// A province whose demand is partly covered by local production
#[fixture]
pub fn province(producer_records: Vec<ProducerRecord>) -> Province {
    Province::new(ProvinceRecord {
        name: "province1".into(),
        demand: 30.0,
        price: 20.0,
        producers: producer_records,
    })
}
