//! Shared test fixtures: the reference company and small hand-built models.

use fundscope_core::RawRecord;

use crate::adapter::{BinaryAdapter, MulticlassAdapter};
use crate::model::LinearModel;
use crate::scaler::StandardScaler;

pub(crate) fn reference_record() -> RawRecord {
    RawRecord::default()
        .with("founded_at", 2010)
        .with("first_funding_at", 2011)
        .with("last_funding_at", 2012)
        .with("funding_rounds", 2)
        .with("funding_total_usd", 1_000_000)
        .with("first_milestone_at", 2011)
        .with("last_milestone_at", 2013)
        .with("milestones", 2)
        .with("relationships", 5)
        .with("investment_rounds", 1)
        .with("lat", 37.7)
        .with("lng", -122.4)
        .with("category", "software")
        .with("country", "USA")
}

/// Active when a company has more than three relationships.
pub(crate) fn binary_adapter() -> BinaryAdapter {
    let mut weights = vec![0.0; 12];
    weights[7] = 1.0; // relationships
    let model = LinearModel::new(vec![0, 1], vec![weights], vec![-3.0], vec![]).unwrap();
    BinaryAdapter::new(StandardScaler::identity(12), model)
}

/// software → IPO, web → Acquired, GBR → Closed, otherwise Operating.
pub(crate) fn multiclass_model() -> LinearModel {
    let names = [
        "Age_day",
        "funding_rounds",
        "category_software",
        "category_web",
        "country_USA",
        "country_GBR",
    ];
    LinearModel::new(
        vec![0, 1, 2, 3],
        vec![
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 2.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        ],
        vec![0.0, 0.5, 0.0, 0.0],
        names.iter().map(|n| n.to_string()).collect(),
    )
    .unwrap()
}

pub(crate) fn multiclass_adapter() -> MulticlassAdapter {
    MulticlassAdapter::new(multiclass_model())
}
