//! Raw record → feature table.

use fundscope_core::{FeatureResult, FeatureTable, RawRecord, NUMERIC_FIELDS};

/// Year company age is measured against.
pub const REFERENCE_YEAR: f64 = 2025.0;

/// Days per year used for `Age_day` (no leap-year correction).
pub const DAYS_PER_YEAR: f64 = 365.0;

pub const AGE_DAY: &str = "Age_day";
pub const FUNDING_PER_ROUND: &str = "funding_per_round";

/// Build the single-row feature table for one company.
///
/// Columns, in order: the twelve numeric record fields, `Age_day`,
/// `funding_per_round`, then one indicator column each for the record's
/// literal `category` and `country` (`category_<value>`, `country_<value>`,
/// both set to 1).
///
/// `funding_rounds` below 1 is clamped to 1 when computing
/// `funding_per_round`, so a company with zero rounds reports its total
/// funding instead of failing.
pub fn vectorize(record: &RawRecord) -> FeatureResult<FeatureTable> {
    let mut table = FeatureTable::with_capacity(NUMERIC_FIELDS.len() + 4);

    for field in NUMERIC_FIELDS {
        table.insert(field, record.number(field)?);
    }

    let founded_at = record.number("founded_at")?;
    let funding_rounds = record.number("funding_rounds")?;
    let funding_total_usd = record.number("funding_total_usd")?;

    table.insert(AGE_DAY, age_days(founded_at));
    table.insert(FUNDING_PER_ROUND, funding_per_round(funding_total_usd, funding_rounds));

    table.insert(format!("category_{}", record.label("category")?), 1.0);
    table.insert(format!("country_{}", record.label("country")?), 1.0);

    Ok(table)
}

pub fn age_days(founded_at: f64) -> f64 {
    (REFERENCE_YEAR - founded_at) * DAYS_PER_YEAR
}

pub fn funding_per_round(funding_total_usd: f64, funding_rounds: f64) -> f64 {
    funding_total_usd / funding_rounds.max(1.0)
}
