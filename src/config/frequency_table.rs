use crate::cli::AccountingPeriod;
use crate::error::Error;
use crate::prelude::*;

/// One refresh cadence and how many runs it produces per accounting period.
///
/// The multiplier is opaque to the engine: whether "weekly" means 4 or 52
/// is decided here, by the period's table, and nowhere else.
#[derive(Debug, PartialEq, Serialize)]
pub struct FrequencyDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub runs_per_period: u32,
}

pub static MONTH_BASE: &[FrequencyDefinition] = &[
    FrequencyDefinition {
        key: "daily",
        label: "Daily",
        runs_per_period: 30,
    },
    FrequencyDefinition {
        key: "weekly",
        label: "Weekly",
        runs_per_period: 4,
    },
    FrequencyDefinition {
        key: "monthly",
        label: "Monthly",
        runs_per_period: 1,
    },
];

pub static YEAR_BASE: &[FrequencyDefinition] = &[
    FrequencyDefinition {
        key: "daily",
        label: "Daily",
        runs_per_period: 365,
    },
    FrequencyDefinition {
        key: "weekly",
        label: "Weekly",
        runs_per_period: 52,
    },
    FrequencyDefinition {
        key: "monthly",
        label: "Monthly",
        runs_per_period: 12,
    },
];

/// Resolves a cadence key against the table for the given period.
pub fn lookup(
    period: AccountingPeriod,
    key: &str,
) -> Result<&'static FrequencyDefinition, Error> {
    let table = match period {
        AccountingPeriod::Month => MONTH_BASE,
        AccountingPeriod::Year => YEAR_BASE,
    };

    table
        .iter()
        .find(|frequency| frequency.key == key)
        .ok_or_else(|| Error::UnknownFrequency(key.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_base_multipliers() {
        assert_eq!(
            lookup(AccountingPeriod::Month, "daily").unwrap().runs_per_period,
            30
        );
        assert_eq!(
            lookup(AccountingPeriod::Month, "weekly").unwrap().runs_per_period,
            4
        );
        assert_eq!(
            lookup(AccountingPeriod::Month, "monthly").unwrap().runs_per_period,
            1
        );
    }

    #[test]
    fn year_base_multipliers() {
        assert_eq!(
            lookup(AccountingPeriod::Year, "daily").unwrap().runs_per_period,
            365
        );
        assert_eq!(
            lookup(AccountingPeriod::Year, "weekly").unwrap().runs_per_period,
            52
        );
        assert_eq!(
            lookup(AccountingPeriod::Year, "monthly").unwrap().runs_per_period,
            12
        );
    }

    #[test]
    fn lookup_rejects_unknown_key() {
        let error = lookup(AccountingPeriod::Month, "hourly").unwrap_err();

        assert!(matches!(error, Error::UnknownFrequency(key) if key == "hourly"));
    }

    #[test]
    fn multipliers_are_positive() {
        for frequency in MONTH_BASE.iter().chain(YEAR_BASE) {
            assert!(frequency.runs_per_period > 0, "{}", frequency.key);
        }
    }
}
