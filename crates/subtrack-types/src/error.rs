//! Validation errors

use chrono::NaiveDate;
use thiserror::Error;

/// Reason a subscription payload or aggregation query was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Service name is empty
    #[error("service name is empty")]
    EmptyServiceName,

    /// Price is zero or negative
    #[error("price must be greater than 0")]
    NonPositivePrice,

    /// Price does not fit the stored integer column
    #[error("price is too large")]
    PriceTooLarge,

    /// Start date is missing or empty
    #[error("start date is empty")]
    EmptyStartDate,

    /// End date is present but empty
    #[error("end date is empty")]
    EmptyEndDate,

    /// End date precedes start date
    #[error("end date {end} must not be before start date {start}")]
    EndBeforeStart {
        /// Start of the interval
        start: NaiveDate,
        /// End of the interval
        end: NaiveDate,
    },

    /// A required parameter was not supplied
    #[error("missing parameter: {0}")]
    MissingField(&'static str),

    /// A parameter could not be parsed
    #[error("invalid {field}: {value}")]
    MalformedField {
        /// Parameter name
        field: &'static str,
        /// Raw value as received
        value: String,
    },
}
