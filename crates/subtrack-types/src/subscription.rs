//! Subscription types

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{SubscriptionId, UserId, ValidationError};

/// Wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date in the fixed `YYYY-MM-DD` form.
///
/// Years are exactly four digits and at least 1.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let malformed = || ValidationError::MalformedField {
        field,
        value: raw.to_string(),
    };

    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(malformed());
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
        .ok_or_else(malformed)
}

/// A stored subscription to a third-party service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID, assigned by the store
    pub id: SubscriptionId,
    /// User who owns the subscription
    pub user_id: UserId,
    /// Name of the subscribed service
    pub service_name: String,
    /// Price in the smallest currency unit
    pub price: i32,
    /// First active day
    pub start_date: NaiveDate,
    /// Last active day, `None` while the subscription is open-ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Subscription {
    /// Whether the subscription has no end date
    pub fn is_open_ended(&self) -> bool {
        self.end_date.is_none()
    }
}

/// A validated subscription that has not been assigned an identity yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub user_id: UserId,
    pub service_name: String,
    pub price: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl NewSubscription {
    /// Attach an identity
    pub fn with_id(self, id: SubscriptionId) -> Subscription {
        Subscription {
            id,
            user_id: self.user_id,
            service_name: self.service_name,
            price: self.price,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// A calendar date as supplied by a caller.
///
/// An empty string is kept as [`DateInput::Empty`] so validation can tell a
/// present-but-empty date apart from an absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DateInput {
    /// Field was present with an empty value
    Empty,
    /// A calendar date
    Date(NaiveDate),
}

impl DateInput {
    /// The date, if one was given
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Empty => None,
            Self::Date(date) => Some(date),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl TryFrom<String> for DateInput {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for DateInput {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::Empty);
        }
        parse_date("date", s).map(Self::Date)
    }
}

/// Caller-supplied subscription payload, before validation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubscriptionDraft {
    pub user_id: UserId,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub price: i64,
    /// `None` when the field is missing or `null`
    #[serde(default)]
    pub start_date: Option<DateInput>,
    /// `None` when the field is missing or `null`, meaning open-ended
    #[serde(default)]
    pub end_date: Option<DateInput>,
}
