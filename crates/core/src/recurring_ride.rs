//! Recurring-ride vocabulary: schedule types, ride status, weekday labels,
//! list limits and the `HH:MM` start-time wire format.
//!
//! `schedule_type` is descriptive metadata. Nothing here expands it into
//! calendar occurrences or checks it against `day_of_week`; a ride tagged
//! `weekends` on a Tuesday is accepted as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Day of week
   -------------------------------------------------------------------------- */

/// Lowest valid `day_of_week` (Monday).
pub const MIN_DAY_OF_WEEK: i16 = 0;

/// Highest valid `day_of_week` (Sunday).
pub const MAX_DAY_OF_WEEK: i16 = 6;

/// Weekday labels indexed by `day_of_week` (0 = Monday).
pub const DAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Validate that `day` lies in `0..=6`.
pub fn validate_day_of_week(day: i16) -> Result<(), CoreError> {
    if (MIN_DAY_OF_WEEK..=MAX_DAY_OF_WEEK).contains(&day) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "day_of_week must be between {MIN_DAY_OF_WEEK} (Monday) and \
             {MAX_DAY_OF_WEEK} (Sunday), got {day}"
        )))
    }
}

/// Label for a day index, or `None` when out of range.
pub fn day_label(day: i16) -> Option<&'static str> {
    usize::try_from(day).ok().and_then(|i| DAY_LABELS.get(i).copied())
}

/* --------------------------------------------------------------------------
   Closed vocabularies
   -------------------------------------------------------------------------- */

/// Error returned when a stored or submitted string is outside a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// How often a recurring ride is advertised to repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    #[default]
    Weekly,
    Daily,
    Weekdays,
    Weekends,
}

impl ScheduleType {
    /// Every schedule type, in presentation order.
    pub const ALL: [ScheduleType; 4] = [
        ScheduleType::Weekly,
        ScheduleType::Daily,
        ScheduleType::Weekdays,
        ScheduleType::Weekends,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleType::Weekly => "weekly",
            ScheduleType::Daily => "daily",
            ScheduleType::Weekdays => "weekdays",
            ScheduleType::Weekends => "weekends",
        }
    }

    /// Human-readable label shown in pickers.
    pub fn label(self) -> &'static str {
        match self {
            ScheduleType::Weekly => "Every week",
            ScheduleType::Daily => "Every day",
            ScheduleType::Weekdays => "Every weekday",
            ScheduleType::Weekends => "Every weekend",
        }
    }
}

impl FromStr for ScheduleType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "schedule type",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for ScheduleType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a recurring ride.
///
/// Any status may be set by the owner at any time; there is no transition
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    #[default]
    Active,
    Paused,
    Cancelled,
}

impl RideStatus {
    pub const ALL: [RideStatus; 3] = [
        RideStatus::Active,
        RideStatus::Paused,
        RideStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RideStatus::Active => "active",
            RideStatus::Paused => "paused",
            RideStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for RideStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "ride status",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for RideStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --------------------------------------------------------------------------
   Option enumerations
   -------------------------------------------------------------------------- */

/// One entry of the day-of-week picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOfWeekOption {
    pub value: i16,
    pub label: &'static str,
}

/// One entry of the schedule-type picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleTypeOption {
    pub value: ScheduleType,
    pub label: &'static str,
}

/// Monday..Sunday with their indices. Independent of stored data.
pub fn day_of_week_options() -> Vec<DayOfWeekOption> {
    (MIN_DAY_OF_WEEK..=MAX_DAY_OF_WEEK)
        .zip(DAY_LABELS)
        .map(|(value, label)| DayOfWeekOption { value, label })
        .collect()
}

/// All schedule types with their labels, in presentation order.
pub fn schedule_type_options() -> Vec<ScheduleTypeOption> {
    ScheduleType::ALL
        .into_iter()
        .map(|value| ScheduleTypeOption {
            value,
            label: value.label(),
        })
        .collect()
}

/* --------------------------------------------------------------------------
   Listing limits
   -------------------------------------------------------------------------- */

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Upper bound for `limit` on the public listing.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Resolve a requested `limit` into `1..=MAX_LIST_LIMIT`. Out-of-range
/// values are clamped, never rejected.
pub fn clamp_list_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

/* --------------------------------------------------------------------------
   Start time wire format
   -------------------------------------------------------------------------- */

/// Serde adapter for `start_time`: written as `HH:MM`, read from `HH:MM` or
/// `HH:MM:SS` (seconds are dropped).
pub mod start_time_format {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    /// Parse a wall-clock time of day, truncated to the minute.
    pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        let time = NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))?;
        Ok(time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(time))
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| {
            serde::de::Error::custom(format!("invalid start_time '{raw}', expected HH:MM ({e})"))
        })
    }

    /// Same format for `Option<NaiveTime>` fields of partial updates.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| {
                    super::parse(&raw).map_err(|e| {
                        serde::de::Error::custom(format!(
                            "invalid start_time '{raw}', expected HH:MM ({e})"
                        ))
                    })
                })
                .transpose()
        }
    }
}
