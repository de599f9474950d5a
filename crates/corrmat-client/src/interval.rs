use anyhow::anyhow;
use std::fmt;
use std::str::FromStr;

/// Sampling granularity of a price series, matching the tokens the chart
/// endpoint accepts in its `interval` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    OneMinute,
    TwoMinute,
    FiveMinute,
    FifteenMinute,
    ThirtyMinute,
    SixtyMinute,
    NinetyMinute,
    OneHour,
    OneDay,
    FiveDay,
    OneWeek,
    OneMonth,
    ThreeMonth,
}

/// How an interval's history is fetched: calendar-scale granularities are
/// downloaded in bulk (`range=max`) and date-filtered afterwards; sub-daily
/// granularities are fetched for an explicit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Calendar,
    SubDaily,
}

// Granularities of one day or coarser; adding a new one is a one-line edit.
const CALENDAR_SCALE: [Interval; 5] = [
    Interval::OneDay,
    Interval::FiveDay,
    Interval::OneWeek,
    Interval::OneMonth,
    Interval::ThreeMonth,
];

impl Interval {
    pub const ALL: [Interval; 13] = [
        Interval::OneMinute,
        Interval::TwoMinute,
        Interval::FiveMinute,
        Interval::FifteenMinute,
        Interval::ThirtyMinute,
        Interval::SixtyMinute,
        Interval::NinetyMinute,
        Interval::OneHour,
        Interval::OneDay,
        Interval::FiveDay,
        Interval::OneWeek,
        Interval::OneMonth,
        Interval::ThreeMonth,
    ];

    /// Wire token, e.g. `1m`, `1d`, `3mo`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::TwoMinute => "2m",
            Interval::FiveMinute => "5m",
            Interval::FifteenMinute => "15m",
            Interval::ThirtyMinute => "30m",
            Interval::SixtyMinute => "60m",
            Interval::NinetyMinute => "90m",
            Interval::OneHour => "1h",
            Interval::OneDay => "1d",
            Interval::FiveDay => "5d",
            Interval::OneWeek => "1wk",
            Interval::OneMonth => "1mo",
            Interval::ThreeMonth => "3mo",
        }
    }

    pub fn granularity(&self) -> Granularity {
        if CALENDAR_SCALE.contains(self) {
            Granularity::Calendar
        } else {
            Granularity::SubDaily
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::OneDay
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Interval::ALL
            .into_iter()
            .find(|interval| interval.as_str() == token)
            .ok_or_else(|| anyhow!("unrecognised interval: {s}"))
    }
}
