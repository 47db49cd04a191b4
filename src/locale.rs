use anyhow::anyhow;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FIRST_MONTH_OF_YEAR: u32 = 1;
pub const LAST_MONTH_OF_YEAR: u32 = 12;

lazy_static! {
    static ref DAY_ZH: BTreeMap<u32, &'static str> = BTreeMap::from([
        (1, "一"),
        (2, "二"),
        (3, "三"),
        (4, "四"),
        (5, "五"),
        (6, "六"),
        (7, "日"),
    ]);
    static ref MONTH_ZH: BTreeMap<u32, &'static str> = BTreeMap::from([
        (1, "一月"),
        (2, "二月"),
        (3, "三月"),
        (4, "四月"),
        (5, "五月"),
        (6, "六月"),
        (7, "七月"),
        (8, "八月"),
        (9, "九月"),
        (10, "十月"),
        (11, "十一月"),
        (12, "十二月"),
    ]);
    static ref DAY_EN: BTreeMap<u32, &'static str> = BTreeMap::from([
        (1, "Mon"),
        (2, "Tue"),
        (3, "Wed"),
        (4, "Thu"),
        (5, "Fri"),
        (6, "Sat"),
        (7, "Sun"),
    ]);
    static ref MONTH_EN: BTreeMap<u32, &'static str> = BTreeMap::from([
        (1, "January"),
        (2, "February"),
        (3, "March"),
        (4, "April"),
        (5, "May"),
        (6, "June"),
        (7, "July"),
        (8, "August"),
        (9, "September"),
        (10, "October"),
        (11, "November"),
        (12, "December"),
    ]);
}

/// Which fixed name table weekday and month labels come from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// Label for a weekday index (1=Monday..7=Sunday). Unknown indices map to
    /// an empty string.
    pub fn weekday_label(&self, index: u32) -> &'static str {
        let table = match self {
            Self::Zh => &*DAY_ZH,
            Self::En => &*DAY_EN,
        };

        table.get(&index).copied().unwrap_or_default()
    }

    /// Label for a month number (1..=12). Unknown months map to an empty string.
    pub fn month_label(&self, month: u32) -> &'static str {
        let table = match self {
            Self::Zh => &*MONTH_ZH,
            Self::En => &*MONTH_EN,
        };

        table.get(&month).copied().unwrap_or_default()
    }
}

impl std::str::FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            _ => Err(anyhow!("Invalid locale; must be one of [zh, en]")),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Zh => "zh",
            Self::En => "en",
        })
    }
}

/// Weekday label from the default name table.
pub fn weekday_label(index: u32) -> &'static str {
    Locale::default().weekday_label(index)
}
