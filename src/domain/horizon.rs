// ==========================================
// 服事表自动排班系统 - 排班区间（季度）
// ==========================================
// 一次排班针对一个季度；季度内所有指定星期几即为服事日期
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quarter {
    pub year: i32,
    pub quarter: u32, // 1..=4
}

impl Quarter {
    /// 构造季度，quarter 必须在 1..=4
    pub fn new(year: i32, quarter: u32) -> Option<Self> {
        if (1..=4).contains(&quarter) {
            Some(Self { year, quarter })
        } else {
            None
        }
    }

    /// 日期所在季度
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: (date.month() - 1) / 3 + 1,
        }
    }

    /// 解析 "YYYY-QN" 格式
    pub fn parse(key: &str) -> Option<Self> {
        let (year, q) = key.trim().split_once("-Q")?;
        Self::new(year.parse().ok()?, q.parse().ok()?)
    }

    /// 季度键，如 "2025-Q1"（排班记录以此分区）
    pub fn key(&self) -> String {
        format!("{}-Q{}", self.year, self.quarter)
    }

    pub fn previous(&self) -> Self {
        if self.quarter == 1 {
            Self { year: self.year - 1, quarter: 4 }
        } else {
            Self { year: self.year, quarter: self.quarter - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.quarter == 4 {
            Self { year: self.year + 1, quarter: 1 }
        } else {
            Self { year: self.year, quarter: self.quarter + 1 }
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, (self.quarter - 1) * 3 + 1, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.next().first_day()?.pred_opt()
    }

    /// 季度内所有落在 weekday 的日期（升序）
    pub fn service_dates(&self, weekday: Weekday) -> Vec<NaiveDate> {
        let (Some(first), Some(last)) = (self.first_day(), self.last_day()) else {
            return Vec::new();
        };

        let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
        first
            .checked_add_days(chrono::Days::new(offset as u64))
            .map(|start| {
                start
                    .iter_days()
                    .step_by(7)
                    .take_while(|d| *d <= last)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
