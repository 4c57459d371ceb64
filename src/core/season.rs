use crate::domain::model::Season;
use crate::domain::ports::Clock;
use chrono::{Datelike, Local, NaiveDate};

/// 以本機時間為準的系統時鐘
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日期的時鐘，用於測試與 `--date` 參數
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl Season {
    /// 月份（1-12）轉季節；三個明確區間以外一律視為冬季
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

pub fn resolve_season(clock: &dyn Clock) -> Season {
    Season::from_month(clock.today().month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_for(month: u32) -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, month, 15).unwrap())
    }

    #[test]
    fn test_month_triples_map_to_seasons() {
        let expected = [
            (1, Season::Winter),
            (2, Season::Winter),
            (3, Season::Spring),
            (4, Season::Spring),
            (5, Season::Spring),
            (6, Season::Summer),
            (7, Season::Summer),
            (8, Season::Summer),
            (9, Season::Autumn),
            (10, Season::Autumn),
            (11, Season::Autumn),
            (12, Season::Winter),
        ];

        for (month, season) in expected {
            assert_eq!(resolve_season(&clock_for(month)), season, "month {}", month);
        }
    }

    #[test]
    fn test_out_of_range_month_defaults_to_winter() {
        assert_eq!(Season::from_month(0), Season::Winter);
        assert_eq!(Season::from_month(13), Season::Winter);
    }
}
