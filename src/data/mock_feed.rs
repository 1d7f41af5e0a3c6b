//! Synthetic margin ratio series, used when no live feed is wanted.
//!
//! A bounded random walk with a slow trend and a faster cycle layered on top,
//! one point per weekday up to today. It only has to look plausible.

use async_trait::async_trait;
use chrono::{DateTime, Days, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FEED;
use crate::config::feed::MockConfig;
use crate::data::source::{FeedError, MarginSource};
use crate::domain::DataPoint;
use crate::utils::time_utils::{is_weekend, local_date_string};

pub struct MockFeed {
    pub days: usize,
    /// Fixed seed for reproducible series; fresh entropy otherwise.
    pub seed: Option<u64>,
}

impl MockFeed {
    pub fn new(days: usize, seed: Option<u64>) -> Self {
        Self { days, seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new(FEED.mock.default_days, None)
    }
}

#[async_trait]
impl MarginSource for MockFeed {
    fn signature(&self) -> &'static str {
        "Mock Generator"
    }

    async fn fetch(&self) -> Result<Vec<DataPoint>, FeedError> {
        let mut rng = self.rng();
        Ok(generate_series(&FEED.mock, self.days, Local::now(), &mut rng))
    }
}

/// One point per weekday from roughly `days` trading days before `now` up to
/// and including `now`'s date. Timestamps keep `now`'s time of day.
pub fn generate_series<R: Rng>(
    cfg: &MockConfig,
    days: usize,
    now: DateTime<Local>,
    rng: &mut R,
) -> Vec<DataPoint> {
    let lookback = (days as f64 * cfg.calendar_factor) as u64;
    let mut value = cfg.start_value_min + rng.r#gen::<f64>() * cfg.start_value_spread;
    let mut points: Vec<DataPoint> = Vec::with_capacity(days + 1);

    for offset in (0..=lookback).rev() {
        // Calendar arithmetic in local time; skips instants that don't exist
        let Some(day) = now.checked_sub_days(Days::new(offset)) else {
            continue;
        };
        if is_weekend(&day) {
            continue;
        }

        let k = points.len() as f64;
        value += (rng.r#gen::<f64>() - 0.5) * cfg.step_width;
        let trend = (k / cfg.trend_period).sin() * cfg.trend_amplitude;
        let cyclical = (k / cfg.cycle_period).sin() * cfg.cycle_amplitude;
        value = (value + trend + cyclical).clamp(cfg.value_floor, cfg.value_ceiling);

        points.push(DataPoint::new(
            local_date_string(&day),
            day.timestamp_millis(),
            value,
        ));
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn friday_noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 6, 14, 12, 0, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn series_is_weekday_only_and_ascending() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = generate_series(&FEED.mock, 200, friday_noon(), &mut rng);

        assert!(
            (195..=205).contains(&points.len()),
            "about 200 trading days, got {}",
            points.len()
        );
        assert_eq!(points.last().unwrap().date, "2024-06-14");

        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date, "dates strictly ascending");
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
        for point in &points {
            let day = NaiveDate::parse_from_str(&point.date, "%Y-%m-%d").unwrap();
            assert!(!is_weekend(&day), "{} is a weekend", point.date);
            assert!((0.03..=0.08).contains(&point.value));
        }
    }

    #[test]
    fn same_seed_same_series() {
        let a = generate_series(&FEED.mock, 50, friday_noon(), &mut StdRng::seed_from_u64(42));
        let b = generate_series(&FEED.mock, 50, friday_noon(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_days_still_yields_today() {
        let points = generate_series(&FEED.mock, 0, friday_noon(), &mut StdRng::seed_from_u64(1));
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2024-06-14");
    }
}
