use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::gdp::{date_to_ms, ms_to_date};

const DAY_MS: f64 = 86_400_000.0;
const WEEK_MS: f64 = DAY_MS * 7.0;
const MONTH_MS: f64 = DAY_MS * 30.0;
const YEAR_MS: f64 = DAY_MS * 365.0;

// Thresholds for rounding a raw step to 1, 2, 5 or 10 times a power of ten.
const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_38; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous scale interpolating linearly between a domain and a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a domain value to the range. A zero-width domain maps everything to the range start.
    pub fn apply(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;

        if span == 0.0 {
            return r0;
        }

        r0 + (x - d0) / span * (r1 - r0)
    }

    /// Evenly spaced, human-friendly values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        linear_ticks(lo, hi, count)
    }

    /// Spacing between the values returned by [`Self::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = ordered(self.domain);
        tick_step(lo, hi, count)
    }

    /// Formats a tick with the precision implied by the tick step and thousands separators.
    pub fn format_tick(&self, value: f64, count: usize) -> String {
        let step = self.tick_step(count);
        let decimals = if step.is_finite() && step > 0.0 {
            (-step.log10().floor()).max(0.0) as usize
        } else {
            0
        };
        group_thousands(value, decimals)
    }
}

/// Linear scale over calendar time, measured in epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
}

/// Calendar interval used to place time ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Day(u32),
    Week,
    Month(u32),
    Year(i32),
}

const TIME_INTERVALS: [(TimeInterval, f64); 6] = [
    (TimeInterval::Day(1), DAY_MS),
    (TimeInterval::Day(2), DAY_MS * 2.0),
    (TimeInterval::Week, WEEK_MS),
    (TimeInterval::Month(1), MONTH_MS),
    (TimeInterval::Month(3), MONTH_MS * 3.0),
    (TimeInterval::Year(1), YEAR_MS),
];

impl TimeScale {
    pub fn new(domain_ms: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: LinearScale::new(domain_ms, range),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    pub fn apply_ms(&self, ms: f64) -> f64 {
        self.inner.apply(ms)
    }

    /// Picks the calendar interval whose length is closest to span / count.
    pub fn tick_interval(&self, count: usize) -> TimeInterval {
        let (start, stop) = ordered(self.inner.domain);
        let target = (stop - start) / count.max(1) as f64;

        match TIME_INTERVALS.iter().position(|(_, len)| *len > target) {
            None => {
                let step = tick_step(start / YEAR_MS, stop / YEAR_MS, count).max(1.0);
                TimeInterval::Year(step as i32)
            }
            Some(0) => TimeInterval::Day(1),
            Some(i) => {
                let (lower, lower_len) = TIME_INTERVALS[i - 1];
                let (upper, upper_len) = TIME_INTERVALS[i];
                if target / lower_len < upper_len / target {
                    lower
                } else {
                    upper
                }
            }
        }
    }

    /// Interval boundaries falling inside the domain, in ascending order.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (start, stop) = ordered(self.inner.domain);
        let (Some(first), Some(last)) = (ms_to_date(start), ms_to_date(stop)) else {
            return Vec::new();
        };

        let in_domain = |date: &NaiveDate| {
            let ms = date_to_ms(*date);
            ms >= start && ms <= stop
        };

        let candidates: Vec<NaiveDate> = match self.tick_interval(count) {
            TimeInterval::Year(step) => (first.year()..=last.year())
                .filter(|y| y.rem_euclid(step) == 0)
                .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
                .collect(),
            TimeInterval::Month(step) => months_between(first, last)
                .filter(|d| d.month0() % step == 0)
                .collect(),
            TimeInterval::Week => {
                let offset = i64::from(first.weekday().num_days_from_sunday());
                let first_sunday = if offset == 0 {
                    first
                } else {
                    first + Duration::days(7 - offset)
                };
                first_sunday
                    .iter_weeks()
                    .take_while(|d| *d <= last)
                    .collect()
            }
            TimeInterval::Day(step) => first
                .iter_days()
                .take_while(|d| *d <= last)
                .filter(|d| d.day0() % step == 0)
                .collect(),
        };

        candidates.into_iter().filter(in_domain).collect()
    }

    /// Labels a tick by the coarsest calendar boundary it sits on.
    pub fn format_tick(&self, date: NaiveDate) -> String {
        let pattern = if date.month() == 1 && date.day() == 1 {
            "%Y"
        } else if date.day() == 1 {
            "%B"
        } else if date.weekday() == Weekday::Sun {
            "%b %d"
        } else {
            "%a %d"
        };
        date.format(pattern).to_string()
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if b < a { (b, a) } else { (a, b) }
}

fn months_between(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let start = first.year() * 12 + first.month0() as i32;
    let end = last.year() * 12 + last.month0() as i32;
    (start..=end).filter_map(|m| {
        NaiveDate::from_ymd_opt(m.div_euclid(12), m.rem_euclid(12) as u32 + 1, 1)
    })
}

/// Integer tick bounds and increment; a negative increment means "divide by".
fn tick_spec(start: f64, stop: f64, count: usize) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count as f64;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        Some((i1, i2, -inc))
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        Some((i1, i2, inc))
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    match tick_spec(start, stop, count) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let Some((i1, i2, inc)) = tick_spec(start, stop, count) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        out.push('-');
    }

    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }

    out
}
