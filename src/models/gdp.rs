use chrono::{DateTime, NaiveDate};

/// One quarterly GDP observation as served by the data source.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Date exactly as received (`YYYY-MM-DD`)
    pub date: String,
    /// GDP in billions of dollars
    pub gdp: f64,
}

impl DataPoint {
    pub fn new(date: impl Into<String>, gdp: f64) -> Self {
        Self {
            date: date.into(),
            gdp,
        }
    }

    /// Milliseconds since the Unix epoch, NaN when the date does not parse.
    ///
    /// Plain dates resolve to UTC midnight; timestamps keep their time of day.
    pub fn timestamp_ms(&self) -> f64 {
        if let Ok(date) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return date_to_ms(date);
        }
        DateTime::parse_from_rfc3339(&self.date)
            .map_or(f64::NAN, |dt| dt.timestamp_millis() as f64)
    }
}

/// Converts a calendar date to epoch milliseconds at UTC midnight.
pub fn date_to_ms(date: NaiveDate) -> f64 {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .timestamp_millis() as f64
}

/// Converts epoch milliseconds back to the UTC calendar date containing them.
pub fn ms_to_date(ms: f64) -> Option<NaiveDate> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms.floor() as i64).map(|dt| dt.date_naive())
}

/// Descriptive fields served next to the series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceInfo {
    pub name: Option<String>,
    pub source_name: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl SourceInfo {
    /// One-line attribution, e.g. `GDP (1947-01-01 to 2015-07-01). Source: FRED`.
    pub fn caption(&self) -> Option<String> {
        let mut parts = Vec::new();

        if let Some(name) = &self.name {
            let caption = match (&self.from_date, &self.to_date) {
                (Some(from), Some(to)) => format!("{name} ({from} to {to})."),
                _ => format!("{name}."),
            };
            parts.push(caption);
        }
        if let Some(source) = &self.source_name {
            parts.push(format!("Source: {source}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// The full series, in the order received.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
    source: SourceInfo,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            source: SourceInfo::default(),
        }
    }

    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = source;
        self
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn source(&self) -> &SourceInfo {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest and latest parseable dates in epoch milliseconds.
    pub fn date_extent(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(DataPoint::timestamp_ms)
            .filter(|t| !t.is_nan())
            .fold(None, |acc, t| match acc {
                None => Some((t, t)),
                Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            })
    }

    /// Largest value, skipping NaN entries.
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.gdp)
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date_is_utc_midnight() {
        let point = DataPoint::new("1947-04-01", 246.3);
        let expected = date_to_ms(NaiveDate::from_ymd_opt(1947, 4, 1).unwrap());
        assert_eq!(point.timestamp_ms(), expected);
    }

    #[test]
    fn test_rfc3339_keeps_time_of_day() {
        let midnight = DataPoint::new("2015-07-01T00:00:00Z", 0.0);
        let evening = DataPoint::new("2015-07-01T18:00:00Z", 0.0);
        assert_eq!(midnight.timestamp_ms(), 1_435_708_800_000.0);
        assert_eq!(
            evening.timestamp_ms() - midnight.timestamp_ms(),
            18.0 * 3_600_000.0
        );
    }

    #[test]
    fn test_caption_full() {
        let source = SourceInfo {
            name: Some("Gross Domestic Product".to_string()),
            source_name: Some("Federal Reserve Economic Data".to_string()),
            from_date: Some("1947-01-01".to_string()),
            to_date: Some("2015-07-01".to_string()),
        };
        assert_eq!(
            source.caption().as_deref(),
            Some(
                "Gross Domestic Product (1947-01-01 to 2015-07-01). Source: Federal Reserve Economic Data"
            )
        );
    }

    #[test]
    fn test_caption_partial_and_empty() {
        let source = SourceInfo {
            source_name: Some("FRED".to_string()),
            ..SourceInfo::default()
        };
        assert_eq!(source.caption().as_deref(), Some("Source: FRED"));
        assert!(SourceInfo::default().caption().is_none());
    }

    #[test]
    fn test_unparseable_date_is_nan() {
        let point = DataPoint::new("not a date", 1.0);
        assert!(point.timestamp_ms().is_nan());
    }

    #[test]
    fn test_epoch_timestamp() {
        let point = DataPoint::new("1970-01-02", 0.0);
        assert_eq!(point.timestamp_ms(), 86_400_000.0);
    }

    #[test]
    fn test_ms_round_trip_keeps_pre_epoch_dates() {
        let date = NaiveDate::from_ymd_opt(1947, 1, 1).unwrap();
        assert_eq!(ms_to_date(date_to_ms(date)), Some(date));
        assert_eq!(ms_to_date(f64::NAN), None);
    }

    #[test]
    fn test_extent_and_max_skip_nan() {
        let dataset = Dataset::new(vec![
            DataPoint::new("1950-01-01", 280.0),
            DataPoint::new("bogus", f64::NAN),
            DataPoint::new("1947-01-01", 243.1),
        ]);

        let (lo, hi) = dataset.date_extent().unwrap();
        assert_eq!(lo, DataPoint::new("1947-01-01", 0.0).timestamp_ms());
        assert_eq!(hi, DataPoint::new("1950-01-01", 0.0).timestamp_ms());
        assert_eq!(dataset.max_value(), Some(280.0));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.date_extent().is_none());
        assert!(dataset.max_value().is_none());
    }
}
