//! Forecast aggregation for the weather widget
//!
//! Turns the provider's 3-hour samples (about 5 days, 8 per day) into a
//! single "tomorrow" card and an ordered strip of daily summaries. Every
//! function here is pure: the reference date is always passed in, never read
//! from the clock.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, Timelike};

use crate::models::{
    DailySummary, ForecastSample, TemperatureRange, TomorrowSummary, WeatherCategory,
    DEFAULT_WEATHER_EMOJI,
};

/// Maximum number of days in the weekly strip
pub const WEEK_LENGTH: usize = 7;

/// Build tomorrow's forecast card.
///
/// Samples dated `reference_date + 1` are summarized around the 12:00 sample
/// (or the middle one when there is no 12:00 sample). If the forecast holds no
/// sample for tomorrow, the first sample of the whole forecast is returned
/// with a flat temperature range. Returns `None` only for an empty forecast.
pub fn summarize_tomorrow(
    samples: &[ForecastSample],
    reference_date: NaiveDate,
) -> Option<TomorrowSummary> {
    let tomorrow = reference_date.checked_add_days(Days::new(1));
    let tomorrow_samples: Vec<&ForecastSample> = samples
        .iter()
        .filter(|s| Some(s.date()) == tomorrow)
        .collect();

    if let Some(representative) = representative_sample(&tomorrow_samples) {
        let (min, max) = temperature_bounds(&tomorrow_samples);
        return Some(tomorrow_from(
            representative,
            TemperatureRange {
                current: representative.temperature_celsius,
                min,
                max,
            },
        ));
    }

    // Same-day data labelled as tomorrow; kept for parity with the dashboard
    samples.first().map(|first| {
        let t = first.temperature_celsius;
        tomorrow_from(
            first,
            TemperatureRange {
                current: t,
                min: t,
                max: t,
            },
        )
    })
}

/// Build the daily strip: one summary per calendar date, in the order dates
/// first appear, capped at [`WEEK_LENGTH`]. Never padded.
pub fn summarize_week(samples: &[ForecastSample]) -> Vec<DailySummary> {
    group_by_date(samples)
        .into_iter()
        .take(WEEK_LENGTH)
        .filter_map(|(date, group)| {
            let representative = representative_sample(&group)?;
            let (min, max) = temperature_bounds(&group);

            Some(DailySummary {
                date,
                day_name: date.format("%a").to_string(),
                condition: representative.condition.clone(),
                emoji: weather_emoji(&representative.condition).to_string(),
                description: representative.description.clone(),
                min_temp_celsius: format_temperature(min),
                max_temp_celsius: format_temperature(max),
                humidity_percent: representative.humidity_percent,
            })
        })
        .collect()
}

/// Group samples by calendar date, keeping the order in which dates first
/// appear in the input.
pub fn group_by_date(samples: &[ForecastSample]) -> Vec<(NaiveDate, Vec<&ForecastSample>)> {
    let mut groups: Vec<(NaiveDate, Vec<&ForecastSample>)> = Vec::new();
    let mut positions: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.date();
        match positions.get(&date) {
            Some(&i) => groups[i].1.push(sample),
            None => {
                positions.insert(date, groups.len());
                groups.push((date, vec![sample]));
            }
        }
    }

    groups
}

/// Pick the sample that stands in for a whole day: the one at exactly 12:00,
/// otherwise the one at index `len / 2`.
pub fn representative_sample<'a>(group: &[&'a ForecastSample]) -> Option<&'a ForecastSample> {
    group
        .iter()
        .copied()
        .find(|s| is_noon(s))
        .or_else(|| group.get(group.len() / 2).copied())
}

/// Display glyph for a provider condition label
pub fn weather_emoji(condition: &str) -> &'static str {
    WeatherCategory::from_label(condition)
        .map(|c| c.emoji())
        .unwrap_or(DEFAULT_WEATHER_EMOJI)
}

/// Round a temperature for display. Halves round up, as the dashboard does.
pub fn format_temperature(celsius: f64) -> i32 {
    round_half_up(celsius)
}

/// Wind speed in km/h for display
pub fn wind_speed_kmh(meters_per_second: f64) -> i32 {
    round_half_up(meters_per_second * 3.6)
}

/// OpenWeatherMap icon image for an icon code such as "10d"
pub fn weather_icon_url(icon_code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{}@2x.png", icon_code)
}

fn is_noon(sample: &ForecastSample) -> bool {
    let time = sample.timestamp.time();
    time.hour() == 12 && time.minute() == 0 && time.second() == 0
}

fn temperature_bounds(group: &[&ForecastSample]) -> (f64, f64) {
    group.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), s| (min.min(s.temperature_celsius), max.max(s.temperature_celsius)),
    )
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

fn tomorrow_from(sample: &ForecastSample, temperature: TemperatureRange) -> TomorrowSummary {
    TomorrowSummary {
        timestamp: sample.timestamp,
        temperature,
        humidity_percent: sample.humidity_percent,
        condition: sample.condition.clone(),
        description: sample.description.clone(),
        feels_like_celsius: sample.feels_like_celsius,
        wind_speed_mps: sample.wind_speed_mps,
        icon: sample.icon.clone(),
    }
}
