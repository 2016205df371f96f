use crate::types::forecast::{DailyForecast, Observation};

/// Columns available to a bar.
pub const CHART_WIDTH: usize = 50;
/// Share of the temperature range added on both sides of the range chart.
const RANGE_PADDING: f64 = 0.1;
const SCALE_STEPS: usize = 5;
/// Rows above the baseline in [`column_chart`].
const COLUMN_ROWS: usize = 10;

/// A weather emoji for a temperature, using the same bands as the
/// clothing recommendations.
pub fn temperature_emoji(value: f64) -> &'static str {
    match value {
        v if v < 0.0 => "❄️",
        v if v < 10.0 => "☁️",
        v if v < 20.0 => "⛅",
        v if v < 30.0 => "☀️",
        _ => "🔥",
    }
}

fn column(value: f64, low: f64, span: f64) -> usize {
    (((value - low) / span) * CHART_WIDTH as f64).clamp(0.0, CHART_WIDTH as f64) as usize
}

/// One vertical column per forecast day, spanning its low to high.
///
/// Cells at or below the day's average are drawn `█`, cells above it `▄`.
pub fn column_chart(days: &[DailyForecast]) -> String {
    let Some(first) = days.first() else {
        return "No forecast data to chart".to_string();
    };
    let (mut lowest, mut highest) = (first.min_temp, first.max_temp);
    for day in days {
        lowest = lowest.min(day.min_temp);
        highest = highest.max(day.max_temp);
    }

    let mut lines = vec![
        "📊 Temperature Chart:".to_string(),
        "====================".to_string(),
    ];
    for row in (0..=COLUMN_ROWS).rev() {
        let level = lowest + (row as f64 / COLUMN_ROWS as f64) * (highest - lowest);
        let cells: String = days
            .iter()
            .map(|day| {
                if day.min_temp <= level && level <= day.max_temp {
                    if day.avg_temp >= level {
                        "█ "
                    } else {
                        "▄ "
                    }
                } else {
                    "  "
                }
            })
            .collect();
        lines.push(format!("{level:>5.1}°C | {cells}").trim_end().to_string());
    }
    let axis: String = days
        .iter()
        .map(|day| format!("{} ", day.date.format("%a").to_string().chars().next().unwrap_or(' ')))
        .collect();
    lines.push(format!("{:7} | {}", "", axis).trim_end().to_string());
    lines.join("\n")
}

/// Low/average/high markers per forecast day on a shared scale.
pub fn range_chart(days: &[DailyForecast]) -> String {
    let Some(first) = days.first() else {
        return "No forecast data to chart".to_string();
    };
    let (mut lowest, mut highest) = (first.min_temp, first.max_temp);
    for day in days {
        lowest = lowest.min(day.min_temp);
        highest = highest.max(day.max_temp);
    }
    let padding = (highest - lowest) * RANGE_PADDING;
    let display_low = lowest - padding;
    let mut span = (highest + padding) - display_low;
    if span <= 0.0 {
        span = 1.0;
    }

    let mut lines = vec![
        "📊 Temperature Visualization".to_string(),
        "============================".to_string(),
    ];
    for day in days {
        let min_pos = column(day.min_temp, display_low, span);
        let max_pos = column(day.max_temp, display_low, span);
        let avg_pos = column(day.avg_temp, display_low, span);
        let bar: String = (0..=CHART_WIDTH)
            .map(|j| {
                if j == min_pos {
                    '❄'
                } else if j == max_pos {
                    '🔥'
                } else if j == avg_pos {
                    '●'
                } else if j > min_pos && j < max_pos {
                    '─'
                } else {
                    ' '
                }
            })
            .collect();
        lines.push(format!(
            "{}: {} Min:{:.1}°C Max:{:.1}°C",
            day.date.format("%a"),
            bar.trim_end(),
            day.min_temp,
            day.max_temp
        ));
    }
    lines.push(String::new());
    lines.push("Legend: ❄ Low | ● Avg | 🔥 High".to_string());
    lines.join("\n")
}

/// Bars per location plus how each one differs from the first.
pub fn comparison_chart(observations: &[Observation]) -> String {
    let Some(reference) = observations.first() else {
        return "No data to visualize".to_string();
    };
    let (mut lowest, mut highest) = (reference.temperature, reference.temperature);
    for obs in observations {
        lowest = lowest.min(obs.temperature);
        highest = highest.max(obs.temperature);
    }
    let mut span = highest - lowest;
    if span == 0.0 {
        span = 1.0;
    }

    let mut lines = vec!["Temperature Chart:".to_string(), "=================".to_string()];
    for obs in observations {
        let length = column(obs.temperature, lowest, span).max(1);
        lines.push(format!(
            "{:<15} |{}{}| {:.1}°C",
            obs.location,
            "█".repeat(length),
            " ".repeat(CHART_WIDTH - length),
            obs.temperature
        ));
    }

    let step = span / SCALE_STEPS as f64;
    let scale: Vec<String> = (0..=SCALE_STEPS)
        .map(|i| format!("{:.1}°C", lowest + step * i as f64))
        .collect();
    lines.push(String::new());
    lines.push("Scale:".to_string());
    lines.push(scale.join(" "));

    if observations.len() > 1 {
        lines.push(String::new());
        lines.push("Temperature Differences:".to_string());
        for obs in &observations[1..] {
            let diff = obs.temperature - reference.temperature;
            let comparison = if diff > 0.0 {
                "warmer than"
            } else if diff < 0.0 {
                "colder than"
            } else {
                "the same temperature as"
            };
            lines.push(if diff == 0.0 {
                format!("{} is {} {}", obs.location, comparison, reference.location)
            } else {
                format!(
                    "{} is {:.1}°C {} {}",
                    obs.location,
                    diff.abs(),
                    comparison,
                    reference.location
                )
            });
        }
    }
    lines.join("\n")
}
