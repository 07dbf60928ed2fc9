use chrono::{DateTime, Local};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::core::{decision::Decision, rate::RatePoint};

pub fn build_rates_table(rates: &[RatePoint], now: DateTime<Local>, decision: &Decision) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Date", "Start", "End", "Price", ""]);
    for rate in rates.iter().sorted_by_key(|rate| rate.interval.start) {
        let is_past = rate.interval.start <= now;
        let is_low = *rate == decision.low;
        let is_high = decision.high.as_ref() == Some(rate);
        let price_color = if rate.price <= decision.low.price {
            Color::Green
        } else if decision.high.is_some_and(|high| rate.price >= high.price) {
            Color::Red
        } else {
            Color::DarkYellow
        };
        let mut row = vec![
            Cell::new(rate.interval.start.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(rate.interval.start.format("%H:%M")),
            Cell::new(rate.interval.end.format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(rate.price).set_alignment(CellAlignment::Right).fg(price_color),
            Cell::new(if is_low {
                "low"
            } else if is_high {
                "high"
            } else {
                ""
            }),
        ];
        if is_past {
            row = row.into_iter().map(|cell| cell.add_attribute(Attribute::Dim)).collect();
        }
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;
    use crate::core::{
        decision::{Decision, Rule},
        interval::Interval,
        selector::Selection,
    };

    fn point(now: DateTime<Local>, hours: i64, price: f64) -> RatePoint {
        let start = now + TimeDelta::hours(hours);
        RatePoint::new(Interval::new(start, start + TimeDelta::hours(1)), price.into())
    }

    #[test]
    fn test_build_rates_table() {
        let now = Local.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let rates = vec![point(now, 2, 0.9), point(now, 0, 0.5), point(now, 1, 0.1)];
        let selection = Selection { low: rates[2], high: Some(rates[0]) };
        let decision = Decision::new(selection, Rule::Ratio { factor: 2.0 });
        let table = build_rates_table(&rates, now, &decision);
        assert_eq!(table.row_count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("low"));
        assert!(rendered.contains("high"));
        assert!(rendered.contains("0.100/kWh"));
    }
}
