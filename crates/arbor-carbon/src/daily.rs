//! Preparing the engine's input: daily totals from events or wire records.

use std::collections::BTreeMap;

use arbor_types::{DailyTotal, DailyTotalRecord, Event, TreeAction};
use chrono::NaiveDate;

use crate::error::CarbonError;

/// Wire date format accepted in [`DailyTotalRecord::date`].
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Collapse raw events into one [`DailyTotal`] per date, oldest first.
///
/// Same-day events are summed by action. Dates with no events are absent.
pub fn daily_totals(events: &[Event]) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();

    for event in events {
        let total = by_date
            .entry(event.date)
            .or_insert_with(|| DailyTotal::new(event.date, 0, 0));
        let quantity = u64::from(event.quantity.get());
        match event.action {
            TreeAction::Planted => total.planted = total.planted.saturating_add(quantity),
            TreeAction::Cut => total.cut = total.cut.saturating_add(quantity),
        }
    }

    by_date.into_values().collect()
}

/// Parse wire records into typed daily totals, preserving input order.
///
/// # Errors
///
/// Returns [`CarbonError::MalformedDate`] naming the index and value of
/// the first record whose date is not a valid `YYYY-MM-DD` date.
pub fn parse_records(records: &[DailyTotalRecord]) -> Result<Vec<DailyTotal>, CarbonError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let date = NaiveDate::parse_from_str(record.date.trim(), DATE_FORMAT).map_err(
                |source| CarbonError::MalformedDate {
                    index,
                    value: record.date.clone(),
                    source,
                },
            )?;
            Ok(DailyTotal::new(date, record.planted, record.cut))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(d: NaiveDate, action: TreeAction, quantity: u32) -> Event {
        Event::new(d, action, quantity).unwrap()
    }

    #[test]
    fn same_day_events_are_summed_by_action() {
        let events = vec![
            event(date(2024, 1, 2), TreeAction::Planted, 4),
            event(date(2024, 1, 1), TreeAction::Cut, 2),
            event(date(2024, 1, 2), TreeAction::Cut, 1),
            event(date(2024, 1, 2), TreeAction::Planted, 6),
        ];
        let totals = daily_totals(&events);
        assert_eq!(
            totals,
            vec![
                DailyTotal::new(date(2024, 1, 1), 0, 2),
                DailyTotal::new(date(2024, 1, 2), 10, 1),
            ]
        );
    }

    #[test]
    fn no_events_no_totals() {
        assert!(daily_totals(&[]).is_empty());
    }

    #[test]
    fn records_parse_in_order() {
        let records = vec![
            DailyTotalRecord {
                date: "2024-02-01".to_owned(),
                planted: 3,
                cut: 0,
            },
            DailyTotalRecord {
                date: " 2024-01-01 ".to_owned(),
                planted: 0,
                cut: 1,
            },
        ];
        let parsed = parse_records(&records).unwrap();
        assert_eq!(
            parsed,
            vec![
                DailyTotal::new(date(2024, 2, 1), 3, 0),
                DailyTotal::new(date(2024, 1, 1), 0, 1),
            ]
        );
    }

    #[test]
    fn malformed_date_names_the_record() {
        let records = vec![
            DailyTotalRecord {
                date: "2024-01-01".to_owned(),
                planted: 1,
                cut: 0,
            },
            DailyTotalRecord {
                date: "2024-02-30".to_owned(),
                planted: 1,
                cut: 0,
            },
        ];
        let err = parse_records(&records);
        assert!(matches!(
            err,
            Err(CarbonError::MalformedDate { index: 1, ref value, .. }) if value == "2024-02-30"
        ));
    }
}
