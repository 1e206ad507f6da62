// src/filters/sort.rs

use crate::dates::parse_date;
use crate::filters::config::{SortKey, SortOrder};
use crate::filters::Record;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Orders a collection by the chosen column. Pure; returns a new Vec.
///
/// `today` feeds the status column: records sort by the priority of their
/// *display* status, so an order that became overdue since it was stored
/// still sorts to the top.
pub fn sort_records<R: Record + Clone>(
    records: &[R],
    sort_by: SortKey,
    sort_order: SortOrder,
    today: NaiveDate,
) -> Vec<R> {
    let mut out: Vec<R> = records.to_vec();
    out.sort_by(|a, b| {
        let cmp = compare(a, b, sort_by, today);
        match sort_order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
    out
}

fn compare<R: Record>(a: &R, b: &R, sort_by: SortKey, today: NaiveDate) -> Ordering {
    match sort_by {
        SortKey::Id => a.id().to_lowercase().cmp(&b.id().to_lowercase()),
        SortKey::EntryDate => date_key(a.entry_date()).cmp(&date_key(b.entry_date())),
        SortKey::ExitDate => date_key(a.exit_date()).cmp(&date_key(b.exit_date())),
        SortKey::Status => a.status_priority(today).cmp(&b.status_priority(today)),
        SortKey::Carpenter => assignee_key(a.assignee()).cmp(&assignee_key(b.assignee())),
    }
}

// Unparsable dates take the minimum value, landing first ascending.
fn date_key(raw: Option<&str>) -> NaiveDate {
    raw.and_then(parse_date).unwrap_or(NaiveDate::MIN)
}

// Missing assignee compares as the empty string, landing first ascending.
fn assignee_key(raw: Option<&str>) -> String {
    raw.unwrap_or("").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Order;
    use crate::domain::status::OrderStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
    }

    fn order(id: &str, exit: Option<&str>, status: OrderStatus, carpenter: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            entry_date: None,
            exit_date: exit.map(str::to_string),
            status,
            carpenter: carpenter.map(str::to_string),
            materials: Vec::new(),
        }
    }

    fn ids(records: &[Order]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn id_sort_ignores_case() {
        let records = vec![
            order("os-2", None, OrderStatus::Recebida, None),
            order("OS-1", None, OrderStatus::Recebida, None),
            order("OS-3", None, OrderStatus::Recebida, None),
        ];
        let out = sort_records(&records, SortKey::Id, SortOrder::Asc, today());
        assert_eq!(ids(&out), vec!["OS-1", "os-2", "OS-3"]);
    }

    #[test]
    fn desc_reverses_the_comparator() {
        let records = vec![
            order("OS-1", None, OrderStatus::Recebida, None),
            order("OS-2", None, OrderStatus::Recebida, None),
        ];
        let out = sort_records(&records, SortKey::Id, SortOrder::Desc, today());
        assert_eq!(ids(&out), vec!["OS-2", "OS-1"]);
    }

    #[test]
    fn status_sort_follows_priority_table() {
        // concluida, atrasada (derived from the past due date), paraHoje.
        let records = vec![
            order("done", Some("2030-01-01"), OrderStatus::Concluida, None),
            order("late", Some("2024-01-05"), OrderStatus::Recebida, None),
            order("today", Some("2024-01-08"), OrderStatus::EmProcesso, None),
        ];
        let out = sort_records(&records, SortKey::Status, SortOrder::Asc, today());
        assert_eq!(ids(&out), vec!["late", "today", "done"]);
    }

    #[test]
    fn unknown_status_sorts_last() {
        let records = vec![
            order("weird", None, OrderStatus::Unknown("???".into()), None),
            order("done", None, OrderStatus::Concluida, None),
        ];
        let out = sort_records(&records, SortKey::Status, SortOrder::Asc, today());
        assert_eq!(ids(&out), vec!["done", "weird"]);
    }

    #[test]
    fn unparsable_exit_date_sorts_first_ascending() {
        let records = vec![
            order("real", Some("2024-01-05"), OrderStatus::Recebida, None),
            order("broken", Some("not-a-date"), OrderStatus::Recebida, None),
        ];
        let out = sort_records(&records, SortKey::ExitDate, SortOrder::Asc, today());
        assert_eq!(ids(&out), vec!["broken", "real"]);
    }

    #[test]
    fn missing_carpenter_sorts_first_ascending() {
        let records = vec![
            order("b", None, OrderStatus::Recebida, Some("pedro")),
            order("a", None, OrderStatus::Recebida, None),
            order("c", None, OrderStatus::Recebida, Some("João")),
        ];
        let out = sort_records(&records, SortKey::Carpenter, SortOrder::Asc, today());
        assert_eq!(ids(&out), vec!["a", "c", "b"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let records = vec![
            order("OS-3", Some("2024-01-01"), OrderStatus::Concluida, None),
            order("OS-1", Some("2024-01-09"), OrderStatus::Recebida, None),
            order("OS-2", Some("not-a-date"), OrderStatus::EmProcesso, None),
        ];
        let once = sort_records(&records, SortKey::ExitDate, SortOrder::Desc, today());
        let twice = sort_records(&once, SortKey::ExitDate, SortOrder::Desc, today());
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn date_sort_handles_mixed_formats() {
        let records = vec![
            order("late", Some("20/01/2024"), OrderStatus::Recebida, None),
            order("early", Some("2024-01-02T08:00:00"), OrderStatus::Recebida, None),
        ];
        let out = sort_records(&records, SortKey::ExitDate, SortOrder::Asc, today());
        assert_eq!(ids(&out), vec!["early", "late"]);
    }
}
