// src/messages.rs

use crate::dates::{format_br, parse_date};
use crate::domain::order::OrderRow;
use crate::domain::status::OrderStatus;
use chrono::{Duration, NaiveDate};

/// Inclusive date window for the reminder, starting today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub fn reminder_window(today: NaiveDate, days_ahead: i64) -> ReminderWindow {
    ReminderWindow {
        start: today,
        end: today + Duration::days(days_ahead),
    }
}

/// Builds the WhatsApp-style summary the shop forwards to the group chat:
/// overdue orders, orders due today and orders coming up inside the window.
/// Completed orders never appear; rows are the already filtered/sorted ones,
/// so whatever the user is looking at is what gets messaged.
pub fn build_reminder_message(rows: &[OrderRow], today: NaiveDate, days_ahead: i64) -> String {
    let window = reminder_window(today, days_ahead);

    let mut overdue: Vec<String> = Vec::new();
    let mut due_today: Vec<String> = Vec::new();
    let mut upcoming: Vec<String> = Vec::new();

    for row in rows {
        if row.display_status == OrderStatus::Concluida {
            continue;
        }
        let line = reminder_line(row);
        match row.display_status {
            OrderStatus::Atrasada => overdue.push(line),
            OrderStatus::ParaHoje => due_today.push(line),
            _ => {
                let due = match row.order.exit_date.as_deref().and_then(parse_date) {
                    Some(due) => due,
                    None => continue,
                };
                if due > window.start && due <= window.end {
                    upcoming.push(line);
                }
            }
        }
    }

    let mut message = format!("*Resumo da marcenaria — {}*\n", format_br(today));
    push_section(&mut message, "🔴 Atrasadas", &overdue);
    push_section(&mut message, "🟠 Para hoje", &due_today);
    push_section(
        &mut message,
        &format!("📅 Próximos {days_ahead} dias"),
        &upcoming,
    );
    if overdue.is_empty() && due_today.is_empty() && upcoming.is_empty() {
        message.push_str("\nNenhuma ordem pendente no período. ✅\n");
    }
    message
}

fn reminder_line(row: &OrderRow) -> String {
    let who = row.carpenter_name.as_deref().unwrap_or("sem marceneiro");
    let when = row
        .order
        .exit_date
        .as_deref()
        .and_then(parse_date)
        .map(format_br)
        .unwrap_or_else(|| "sem data".to_string());
    format!("- {} ({who}, saída {when})", row.order.id)
}

fn push_section(message: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    message.push('\n');
    message.push_str(title);
    message.push_str(":\n");
    for line in lines {
        message.push_str(line);
        message.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Order;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(id: &str, exit: Option<&str>, display: OrderStatus) -> OrderRow {
        OrderRow {
            order: Order {
                id: id.to_string(),
                entry_date: None,
                exit_date: exit.map(str::to_string),
                status: OrderStatus::Recebida,
                carpenter: None,
                materials: Vec::new(),
            },
            display_status: display,
            carpenter_name: Some("João".into()),
        }
    }

    #[test]
    fn window_is_inclusive_and_starts_today() {
        let w = reminder_window(day(2024, 1, 8), 7);
        assert_eq!(w.start, day(2024, 1, 8));
        assert_eq!(w.end, day(2024, 1, 15));
    }

    #[test]
    fn sections_land_where_expected() {
        let rows = vec![
            row("OS-1", Some("05/01/2024"), OrderStatus::Atrasada),
            row("OS-2", Some("08/01/2024"), OrderStatus::ParaHoje),
            row("OS-3", Some("12/01/2024"), OrderStatus::EmProcesso),
            row("OS-4", Some("12/01/2024"), OrderStatus::Concluida),
        ];
        let msg = build_reminder_message(&rows, day(2024, 1, 8), 7);
        assert!(msg.contains("Atrasadas:\n- OS-1 (João, saída 05/01/2024)"));
        assert!(msg.contains("Para hoje:\n- OS-2"));
        assert!(msg.contains("Próximos 7 dias:\n- OS-3"));
        // Completed work is never messaged.
        assert!(!msg.contains("OS-4"));
    }

    #[test]
    fn upcoming_excludes_orders_past_the_window() {
        let rows = vec![row("OS-9", Some("20/01/2024"), OrderStatus::Recebida)];
        let msg = build_reminder_message(&rows, day(2024, 1, 8), 7);
        assert!(!msg.contains("OS-9"));
        assert!(msg.contains("Nenhuma ordem pendente"));
    }

    #[test]
    fn header_carries_the_report_date() {
        let msg = build_reminder_message(&[], day(2024, 1, 8), 7);
        assert!(msg.starts_with("*Resumo da marcenaria — 08/01/2024*"));
    }
}
