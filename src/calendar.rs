//! Month grid rendering for the `calendar` command.
//!
//! The grid starts weeks on Sunday. Each day cell is four columns wide: a
//! leading marker column, the day number, and a trailing marker column.
//! With color, entry days are bold green and attachment days carry a blue
//! `*`. Without color, entry days get a leading `+` instead.

use crate::dates::YearMonth;
use chrono::Datelike;
use std::collections::BTreeSet;
use std::fmt::Write;

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";

const INNER_WIDTH: usize = 34;
const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Renders `month` as a boxed grid.
///
/// `entries` and `attachments` hold day numbers; `color` enables ANSI styling.
///
/// # Examples
///
/// ```
/// use daybook::calendar::render_month;
/// use daybook::dates::YearMonth;
/// use std::collections::BTreeSet;
///
/// let month = YearMonth::new(2025, 2).unwrap();
/// let grid = render_month(month, &BTreeSet::from([3]), &BTreeSet::new(), false);
/// assert!(grid.contains("February 2025"));
/// assert!(grid.contains("+ 3"));
/// ```
pub fn render_month(
    month: YearMonth,
    entries: &BTreeSet<u32>,
    attachments: &BTreeSet<u32>,
    color: bool,
) -> String {
    let first = month.first_day();
    let header = first.format("%B %Y").to_string();
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = month.days_in_month();

    let mut out = String::new();
    out.push_str(&border('┌', '─', '┐'));
    let _ = writeln!(out, "│{:^width$}│", header, width = INNER_WIDTH);
    out.push_str(&border('├', '┬', '┤'));
    let names: Vec<String> = WEEKDAYS.iter().map(|d| format!(" {} ", d)).collect();
    let _ = writeln!(out, "│{}│", names.join("│"));
    out.push_str(&border('├', '┼', '┤'));

    let mut cells: Vec<String> = vec!["    ".to_string(); leading];
    cells.extend((1..=days).map(|day| {
        day_cell(day, entries.contains(&day), attachments.contains(&day), color)
    }));
    while cells.len() % 7 != 0 {
        cells.push("    ".to_string());
    }
    for week in cells.chunks(7) {
        let _ = writeln!(out, "│{}│", week.join("│"));
    }

    out.push_str(&border('└', '┴', '┘'));
    out
}

fn border(left: char, join: char, right: char) -> String {
    // The header rule has no column joins.
    let segment = "────";
    let inner = if join == '─' {
        segment.repeat(7) + "──────"
    } else {
        let separator = join.to_string();
        vec![segment; 7].join(separator.as_str())
    };
    format!("{}{}{}\n", left, inner, right)
}

fn day_cell(day: u32, has_entry: bool, has_attachments: bool, color: bool) -> String {
    let marker = if has_attachments { "*" } else { " " };
    if !color {
        let lead = if has_entry { "+" } else { " " };
        return format!("{}{:>2}{}", lead, day, marker);
    }
    match (has_entry, has_attachments) {
        (true, true) => format!(" {}{}{:>2}{}*{}", BOLD, GREEN, day, BLUE, RESET),
        (true, false) => format!(" {}{}{:>2}{} ", BOLD, GREEN, day, RESET),
        (false, true) => format!(" {}{}{:>2}*{}", BOLD, BLUE, day, RESET),
        (false, false) => format!(" {:>2} ", day),
    }
}
