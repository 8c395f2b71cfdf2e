//! Read-only views over the whole journal: the month calendar and the
//! chronological entry list.

use crate::calendar::render_month;
use crate::dates::{CalendarDate, YearMonth};
use crate::journal::Journal;
use crate::scan;
use crate::sync::Syncer;

/// Renders the calendar of `month` with entry and attachment markers.
pub fn show_calendar(journal: &Journal, sync: &Syncer, month: YearMonth, color: bool) -> String {
    sync.pull_or_warn(journal.root());
    let month_path = journal.month_path(month);
    let entries = scan::days_with_entries(&month_path);
    let attachments = scan::days_with_attachments(&month_path, month.days_in_month());
    render_month(month, &entries, &attachments, color)
}

/// Every date with a non-empty entry, oldest first.
pub fn list_entries(journal: &Journal, sync: &Syncer) -> Vec<CalendarDate> {
    sync.pull_or_warn(journal.root());
    scan::all_entry_dates(journal.root())
}
