use jiff::civil::Date;

/// Portuguese month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Format a date as `"15 de Março de 2025"`.
pub fn format_long_date(date: Date) -> String {
    let month = MONTH_NAMES[usize::from(date.month().unsigned_abs()) - 1];
    format!("{:02} de {} de {:04}", date.day(), month, date.year())
}

/// Format an ISO `YYYY-MM-DD` issue date for display.
///
/// Absent, blank or unparseable input falls back to `today`, so the output
/// is fully determined by the two arguments.
pub fn format_issue_date(input: Option<&str>, today: Date) -> String {
    let date = input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| match s.parse::<Date>() {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::debug!(input = s, error = %e, "unparseable issue date, using today");
                None
            }
        })
        .unwrap_or(today);
    format_long_date(date)
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}
