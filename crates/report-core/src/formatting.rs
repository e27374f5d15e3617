/// Render a minute count with the report's unit suffix.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_minutes;
///
/// assert_eq!(format_minutes(30), "30 min.");
/// assert_eq!(format_minutes(0),  "0 min.");
/// ```
pub fn format_minutes(minutes: u64) -> String {
    format!("{} min.", minutes)
}
