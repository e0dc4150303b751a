use time_tz::Tz;

/// Look up `canonical_timezone`, e.g. "America/Sao_Paulo".
///
/// Returns `None` if the name is not a known canonical timezone.
pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}
