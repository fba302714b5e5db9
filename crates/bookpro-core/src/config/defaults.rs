pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_agency_name() -> String {
    "BookPro Agency".to_string()
}
pub(super) fn default_agency_location() -> String {
    "Rua da Inovação, 123, 1000-000 Lisboa, Portugal".to_string()
}
pub(super) fn default_agency_phone() -> String {
    "+351 210 000 000".to_string()
}
pub(super) fn default_agency_email() -> String {
    "info@bookpro.pt".to_string()
}
pub(super) fn default_submit_delay_ms() -> u64 {
    2000
}
pub(super) fn default_calendar_base_url() -> String {
    "https://calendar.google.com/calendar/render".to_string()
}
