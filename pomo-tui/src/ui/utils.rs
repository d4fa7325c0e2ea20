use time::UtcOffset;

pub fn to_local_time(dt: time::OffsetDateTime) -> time::OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

/// "HH:MM" in local time.
pub fn local_hh_mm(dt: time::OffsetDateTime) -> String {
    let t = to_local_time(dt).time();
    format!("{:02}:{:02}", t.hour(), t.minute())
}
