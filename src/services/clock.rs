use chrono::{DateTime, FixedOffset, Local, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which clock a rendered "update time" uses. The movie page always shows
/// Beijing time no matter where the job runs; the news page shows the
/// machine's local time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timezone {
    MachineLocal,
    Shanghai,
}

pub fn timestamp(tz: Timezone) -> String {
    match tz {
        Timezone::MachineLocal => Local::now().format(TIMESTAMP_FORMAT).to_string(),
        Timezone::Shanghai => shanghai_timestamp(Utc::now()),
    }
}

// Asia/Shanghai is a fixed UTC+8, no DST.
fn shanghai_timestamp(instant: DateTime<Utc>) -> String {
    let shanghai = FixedOffset::east_opt(8 * 3600).expect("UTC+8 is in range");
    instant
        .with_timezone(&shanghai)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
