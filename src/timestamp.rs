use chrono::{DateTime, Timelike, Utc};

/// Textual renderings of an instant, as the node store writes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2019-08-05T19:07:18.123456Z`, fraction omitted when it is zero.
    Iso8601,
    /// `Mon, 05 Aug 2019 19:07:18 GMT`
    Rfc2822,
    /// `2019-08-05T19:07:18.1Z`, tenths of a second only.
    Rfc3339,
}

impl TimestampFormat {
    pub fn render(self, at: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => iso8601(at),
            TimestampFormat::Rfc2822 => rfc2822(at),
            TimestampFormat::Rfc3339 => rfc3339(at),
        }
    }
}

pub fn iso8601(at: &DateTime<Utc>) -> String {
    let micros = at.nanosecond() % 1_000_000_000 / 1_000;
    if micros == 0 {
        at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        format!("{}.{:06}Z", at.format("%Y-%m-%dT%H:%M:%S"), micros)
    }
}

pub fn rfc2822(at: &DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

pub fn rfc3339(at: &DateTime<Utc>) -> String {
    // leap-second nanos (>= 1e9) fold back into the current second
    let tenths = at.nanosecond() % 1_000_000_000 / 100_000_000;
    format!("{}.{}Z", at.format("%Y-%m-%dT%H:%M:%S"), tenths)
}
