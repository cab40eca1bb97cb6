use chrono::{
    Local,
    NaiveDateTime
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    DateTime,
    Date,
    Time
}

impl TimestampStyle {
    pub fn format_str(&self) -> &'static str {
        match self {
            TimestampStyle::DateTime => "%Y-%m-%d_%H-%M-%S",
            TimestampStyle::Date => "%Y-%m-%d",
            TimestampStyle::Time => "%H-%M-%S"
        }
    }
}

pub fn format_timestamp(date_time: NaiveDateTime, style: TimestampStyle) -> String {
    date_time.format(style.format_str()).to_string()
}

pub fn get_timestamp(style: TimestampStyle) -> String {
    format_timestamp(Local::now().naive_local(), style)
}
