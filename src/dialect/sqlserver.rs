use super::{DATE_FORMAT, RdbmsSpecifics, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Default)]
pub struct SqlServerRdbmsSpecifics;

impl RdbmsSpecifics for SqlServerRdbmsSpecifics {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn format_boolean(&self, value: bool) -> String {
        String::from(if value { "1" } else { "0" })
    }

    fn format_bytes(&self, bytes: &[u8]) -> String {
        format!("0x{}", super::hex(bytes))
    }

    // Style 23 is yyyy-mm-dd, style 121 is yyyy-mm-dd hh:mi:ss.mmm
    fn format_date(&self, date: &NaiveDate) -> String {
        format!("convert(date, '{}', 23)", date.format(DATE_FORMAT))
    }

    fn format_timestamp(&self, ts: &NaiveDateTime) -> String {
        format!("convert(datetime, '{}', 121)", ts.format(TIMESTAMP_FORMAT))
    }
}
