use super::{DATE_FORMAT, RdbmsSpecifics, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Default)]
pub struct MySqlRdbmsSpecifics;

impl RdbmsSpecifics for MySqlRdbmsSpecifics {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn format_boolean(&self, value: bool) -> String {
        String::from(if value { "1" } else { "0" })
    }

    fn format_date(&self, date: &NaiveDate) -> String {
        format!("'{}'", date.format(DATE_FORMAT))
    }

    fn format_timestamp(&self, ts: &NaiveDateTime) -> String {
        format!("'{}'", ts.format(TIMESTAMP_FORMAT))
    }
}
