use super::{DATE_FORMAT, RdbmsSpecifics, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};

/// Oracle rules; also the fallback when nothing else is known
#[derive(Debug, Default)]
pub struct OracleRdbmsSpecifics;

impl RdbmsSpecifics for OracleRdbmsSpecifics {
    fn name(&self) -> &'static str {
        "oracle"
    }

    // Oracle has no boolean column type before 23c
    fn format_boolean(&self, value: bool) -> String {
        String::from(if value { "1" } else { "0" })
    }

    fn format_bytes(&self, bytes: &[u8]) -> String {
        format!("hextoraw('{}')", super::hex(bytes))
    }

    fn format_date(&self, date: &NaiveDate) -> String {
        format!("to_date('{}', 'yyyy-mm-dd')", date.format(DATE_FORMAT))
    }

    fn format_timestamp(&self, ts: &NaiveDateTime) -> String {
        format!(
            "to_timestamp('{}', 'yyyy-mm-dd hh24:mi:ss.ff3')",
            ts.format(TIMESTAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    #[test]
    fn test_oracle_temporal_literals() {
        let d = OracleRdbmsSpecifics;
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(
            d.format_parameter(&Value::from(date)),
            "to_date('2024-01-02', 'yyyy-mm-dd')"
        );
        let ts = date.and_hms_milli_opt(13, 4, 5, 600).unwrap();
        assert_eq!(
            d.format_parameter(&Value::from(ts)),
            "to_timestamp('2024-01-02 13:04:05.600', 'yyyy-mm-dd hh24:mi:ss.ff3')"
        );
    }

    #[test]
    fn test_oracle_boolean_and_raw() {
        let d = OracleRdbmsSpecifics;
        assert_eq!(d.format_parameter(&Value::from(false)), "0");
        assert_eq!(d.format_parameter(&Value::from(vec![1, 2])), "hextoraw('0102')");
    }
}
