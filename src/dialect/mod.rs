//! Vendor-specific SQL rendering rules and their selection by driver name.

pub mod mysql;
pub mod oracle;
pub mod registry;
pub mod sqlserver;

use crate::core::Value;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Debug;
use std::sync::Arc;

pub use mysql::MySqlRdbmsSpecifics;
pub use oracle::OracleRdbmsSpecifics;
pub use registry::{DialectRegistry, Resolution};
pub use sqlserver::SqlServerRdbmsSpecifics;

/// Shared handle to a dialect strategy
pub type SharedDialect = Arc<dyn RdbmsSpecifics>;

/// SQL-fragment formatting rules for one database vendor
///
/// Only `name` is required. The default rendering covers ANSI literals;
/// vendors override the pieces that differ.
pub trait RdbmsSpecifics: Send + Sync + Debug {
    /// Short vendor name, used in log output
    fn name(&self) -> &'static str;

    /// Render a bound parameter as a SQL literal
    fn format_parameter(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Text(s) => quote(s),
            Value::Boolean(b) => self.format_boolean(*b),
            Value::Bytes(bytes) => self.format_bytes(bytes),
            Value::Date(d) => self.format_date(d),
            Value::Timestamp(ts) => self.format_timestamp(ts),
        }
    }

    fn format_boolean(&self, value: bool) -> String {
        String::from(if value { "TRUE" } else { "FALSE" })
    }

    fn format_bytes(&self, bytes: &[u8]) -> String {
        format!("X'{}'", hex(bytes))
    }

    fn format_date(&self, date: &NaiveDate) -> String {
        format!("DATE '{}'", date.format(DATE_FORMAT))
    }

    fn format_timestamp(&self, ts: &NaiveDateTime) -> String {
        format!("TIMESTAMP '{}'", ts.format(TIMESTAMP_FORMAT))
    }
}

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Whether two handles point at the same strategy instance
pub fn same_dialect(a: &SharedDialect, b: &SharedDialect) -> bool {
    Arc::ptr_eq(a, b)
}

/// Single-quote a string literal, doubling embedded quotes
pub(crate) fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

pub(crate) fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

fn format_float(f: f64) -> String {
    if f.is_finite() {
        f.to_string()
    } else {
        quote(&Value::Float(f).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Ansi;

    impl RdbmsSpecifics for Ansi {
        fn name(&self) -> &'static str {
            "ansi"
        }
    }

    #[test]
    fn test_default_rendering() {
        let d = Ansi;
        assert_eq!(d.format_parameter(&Value::Null), "NULL");
        assert_eq!(d.format_parameter(&Value::from(42i64)), "42");
        assert_eq!(d.format_parameter(&Value::from(1.5)), "1.5");
        assert_eq!(d.format_parameter(&Value::from("O'Brien")), "'O''Brien'");
        assert_eq!(d.format_parameter(&Value::from(true)), "TRUE");
        assert_eq!(d.format_parameter(&Value::from(vec![0x0a, 0xff])), "X'0AFF'");
        assert_eq!(d.format_parameter(&Value::from(f64::NAN)), "'NaN'");
    }

    #[test]
    fn test_default_dates() {
        let d = Ansi;
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(d.format_parameter(&Value::from(date)), "DATE '2023-12-31'");
        let ts = date.and_hms_milli_opt(23, 59, 58, 7).unwrap();
        assert_eq!(
            d.format_parameter(&Value::from(ts)),
            "TIMESTAMP '2023-12-31 23:59:58.007'"
        );
    }

    #[test]
    fn test_same_dialect_is_identity() {
        let a: SharedDialect = Arc::new(Ansi);
        let b: SharedDialect = Arc::new(Ansi);
        assert!(same_dialect(&a, &a.clone()));
        assert!(!same_dialect(&a, &b));
    }
}
