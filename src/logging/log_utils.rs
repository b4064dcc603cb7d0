use crate::core::Value;
use crate::dialect::RdbmsSpecifics;
use crate::facade::Configuration;
use std::backtrace::Backtrace;
use std::fmt::Write;
use std::time::Duration;

/// Stack-trace suffix for a log line, empty unless `printStackTrace` is on
pub fn stack_trace(config: &Configuration) -> String {
    if !config.print_stack_trace() {
        return String::new();
    }
    format!("\n{}", Backtrace::force_capture())
}

/// Replace `?` placeholders with rendered parameters, in order
///
/// Placeholders inside single-quoted literals or double-quoted identifiers
/// are left alone, as are placeholders beyond the last parameter. Comments
/// are not recognized: a `?` inside `--` or `/* */` is still replaced.
pub fn inline_parameters(sql: &str, params: &[Value], dialect: &dyn RdbmsSpecifics) -> String {
    let mut out = String::with_capacity(sql.len() + params.len() * 8);
    let mut params = params.iter();
    let mut quote: Option<char> = None;

    for c in sql.chars() {
        match (c, quote) {
            ('\'' | '"', None) => quote = Some(c),
            (_, Some(open)) if c == open => quote = None,
            ('?', None) => {
                if let Some(value) = params.next() {
                    out.push_str(&dialect.format_parameter(value));
                    continue;
                }
            }
            _ => {}
        }
        out.push(c);
    }
    out
}

/// `{1=a, 2=b}` listing of bound parameters
pub fn format_parameters(params: &[Value], dialect: &dyn RdbmsSpecifics) -> String {
    let mut out = String::from("{");
    for (i, value) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}={}", i + 1, dialect.format_parameter(value));
    }
    out.push('}');
    out
}

/// `{a, b}` rendering of one result-set row
pub fn format_row(values: &[Value], dialect: &dyn RdbmsSpecifics) -> String {
    let rendered: Vec<String> = values.iter().map(|v| dialect.format_parameter(v)).collect();
    format!("{{{}}}", rendered.join(", "))
}

/// Build the log line for one statement execution
///
/// With `logText` on, parameters are inlined into the statement text;
/// otherwise the raw text is followed by a parameter listing.
pub fn create_log_entry(
    method: &str,
    sql: &str,
    params: &[Value],
    config: &Configuration,
) -> String {
    let dialect = config.rdbms_specifics();
    let mut entry = format!("{} ", method);

    if config.log_text() {
        entry.push_str(&inline_parameters(sql, params, dialect.as_ref()));
    } else {
        entry.push_str(sql);
        if !params.is_empty() {
            entry.push_str(" parameters: ");
            entry.push_str(&format_parameters(params, dialect.as_ref()));
        }
    }
    entry
}

/// Append `" <ms> ms."` when `showTime` is on
pub fn append_elapsed(mut entry: String, elapsed: Duration, config: &Configuration) -> String {
    if config.show_time() {
        let _ = write!(entry, " {} ms.", elapsed.as_millis());
    }
    entry
}
