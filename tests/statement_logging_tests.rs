/// Statement logging tests
///
/// Log entries built with the active dialect, and the slow-query routing.
/// Run with: cargo test --test statement_logging_tests
use chrono::NaiveDate;
use jdbcdslog::logging::log_utils;
use jdbcdslog::{Configuration, Properties, StatementTimer, Value};
use std::time::Duration;

fn config(text: &str) -> Configuration {
    Configuration::from_properties(&Properties::parse(text))
}

#[test]
fn test_entry_follows_active_dialect() {
    let config = config("jdbcdslog.logText=true\n");
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let sql = "select * from orders where placed = ?";

    let oracle = log_utils::create_log_entry("executeQuery", sql, &[Value::from(day)], &config);
    assert_eq!(
        oracle,
        "executeQuery select * from orders where placed = to_date('2024-05-01', 'yyyy-mm-dd')"
    );

    config.reload_rdbms_specifics_from_connection("com.mysql.cj.jdbc.Driver");
    let mysql = log_utils::create_log_entry("executeQuery", sql, &[Value::from(day)], &config);
    assert_eq!(mysql, "executeQuery select * from orders where placed = '2024-05-01'");
}

#[test]
fn test_toggling_log_text_changes_entry_shape() {
    let config = config("");
    let params = [Value::from("bob"), Value::from(3i64)];
    let sql = "update users set name = ? where id = ?";

    assert_eq!(
        log_utils::create_log_entry("executeUpdate", sql, &params, &config),
        "executeUpdate update users set name = ? where id = ? parameters: {1='bob', 2=3}"
    );

    config.set_log_text(true);
    assert_eq!(
        log_utils::create_log_entry("executeUpdate", sql, &params, &config),
        "executeUpdate update users set name = 'bob' where id = 3"
    );
}

#[test]
fn test_no_parameters_no_listing() {
    let config = config("");
    assert_eq!(
        log_utils::create_log_entry("execute", "commit", &[], &config),
        "execute commit"
    );
}

#[test]
fn test_timer_with_threshold() {
    let config = config("jdbcdslog.slowQueryThreshold=1\njdbcdslog.showTime=true\n");
    let timer = StatementTimer::start(&config);
    std::thread::sleep(Duration::from_millis(5));
    let elapsed = timer.finish("execute select 1".to_string());

    assert!(config.is_slow(elapsed));
}
