//! Tests for the expression constructors.

use super::*;
use crate::coerce::Operand;
use crate::grammar::{CharLengthUnits, SetFunctionType, TrimSpecification};
use crate::meta::Table;
use crate::render::{AsStatement, Builder, Dialect};
use crate::stmt::select;
use crate::value::Value;

fn users() -> Table {
    let mut t = Table::new("users");
    t.add_column("id").add_column("name").add_column("active");
    t
}

fn articles() -> Table {
    let mut t = Table::new("articles");
    t.add_column("id").add_column("author").add_column("title");
    t
}

/// Render `condition` as the WHERE clause of a query over `users`.
fn where_sql(condition: impl Into<Operand>) -> (String, Vec<Value>) {
    let users = users();
    let (sql, params) = select([users.c("id").unwrap()])
        .where_(condition)
        .to_sql_args();
    let condition = sql
        .strip_prefix("SELECT users.id FROM users WHERE ")
        .unwrap_or(&sql)
        .to_string();
    (condition, params)
}

/// Render `item` as the only select list entry, returning the whole statement.
fn select_sql(item: impl Into<Operand>, dialect: Dialect) -> (String, Vec<Value>) {
    Builder::new()
        .with_dialect(dialect)
        .string_args(&select([item.into()]))
}

// ==================== Predicates ====================

#[test]
fn test_comparisons() {
    let users = users();
    let id = users.c("id").unwrap();

    let cases = [
        (equal(id, 1), "users.id = ?"),
        (not_equal(id, 1), "users.id <> ?"),
        (less_than(id, 1), "users.id < ?"),
        (less_than_or_equal(id, 1), "users.id <= ?"),
        (greater_than(id, 1), "users.id > ?"),
        (greater_than_or_equal(id, 1), "users.id >= ?"),
    ];
    for (predicate, expected) in cases {
        let (sql, params) = where_sql(predicate);
        assert_eq!(sql, expected);
        assert_eq!(params, vec![Value::Int(1)]);
    }
}

#[test]
fn test_comparison_between_columns_binds_nothing() {
    let users = users();
    let (sql, params) = where_sql(equal(users.c("id").unwrap(), users.c("name").unwrap()));
    assert_eq!(sql, "users.id = users.name");
    assert!(params.is_empty());
}

#[test]
fn test_between() {
    let users = users();
    let id = users.c("id").unwrap();

    let (sql, params) = where_sql(between(id, 1, 10));
    assert_eq!(sql, "users.id BETWEEN ? AND ?");
    assert_eq!(params, vec![Value::Int(1), Value::Int(10)]);

    let (sql, _) = where_sql(not_between(id, 1, 10));
    assert_eq!(sql, "users.id NOT BETWEEN ? AND ?");
}

#[test]
fn test_in_list() {
    let users = users();
    let id = users.c("id").unwrap();

    let (sql, params) = where_sql(in_list(id, [1, 2, 3]));
    assert_eq!(sql, "users.id IN (?, ?, ?)");
    assert_eq!(params, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

    let (sql, _) = where_sql(not_in_list(id, [1, 2]));
    assert_eq!(sql, "users.id NOT IN (?, ?)");
}

#[test]
fn test_in_list_negative_values() {
    let users = users();
    let id = users.c("id").unwrap();

    let (sql, params) = where_sql(in_list(id, [-1, 2]));
    assert_eq!(sql, "users.id IN (-?, ?)");
    assert_eq!(params, vec![Value::UInt(1), Value::Int(2)]);

    let (sql, params) = where_sql(not_in_list(id, [-2.5]));
    assert_eq!(sql, "users.id NOT IN (-?)");
    assert_eq!(params, vec![Value::Float(2.5)]);
}

#[test]
fn test_empty_in_list_is_constant() {
    let users = users();
    let id = users.c("id").unwrap();

    let (sql, params) = where_sql(in_list(id, Vec::<i64>::new()));
    assert_eq!(sql, "1=0");
    assert!(params.is_empty());

    let (sql, _) = where_sql(not_in_list(id, Vec::<i64>::new()));
    assert_eq!(sql, "1=1");
}

#[test]
fn test_in_subquery() {
    let users = users();
    let articles = articles();
    let authors = select([articles.c("author").unwrap()]).where_(equal(
        articles.c("title").unwrap(),
        "rust",
    ));

    let (sql, params) = where_sql(in_subquery(users.c("id").unwrap(), authors.clone()));
    assert_eq!(
        sql,
        "users.id IN (SELECT articles.author FROM articles WHERE articles.title = ?)"
    );
    assert_eq!(params, vec![Value::from("rust")]);

    let (sql, _) = where_sql(not_in_subquery(users.c("id").unwrap(), authors));
    assert!(sql.starts_with("users.id NOT IN (SELECT"));
}

#[test]
fn test_null_tests() {
    let users = users();
    let name = users.c("name").unwrap();
    assert_eq!(where_sql(is_null(name)).0, "users.name IS NULL");
    assert_eq!(where_sql(is_not_null(name)).0, "users.name IS NOT NULL");
}

#[test]
fn test_like() {
    let users = users();
    let name = users.c("name").unwrap();

    let (sql, params) = where_sql(like(name, "a%"));
    assert_eq!(sql, "users.name LIKE ?");
    assert_eq!(params, vec![Value::from("a%")]);

    assert_eq!(where_sql(not_like(name, "a%")).0, "users.name NOT LIKE ?");

    let (sql, params) = where_sql(like_escape(name, "100!%", "!"));
    assert_eq!(sql, "users.name LIKE ? ESCAPE ?");
    assert_eq!(params, vec![Value::from("100!%"), Value::from("!")]);
}

#[test]
fn test_like_over_string_function() {
    let users = users();
    let (sql, _) = where_sql(like(lower(users.c("name").unwrap()), "a%"));
    assert_eq!(sql, "LOWER(users.name) LIKE ?");
}

// ==================== Boolean connectives ====================

#[test]
fn test_and_or_are_parenthesized() {
    let users = users();
    let id = users.c("id").unwrap();
    let name = users.c("name").unwrap();

    let (sql, params) = where_sql(and(equal(id, 1), equal(name, "foo")));
    assert_eq!(sql, "(users.id = ? AND users.name = ?)");
    assert_eq!(params, vec![Value::Int(1), Value::from("foo")]);

    let (sql, _) = where_sql(or(equal(id, 1), equal(id, 2)));
    assert_eq!(sql, "(users.id = ? OR users.id = ?)");
}

#[test]
fn test_nested_connectives_keep_precedence() {
    let users = users();
    let id = users.c("id").unwrap();
    let name = users.c("name").unwrap();

    let (sql, params) = where_sql(and(or(equal(id, 1), equal(id, 2)), equal(name, "x")));
    assert_eq!(sql, "((users.id = ? OR users.id = ?) AND users.name = ?)");
    assert_eq!(params.len(), 3);

    let (sql, _) = where_sql(or(equal(id, 1), and(equal(id, 2), equal(name, "x"))));
    assert_eq!(sql, "(users.id = ? OR (users.id = ? AND users.name = ?))");
}

#[test]
fn test_not() {
    let users = users();
    let id = users.c("id").unwrap();

    assert_eq!(where_sql(not(equal(id, 1))).0, "NOT users.id = ?");
    assert_eq!(
        where_sql(not(or(equal(id, 1), equal(id, 2)))).0,
        "NOT (users.id = ? OR users.id = ?)"
    );
}

#[test]
fn test_truth_tests() {
    let users = users();
    let active = users.c("active").unwrap();
    assert_eq!(where_sql(is_true(active)).0, "users.active IS TRUE");
    assert_eq!(where_sql(is_false(active)).0, "users.active IS FALSE");
    assert_eq!(where_sql(is_unknown(active)).0, "users.active IS UNKNOWN");
}

#[test]
fn test_column_as_condition() {
    let users = users();
    assert_eq!(where_sql(users.c("active").unwrap()).0, "users.active");
}

#[test]
#[should_panic(expected = "equal: argument `left`")]
fn test_table_as_comparison_operand_panics() {
    let users = users();
    let _ = equal(&users, 1);
}

// ==================== Aggregates ====================

#[test]
fn test_count_forms() {
    let users = users();
    let id = users.c("id").unwrap();

    let (sql, _) = select_sql(count(id).alias("n"), Dialect::MySql);
    assert_eq!(sql, "SELECT COUNT(users.id) AS n FROM users");

    let (sql, _) = select_sql(count(id).distinct(), Dialect::MySql);
    assert_eq!(sql, "SELECT COUNT(DISTINCT users.id) FROM users");

    let (sql, _) = select_sql(count_star(), Dialect::MySql);
    assert_eq!(sql, "SELECT COUNT(*)");
}

#[test]
fn test_count_macro() {
    let users = users();
    assert_eq!(count!(), count_star());
    assert_eq!(count!(users.c("id").unwrap()), count(users.c("id").unwrap()));
}

#[test]
#[should_panic(expected = "count: expected at most 1 argument(s), got 2")]
fn test_count_macro_rejects_two_arguments() {
    let users = users();
    let _ = count!(users.c("id").unwrap(), users.c("name").unwrap());
}

#[test]
fn test_general_set_functions() {
    let users = users();
    let id = users.c("id").unwrap();
    let cases = [
        (avg(id), "AVG(users.id)"),
        (min(id), "MIN(users.id)"),
        (max(id), "MAX(users.id)"),
        (sum(id), "SUM(users.id)"),
        (every(users.c("active").unwrap()), "EVERY(users.active)"),
        (stddev_pop(id), "STDDEV_POP(users.id)"),
        (stddev_samp(id), "STDDEV_SAMP(users.id)"),
        (var_pop(id), "VAR_POP(users.id)"),
        (var_samp(id), "VAR_SAMP(users.id)"),
        (aggregate(SetFunctionType::Collect, id), "COLLECT(users.id)"),
    ];
    for (function, expected) in cases {
        let (sql, _) = select_sql(function, Dialect::MySql);
        assert_eq!(sql, format!("SELECT {expected} FROM users"));
    }
}

#[test]
fn test_distinct_has_no_effect_on_count_star() {
    assert_eq!(count_star().distinct(), count_star());
}

// ==================== String functions ====================

#[test]
fn test_substring() {
    let users = users();
    let name = users.c("name").unwrap();

    let (sql, params) = select_sql(substring(name, 2), Dialect::MySql);
    assert_eq!(sql, "SELECT SUBSTRING(users.name FROM ?) FROM users");
    assert_eq!(params, vec![Value::Int(2)]);

    let (sql, params) = select_sql(substring(name, 2).for_length(3), Dialect::PostgreSql);
    assert_eq!(sql, "SELECT SUBSTRING(users.name FROM $1 FOR $2) FROM users");
    assert_eq!(params, vec![Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_substring_units_only_for_unknown_dialect() {
    let users = users();
    let f = substring(users.c("name").unwrap(), 1)
        .for_length(2)
        .using(CharLengthUnits::Octets);

    let (sql, _) = select_sql(f.clone(), Dialect::Unknown);
    assert_eq!(
        sql,
        "SELECT SUBSTRING(users.name FROM ? FOR ? USING OCTETS) FROM users"
    );

    let (sql, _) = select_sql(f, Dialect::MySql);
    assert_eq!(sql, "SELECT SUBSTRING(users.name FROM ? FOR ?) FROM users");
}

#[test]
fn test_regex_substring() {
    let users = users();
    let (sql, params) = select_sql(
        regex_substring(users.c("name").unwrap(), "%#\"a#\"%", "#"),
        Dialect::Unknown,
    );
    assert_eq!(sql, "SELECT SUBSTRING(users.name SIMILAR ? ESCAPE ?) FROM users");
    assert_eq!(params.len(), 2);
}

#[test]
fn test_fold_with_alias() {
    let users = users();
    let name = users.c("name").unwrap();

    let (sql, _) = select_sql(upper(name).alias("shout"), Dialect::MySql);
    assert_eq!(sql, "SELECT UPPER(users.name) AS shout FROM users");

    let (sql, _) = select_sql(lower(name), Dialect::MySql);
    assert_eq!(sql, "SELECT LOWER(users.name) FROM users");
}

#[test]
fn test_convert_and_translate_inline_names() {
    let users = users();
    let name = users.c("name").unwrap();

    let (sql, params) = select_sql(convert(name, "utf8mb4"), Dialect::MySql);
    assert_eq!(sql, "SELECT CONVERT(users.name USING utf8mb4) FROM users");
    assert!(params.is_empty());

    let (sql, _) = select_sql(translate(name, "latin_to_ascii"), Dialect::Unknown);
    assert_eq!(sql, "SELECT TRANSLATE(users.name USING latin_to_ascii) FROM users");
}

#[test]
#[should_panic(expected = "invalid name")]
fn test_convert_rejects_invalid_name() {
    let users = users();
    let _ = convert(users.c("name").unwrap(), "utf8; DROP TABLE users");
}

#[test]
fn test_trim_per_dialect() {
    let users = users();
    let name = users.c("name").unwrap();

    let (sql, _) = select_sql(trim_space(name), Dialect::MySql);
    assert_eq!(sql, "SELECT TRIM(users.name) FROM users");

    let (sql, _) = select_sql(ltrim_space(name), Dialect::Sqlite);
    assert_eq!(sql, "SELECT LTRIM(users.name) FROM users");

    let (sql, _) = select_sql(rtrim_space(name), Dialect::TSql);
    assert_eq!(sql, "SELECT RTRIM(users.name) FROM users");

    let (sql, _) = select_sql(trim_space(name), Dialect::PostgreSql);
    assert_eq!(sql, "SELECT BTRIM(users.name) FROM users");

    let (sql, params) = select_sql(trim(name, "x", TrimSpecification::Both), Dialect::PostgreSql);
    assert_eq!(sql, "SELECT BTRIM(users.name, $1) FROM users");
    assert_eq!(params, vec![Value::from("x")]);

    let (sql, _) = select_sql(ltrim(name, "x"), Dialect::MySql);
    assert_eq!(sql, "SELECT TRIM(LEADING ? FROM users.name) FROM users");

    let (sql, _) = select_sql(rtrim(name, "x"), Dialect::PostgreSql);
    assert_eq!(sql, "SELECT TRIM(TRAILING $1 FROM users.name) FROM users");

    let (sql, _) = select_sql(trim_space(name), Dialect::Unknown);
    assert_eq!(sql, "SELECT TRIM(BOTH FROM users.name) FROM users");
}

// ==================== Numeric and datetime ====================

#[test]
fn test_arithmetic() {
    let users = users();
    let id = users.c("id").unwrap();

    let (sql, params) = select_sql(add(id, 1), Dialect::MySql);
    assert_eq!(sql, "SELECT users.id + ? FROM users");
    assert_eq!(params, vec![Value::Int(1)]);

    let (sql, _) = select_sql(sub(id, 1), Dialect::MySql);
    assert_eq!(sql, "SELECT users.id - ? FROM users");

    let (sql, _) = select_sql(div(id, 2), Dialect::MySql);
    assert_eq!(sql, "SELECT users.id / ? FROM users");
}

#[test]
fn test_arithmetic_precedence() {
    let users = users();
    let id = users.c("id").unwrap();

    let (sql, _) = select_sql(mul(add(id, 1), 2), Dialect::MySql);
    assert_eq!(sql, "SELECT (users.id + ?) * ? FROM users");

    let (sql, _) = select_sql(add(id, mul(2, 3)), Dialect::MySql);
    assert_eq!(sql, "SELECT users.id + ? * ? FROM users");
}

#[test]
fn test_negation() {
    let users = users();

    let (sql, _) = select_sql(neg(users.c("id").unwrap()), Dialect::MySql);
    assert_eq!(sql, "SELECT -users.id FROM users");

    let (sql, params) = select_sql(neg(-5), Dialect::MySql);
    assert_eq!(sql, "SELECT -(-?)");
    assert_eq!(params, vec![Value::UInt(5)]);
}

#[test]
fn test_negative_literal_parameter_is_unsigned() {
    let users = users();
    let (sql, params) = where_sql(greater_than(users.c("id").unwrap(), -3));
    assert_eq!(sql, "users.id > -?");
    assert_eq!(params, vec![Value::UInt(3)]);
}

#[test]
fn test_datetime_functions() {
    assert_eq!(select_sql(current_date(), Dialect::MySql).0, "SELECT CURRENT_DATE");
    assert_eq!(select_sql(current_time(), Dialect::MySql).0, "SELECT CURRENT_TIME");
    assert_eq!(
        select_sql(current_timestamp(), Dialect::MySql).0,
        "SELECT CURRENT_TIMESTAMP"
    );
}

#[test]
fn test_interval_wraps_value() {
    let (sql, params) = select_sql(interval("1 day"), Dialect::PostgreSql);
    assert_eq!(sql, "SELECT $1");
    assert_eq!(params, vec![Value::from("1 day")]);
}

#[test]
fn test_row_constructor() {
    let users = users();
    let pair = row([Operand::from(users.c("id").unwrap()), 1.into()]);
    let (sql, params) = select_sql(pair, Dialect::MySql);
    assert_eq!(sql, "SELECT (users.id, ?) FROM users");
    assert_eq!(params, vec![Value::Int(1)]);
}
