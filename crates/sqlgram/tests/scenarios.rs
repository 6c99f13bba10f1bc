//! End-to-end statement building over a small blog schema.

use sqlgram::prelude::*;
use sqlgram::select;

fn schema() -> Meta {
    let mut meta = Meta::new();
    meta.add_table("users").add_column("id").add_column("name");
    meta.add_table("articles")
        .add_column("id")
        .add_column("author")
        .add_column("title");
    meta
}

#[test]
fn select_whole_table() {
    let meta = schema();
    let users = meta.t("users").unwrap();

    let (sql, params) = select([users]).to_sql_args();
    assert_eq!(sql, "SELECT users.id, users.name FROM users");
    assert!(params.is_empty());
}

#[test]
fn select_with_equality_filter() {
    let meta = schema();
    let users = meta.t("users").unwrap();

    let (sql, params) = select([users])
        .where_(equal(users.c("name").unwrap(), "foo"))
        .to_sql_args();
    assert_eq!(
        sql,
        "SELECT users.id, users.name FROM users WHERE users.name = ?"
    );
    assert_eq!(params, vec![Value::from("foo")]);
}

#[test]
fn select_with_disjunction() {
    let meta = schema();
    let users = meta.t("users").unwrap();
    let name = users.c("name").unwrap();

    let (sql, params) = select([users])
        .where_(or(equal(name, "foo"), equal(name, "bar")))
        .to_sql_args();
    assert_eq!(
        sql,
        "SELECT users.id, users.name FROM users WHERE (users.name = ? OR users.name = ?)"
    );
    assert_eq!(params, vec![Value::from("foo"), Value::from("bar")]);
}

#[test]
fn join_group_order_limit() {
    let meta = schema();
    let users = meta.t("users").unwrap();
    let articles = meta.t("articles").unwrap();

    let (sql, params) = select![
        articles.c("id").unwrap(),
        users.c("name").unwrap().alias("author"),
    ]
    .join(
        articles,
        equal(users.c("id").unwrap(), articles.c("author").unwrap()),
    )
    .where_(equal(users.c("name").unwrap(), "foo"))
    .group_by([users.c("name").unwrap()])
    .order_by([users.c("name").unwrap().desc()])
    .limit(10)
    .to_sql_args();

    assert_eq!(
        sql,
        "SELECT articles.id, users.name AS author FROM users JOIN articles ON users.id = articles.author \
         WHERE users.name = ? GROUP BY users.name ORDER BY users.name DESC LIMIT ?"
    );
    assert_eq!(params, vec![Value::from("foo"), Value::UInt(10)]);
}

#[test]
fn select_from_aliased_selection() {
    let meta = schema();
    let users = meta.t("users").unwrap();
    let u = select([users]).alias("u");

    let (sql, params) = select([&u]).to_sql_args();
    assert_eq!(
        sql,
        "SELECT u.id, u.name FROM (SELECT users.id, users.name FROM users) AS u"
    );
    assert!(params.is_empty());
}

#[test]
fn insert_single_column() {
    let meta = schema();
    let users = meta.t("users").unwrap();

    let (sql, params) = insert(users, values! { "id" => 1 })
        .unwrap()
        .to_sql_args();
    assert_eq!(sql, "INSERT INTO users (id) VALUES (?)");
    assert_eq!(params, vec![Value::Int(1)]);

    let err = insert(users, values! { "unknown" => 1 }).unwrap_err();
    assert!(matches!(err, BuildError::UnknownColumn { .. }));
}

#[test]
fn postgres_equality_filter() {
    let meta = schema();
    let users = meta.t("users").unwrap();

    let (sql, params) = Builder::new()
        .with_dialect(Dialect::PostgreSql)
        .string_args(&select([users]).where_(equal(users.c("name").unwrap(), "foo")));
    assert_eq!(
        sql,
        "SELECT users.id, users.name FROM users WHERE users.name = $1"
    );
    assert_eq!(params, vec![Value::from("foo")]);
}

#[test]
fn articles_per_author_report() {
    let meta = schema();
    let users = meta.t("users").unwrap();
    let articles = meta.t("articles").unwrap();

    let per_author = select![articles.c("author").unwrap(), count!().alias("total")]
        .group_by([articles.c("author").unwrap()])
        .alias("per_author");

    let (sql, params) = Builder::new()
        .with_dialect(Dialect::PostgreSql)
        .with_separate_clause_with("\n")
        .string_args(
            &select![users.c("name").unwrap(), per_author.c("total").unwrap()]
                .join(
                    &per_author,
                    equal(per_author.c("author").unwrap(), users.c("id").unwrap()),
                )
                .where_(greater_than(per_author.c("total").unwrap(), 3))
                .order_by([per_author.c("total").unwrap().desc()])
                .limit(5),
        );

    assert_eq!(
        sql,
        "SELECT users.name, per_author.total\n\
         FROM users JOIN (SELECT articles.author, COUNT(*) AS total\n\
         FROM articles\n\
         GROUP BY articles.author) AS per_author ON per_author.author = users.id\n\
         WHERE per_author.total > $1\n\
         ORDER BY per_author.total DESC\n\
         LIMIT $2"
    );
    assert_eq!(params, vec![Value::Int(3), Value::UInt(5)]);
}

#[test]
fn update_and_delete_by_id() {
    let meta = schema();
    let articles = meta.t("articles").unwrap();
    let id = articles.c("id").unwrap();

    let (sql, params) = update(articles, values! { "title" => "Hello", "author" => 2 })
        .unwrap()
        .where_(equal(id, 7))
        .to_sql_args();
    assert_eq!(
        sql,
        "UPDATE articles SET author = ?, title = ? WHERE articles.id = ?"
    );
    assert_eq!(
        params,
        vec![Value::Int(2), Value::from("Hello"), Value::Int(7)]
    );

    let (sql, params) = delete(articles)
        .unwrap()
        .where_(in_list(id, [1, 2]))
        .to_sql_args();
    assert_eq!(sql, "DELETE FROM articles WHERE articles.id IN (?, ?)");
    assert_eq!(params.len(), 2);
}

#[test]
fn case_insensitive_lookup() {
    let meta = schema();
    let users = meta.t("USERS").unwrap();
    assert_eq!(users.name(), "users");
    assert_eq!(users.c("Name").unwrap().name(), "name");
}
