use relalg::prelude::*;

fn users() -> Table {
    Table::new("users")
}

fn search(dialect: Dialect) -> Selection {
    let u = users();
    Selection::new(u.clone())
        .with_dialect(dialect)
        .project_all([u.col("id"), u.col("name")])
        .filter(u.col("name").like("al%"))
        .filter(u.col("role").is_in(["admin", "owner"]))
        .filter(Node::literal("created_at > ?", ["2024-01-01"]))
        .order(u.col("id").desc())
        .limit(20)
        .offset(40)
}

#[test]
fn generic_select() {
    let out = search(Dialect::Generic).compile().unwrap();
    assert_eq!(
        out.sql,
        "SELECT \"users\".\"id\",\"users\".\"name\" FROM \"users\" \
         WHERE (\"users\".\"name\" LIKE ?) AND (\"users\".\"role\" IN(?,?)) AND (created_at > ?) \
         ORDER BY \"users\".\"id\" DESC LIMIT ? OFFSET ?"
    );
    assert_eq!(out.args.len(), 6);
}

#[test]
fn mysql_select() {
    let out = search(Dialect::MySql).compile().unwrap();
    assert_eq!(
        out.sql,
        "SELECT `users`.`id`,`users`.`name` FROM `users` \
         WHERE (`users`.`name` LIKE ?) AND (`users`.`role` IN(?,?)) AND (created_at > ?) \
         ORDER BY `users`.`id` DESC LIMIT ? OFFSET ?"
    );
}

#[test]
fn postgres_select() {
    let out = search(Dialect::Postgres).compile().unwrap();
    assert_eq!(
        out.sql,
        "SELECT \"users\".\"id\",\"users\".\"name\" FROM \"users\" \
         WHERE (\"users\".\"name\" ILIKE $1) AND (\"users\".\"role\" IN($2,$3)) AND (created_at > $4) \
         ORDER BY \"users\".\"id\" DESC LIMIT $5 OFFSET $6"
    );
    assert_eq!(
        out.args,
        vec![
            Value::from("al%"),
            Value::from("admin"),
            Value::from("owner"),
            Value::from("2024-01-01"),
            Value::from(20),
            Value::from(40),
        ]
    );
}

#[test]
fn placeholder_count_matches_args_in_every_dialect() {
    for dialect in [Dialect::Generic, Dialect::MySql, Dialect::Postgres] {
        let out = search(dialect).compile().unwrap();
        let placeholders = match dialect {
            Dialect::Postgres => out.sql.matches('$').count(),
            _ => out.sql.matches('?').count(),
        };
        assert_eq!(placeholders, out.args.len(), "dialect {dialect}");
    }
}

#[test]
fn expansion_token_under_postgres() {
    let out = Selection::new("users")
        .with_dialect(Dialect::Postgres)
        .filter_sql("status = ? AND id IN(?...)", ["active", "1", "2", "3"])
        .compile()
        .unwrap();
    assert_eq!(
        out.sql,
        "SELECT \"users\".* FROM \"users\" WHERE (status = $1 AND id IN($2,$3,$4))"
    );
    assert_eq!(out.args.len(), 4);
}

#[test]
fn empty_insert_per_dialect() {
    assert_eq!(
        Insertion::new("logs").to_sql(),
        "INSERT INTO \"logs\" DEFAULT VALUES"
    );
    assert_eq!(
        Insertion::new("logs").with_dialect(Dialect::MySql).to_sql(),
        "INSERT INTO `logs` () VALUES ()"
    );
}

#[test]
fn config_from_toml_drives_compile() {
    let config = CompileConfig::from_toml_str("dialect = \"postgresql\"\ndebug = true\n").unwrap();
    let stmt = SelectStatement::new(users()).filter(users().col("id").eq(7));
    let out = compile(&stmt.into(), &config).unwrap();
    assert_eq!(out.sql, "SELECT * FROM \"users\" WHERE \"users\".\"id\"=$1");
    assert_eq!(out.args, vec![Value::Int(7)]);
}

#[test]
fn failure_keeps_partial_sql() {
    let failure = Selection::new("users")
        .filter(Node::column("bad name").eq(1))
        .compile()
        .unwrap_err();
    assert!(failure.error().is_invalid_identifier());
    assert_eq!(
        failure.partial_sql(),
        "SELECT \"users\".* FROM \"users\" WHERE (-- ERROR --"
    );
    assert_eq!(failure.to_string(), "invalid column name: 'bad name'");
}

#[cfg(feature = "postgres")]
#[test]
fn params_ref_matches_args() {
    let out = search(Dialect::Postgres).compile().unwrap();
    assert_eq!(out.params_ref().len(), out.args.len());
}
