use relalg::prelude::*;

fn posts() -> Relation {
    Relation::new("posts")
        .with_dialect(Dialect::Postgres)
        .scope(Scope::new("published", |t| t.col("published").eq(true)))
        .scope(Scope::sql("tenant", "tenant_id = ?", [9]))
}

#[test]
fn scopes_lead_every_filtered_statement() {
    let posts = posts();

    let select = posts
        .filter(posts.col("author_id").eq(7))
        .compile()
        .unwrap();
    assert_eq!(
        select.sql,
        "SELECT \"posts\".* FROM \"posts\" \
         WHERE (\"posts\".\"published\"=$1) AND (tenant_id = $2) AND (\"posts\".\"author_id\"=$3)"
    );
    assert_eq!(select.args, vec![Value::Bool(true), Value::Int(9), Value::Int(7)]);

    let update = posts.set(["title"]).to(["new"]).compile().unwrap();
    assert_eq!(
        update.sql,
        "UPDATE \"posts\" SET \"title\"=$1 WHERE (\"posts\".\"published\"=$2) AND (tenant_id = $3)"
    );

    let delete = posts.delete("id = 1").compile().unwrap();
    assert_eq!(
        delete.sql,
        "DELETE FROM \"posts\" WHERE (\"posts\".\"published\"=$1) AND (tenant_id = $2) AND (id = 1)"
    );
}

#[test]
fn inserts_ignore_scopes() {
    let out = posts().insertion().set("title", "hello").compile().unwrap();
    assert_eq!(out.sql, "INSERT INTO \"posts\" (\"title\") VALUES ($1)");
    assert_eq!(out.args, vec![Value::from("hello")]);
}

#[test]
fn count_keeps_scopes() {
    let out = posts().count_all().compile().unwrap();
    assert_eq!(
        out.sql,
        "SELECT COUNT(*) FROM \"posts\" WHERE (\"posts\".\"published\"=$1) AND (tenant_id = $2)"
    );
}

#[test]
fn scopes_follow_an_aliased_relation() {
    let p = posts().alias("p");
    let sql = p.select(["id"]).to_sql();
    assert_eq!(
        sql,
        "SELECT \"p\".\"id\" FROM \"posts\" AS \"p\" \
         WHERE (\"p\".\"published\"=$1) AND (tenant_id = $2)"
    );
}

#[test]
fn converted_managers_keep_scopes() {
    let sel = posts().filter("draft = false");
    let del = sel.as_deletion();
    assert_eq!(
        del.to_sql(),
        "DELETE FROM \"posts\" WHERE (\"posts\".\"published\"=$1) AND (tenant_id = $2) AND (draft = false)"
    );
    // The source selection is unaffected by the conversion.
    assert_eq!(
        sel.to_sql(),
        "SELECT \"posts\".* FROM \"posts\" \
         WHERE (\"posts\".\"published\"=$1) AND (tenant_id = $2) AND (draft = false)"
    );
}

#[test]
fn relation_scopes_are_inspectable() {
    let names: Vec<_> = posts().scopes().iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names, ["published", "tenant"]);
}
