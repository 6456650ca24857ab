use super::*;
use crate::value::Value;

#[test]
fn test_table_reference_name() {
    let t = Table::new("users");
    assert_eq!(t.reference_name(), "users");
    let t = t.alias("u");
    assert_eq!(t.reference_name(), "u");
    assert_eq!(t.name, "users");
}

#[test]
fn test_table_col_and_star() {
    let t = Table::new("users").alias("u");
    match t.col("id") {
        Node::Attribute { name, table } => {
            assert!(matches!(*name, Node::Column(ref c) if c == "id"));
            assert_eq!(table, t);
        }
        other => panic!("expected Attribute, got {}", other.kind_name()),
    }
    assert!(matches!(
        t.star(),
        Node::Attribute { name, .. } if matches!(*name, Node::Star)
    ));
}

#[test]
fn test_function_flags() {
    let f = Function::count(Node::column("id")).distinct().alias("n");
    assert_eq!(f.name, "COUNT");
    assert!(f.distinct);
    assert_eq!(f.alias.as_deref(), Some("n"));
    assert_eq!(f.args.as_ref().map(Vec::len), Some(1));

    assert!(Function::count_all().args.is_none());
    let f = Function::coalesce([Node::column("a"), Node::value(0)]);
    assert_eq!(f.args.map(|a| a.len()), Some(2));
}

#[test]
fn test_literal_bind_and_expansion_count() {
    let lit = Literal::new("a = ? AND b IN(?...)").bind(1).bind("x");
    assert_eq!(lit.args, vec![Value::Int(1), Value::Text("x".into())]);
    assert_eq!(lit.expansion_count(), 1);
    assert_eq!(Literal::from("?... ?...").expansion_count(), 2);
    assert_eq!(Literal::new("no tokens").expansion_count(), 0);
}

#[test]
fn test_and_or_are_grouped() {
    let a = Node::column("a").eq(1);
    let b = Node::column("b").eq(2);
    let node = a.and(b);
    match node {
        Node::Grouping(inner) => assert!(matches!(*inner, Node::And(_))),
        other => panic!("expected Grouping, got {}", other.kind_name()),
    }

    let node = Node::column("a").eq(1).or(Node::column("b").eq(2));
    assert!(matches!(node, Node::Grouping(ref inner) if matches!(**inner, Node::Or(_))));
}

#[test]
fn test_null_helpers() {
    let node = Node::column("deleted_at").is_null();
    match node {
        Node::Equal(b) => assert!(b.right.is_null_value()),
        other => panic!("expected Equal, got {}", other.kind_name()),
    }
    assert!(matches!(
        Node::column("x").is_not_null(),
        Node::NotEqual(ref b) if b.right.is_null_value()
    ));
    assert!(Node::from(None::<i32>).is_null_value());
    assert!(!Node::value(0).is_null_value());
}

#[test]
fn test_is_in_builds_list() {
    match Node::column("id").is_in([1, 2, 3]) {
        Node::In(b) => assert!(matches!(*b.right, Node::List(ref items) if items.len() == 3)),
        other => panic!("expected In, got {}", other.kind_name()),
    }
}

#[test]
fn test_into_expr_and_into_column() {
    assert!(matches!("a = 1".into_expr(), Node::Literal(ref l) if l.sql == "a = 1"));
    assert!(matches!("name".into_column(), Node::Column(ref c) if c == "name"));
    assert!(matches!(
        String::from("name").into_column(),
        Node::Column(_)
    ));
    assert!(matches!(Function::count_all().into_expr(), Node::Function(_)));
    assert!(matches!(Node::Star.into_column(), Node::Star));
}

#[test]
fn test_scalars_become_values() {
    assert!(matches!(Node::from(1), Node::Value(Value::Int(1))));
    assert!(matches!(Node::from("x"), Node::Value(Value::Text(_))));
    assert!(matches!(Node::from(true), Node::Value(Value::Bool(true))));
}

#[test]
fn test_combine_attaches_to_chain_tail() {
    let mut a = SelectStatement::new("a");
    a.combine(SetOperator::Union, SelectStatement::new("b"));
    a.combine(SetOperator::Except, SelectStatement::new("c"));

    let first = a.combinator.as_ref().unwrap();
    assert_eq!(first.operator, SetOperator::Union);
    assert_eq!(first.right.table().name, "b");

    let second = first.right.combinator.as_ref().unwrap();
    assert_eq!(second.operator, SetOperator::Except);
    assert_eq!(second.right.table().name, "c");
    assert!(second.right.combinator.is_none());
}

#[test]
fn test_last_join_mut() {
    let mut source = JoinSource::new("users");
    assert!(source.last_join_mut().is_none());

    source.right.push(Node::inner_join("posts", None));
    source.right.push(Node::outer_join("tags", None));
    let join = source.last_join_mut().unwrap();
    assert_eq!(join.table.name, "tags");
    join.on = Some(Box::new(Node::on(Node::sql("tags.id = posts.tag_id"))));

    assert!(matches!(
        source.right.last(),
        Some(Node::OuterJoin(j)) if j.on.is_some()
    ));
}

#[test]
fn test_set_operator_keywords() {
    assert_eq!(SetOperator::Union.keyword(), "UNION");
    assert_eq!(SetOperator::Intersect.keyword(), "INTERSECT");
    assert_eq!(SetOperator::Except.keyword(), "EXCEPT");
}

#[test]
fn test_kind_names() {
    assert_eq!(Node::Star.kind_name(), "Star");
    assert_eq!(Node::sql("1").kind_name(), "Literal");
    assert_eq!(Node::from(SelectStatement::new("t")).kind_name(), "Select");
    assert_eq!(Node::from(DeleteStatement::new("t")).kind_name(), "Delete");
}
