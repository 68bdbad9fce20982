use pretty_assertions::assert_eq;
use radix::{Radix, RadixPath};

#[derive(Debug, Clone, PartialEq)]
struct Foo {
    s: String,
    i: u32,
}

fn foo(n: u32) -> Foo {
    Foo {
        s: format!("hey#{}", n),
        i: n,
    }
}

fn key_vals<T: Clone>(tree: &Radix<T>) -> Vec<(String, Option<T>)> {
    tree.unfold(|path, value| Some((path.join("."), value.cloned())))
}

fn expected(entries: &[(&str, Option<Foo>)]) -> Vec<(String, Option<Foo>)> {
    entries
        .iter()
        .map(|(path, value)| (path.to_string(), value.clone()))
        .collect()
}

#[test]
fn test_create_and_upsert() {
    let mut tree = Radix::new();

    tree.insert("a.$", foo(25));
    assert_eq!(
        key_vals(&tree),
        expected(&[("", None), ("a", None), ("a.$", Some(foo(25)))])
    );

    tree.insert("a.$.12._$.b", foo(26));
    assert_eq!(
        key_vals(&tree),
        expected(&[
            ("", None),
            ("a", None),
            ("a.$", Some(foo(25))),
            ("a.$.12", None),
            ("a.$.12._$", None),
            ("a.$.12._$.b", Some(foo(26))),
        ])
    );

    tree.upsert("a.$.12._$.b", |prev| if prev.is_some() { foo(20) } else { foo(21) });
    tree.upsert("a.$.12._$.q", |prev| if prev.is_some() { foo(20) } else { foo(21) });

    assert_eq!(
        key_vals(&tree),
        expected(&[
            ("", None),
            ("a", None),
            ("a.$", Some(foo(25))),
            ("a.$.12", None),
            ("a.$.12._$", None),
            ("a.$.12._$.b", Some(foo(20))),
            ("a.$.12._$.q", Some(foo(21))),
        ])
    );
}

#[test]
fn test_unfold_all_paths() {
    let mut tree = Radix::new();
    tree.insert("a.b", Foo { s: "ab-val".into(), i: 123 });
    tree.insert("d.e.f", Foo { s: "def-val".into(), i: 345 });

    let unfolded = tree.unfold(|path, value| Some((path.join(""), value.is_some())));
    assert_eq!(
        unfolded,
        vec![
            ("".to_string(), false),
            ("a".to_string(), false),
            ("ab".to_string(), true),
            ("d".to_string(), false),
            ("de".to_string(), false),
            ("def".to_string(), true),
        ]
    );
}

#[test]
fn test_string_and_segment_paths_address_the_same_node() {
    let mut tree = Radix::new();
    tree.insert(vec!["x", " y ", ""], 1);
    assert_eq!(tree.get("x.y"), Some(&1));
    assert_eq!(tree.get(["x", "y"]), Some(&1));
    assert_eq!(tree.get(RadixPath::from_segments(["x", "y"])), Some(&1));
}

#[test]
fn test_get_of_branch_point_is_none() {
    let mut tree = Radix::new();
    tree.insert("a.b.c", 'c');
    assert_eq!(tree.get("a"), None);
    assert_eq!(tree.get("a.b"), None);
    assert!(!tree.contains("a.b"));
    assert!(tree.contains("a.b.c"));
    assert_eq!(tree.get("nope"), None);
}

#[test]
fn test_children_keep_creation_order() {
    let mut tree = Radix::new();
    for name in ["zeta", "alpha", "mu", "alpha"] {
        tree.upsert(name, |prior: Option<u32>| prior.unwrap_or(0) + 1);
    }

    let names: Vec<_> = tree.root().children().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mu"]);
    assert_eq!(tree.get("alpha"), Some(&2));
}

#[test]
fn test_traverse_counts_children_not_values() {
    let mut tree = Radix::new();
    tree.insert("a", 0);
    tree.insert("a.b", 1);
    tree.insert("a.c", 2);

    let mut counts = Vec::new();
    tree.traverse_depth_first(|path, _, child_count| counts.push((path.to_string(), child_count)));
    assert_eq!(
        counts,
        vec![
            ("".to_string(), 1),
            ("a".to_string(), 2),
            ("a.b".to_string(), 0),
            ("a.c".to_string(), 0),
        ]
    );
}
