use pretty_assertions::assert_eq;
use radix::{FoldArgs, Radix, RadixPath};

fn describe<T>(path: &RadixPath, args: FoldArgs<&T, String>) -> String {
    let data = if args.node_data.is_some() { "!" } else { "" };
    let children = if args.child_results.is_empty() {
        String::new()
    } else {
        format!("({})", args.child_results.join(", "))
    };
    let name = if path.is_root() {
        "root= ".to_string()
    } else {
        path.join("/")
    };
    format!("{}#{}{}{}", name, args.index, data, children)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample() -> Radix<&'static str> {
    let mut tree = Radix::new();
    tree.insert("a", "A");
    tree.insert("a.b.c", "B");
    tree.insert("a.d.e", "C");
    tree
}

#[test]
fn test_fold_up_exact_rendering() {
    init_logging();
    let folded = sample().fold_up(describe);
    insta::assert_snapshot!(folded, @"root= #5(a#4!(a/b/c#2!, a/b#3(a/d#1(a/d/e#0!))))");
}

fn collect_names(_path: &RadixPath, args: FoldArgs<&&str, Vec<String>>) -> Vec<String> {
    let mut names: Vec<String> = args.child_results.into_iter().flatten().collect();
    if let Some(name) = args.node_data {
        names.push(name.to_string());
    }
    names
}

#[test]
fn test_fold_up_sibling_results_are_reversed() {
    init_logging();
    let mut tree = Radix::new();
    for name in ["first", "second", "third"] {
        tree.insert(RadixPath::from(["x", name]), name);
    }

    let folded = tree.fold_up(collect_names);
    assert_eq!(folded, vec!["third", "second", "first"]);
}

#[test]
fn test_fold_subtrees_rendering() {
    init_logging();
    let folded = sample().fold_subtrees(describe);
    assert_eq!(
        folded,
        "root= #5(a#4!(a/d#1(a/d/e#0!), a/b#3(a/b/c#2!)))"
    );
}

#[test]
fn test_every_node_combined_after_its_subtree() {
    init_logging();
    let mut tree = Radix::new();
    for path in ["a.b.c", "a.b.d", "a.e", "f", "f.g.h.i", "a.b"] {
        tree.insert(path, ());
    }

    let mut order: Vec<RadixPath> = Vec::new();
    tree.fold_up(|path, _| order.push(path.clone()));

    assert_eq!(order.len(), tree.node_count());
    for (i, path) in order.iter().enumerate() {
        for later in &order[i + 1..] {
            let is_descendant_of_earlier =
                later.depth() > path.depth() && later.segments().starts_with(path.segments());
            assert!(
                !is_descendant_of_earlier,
                "{} combined after its ancestor {}",
                later,
                path
            );
        }
    }
    assert_eq!(order.last().map(|p| p.is_root()), Some(true));
}
