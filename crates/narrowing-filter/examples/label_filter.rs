use anyhow::{Context, Result};
use narrowing_filter::{render_term_summary, selected_items, DisplayTree, RenderedGroup};
use std::env;

#[derive(Debug, Clone)]
struct Label {
    path: &'static str,
    terms: Vec<&'static str>,
}

fn label(path: &'static str, terms: &[&'static str]) -> Label {
    Label {
        path,
        terms: terms.to_vec(),
    }
}

fn print_rows(rows: &[RenderedGroup<Vec<Label>>]) {
    for row in rows {
        println!("{:indent$}{}", "", row.rendered_item.text, indent = row.level * 2);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let labels = vec![
        label("interview.alice.intro", &["speaker:alice", "page:1", "topic:welcome"]),
        label("interview.alice.intro", &["speaker:alice", "page:11"]),
        label("interview.alice.career", &["speaker:alice", "page:12", "topic:rust"]),
        label("interview.bob", &["speaker:bob", "page:2", "topic:ruby"]),
        label("notes", &["page:0", "draft"]),
    ];
    let mut tree = DisplayTree::new(labels, |label: &Label| label.path);
    println!("{} labels", tree.item_count());

    // Queries come from the command line, or a small default set
    let queries: Vec<String> = match env::args().skip(1).collect::<Vec<_>>() {
        args if args.is_empty() => vec![
            String::new(),
            ":topic".to_string(),
            "alice :page:1".to_string(),
            "bob".to_string(),
        ],
        args => args,
    };

    for query in &queries {
        let visible = tree.query(query, |label| label.terms.clone());
        println!("\n=== query {:?}: {} visible ===", query, visible);

        let rows = tree
            .try_render(|items| Ok(render_term_summary(items, |label| label.terms.clone())))
            .with_context(|| format!("rendering results for {:?}", query))?;
        print_rows(&rows);

        let selected: Vec<_> = selected_items(&rows).iter().map(|label| label.path).collect();
        println!("selected: {:?}", selected);
    }

    Ok(())
}
