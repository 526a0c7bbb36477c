//! `catalog_browse` - render one catalog view to stdout.
//!
//! A minimal presentation layer over the engine, useful for eyeballing a
//! catalog file and for exercising the whole stack end to end.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin catalog_browse -- data.json
//! cargo run --bin catalog_browse -- data.json SEN
//! cargo run --bin catalog_browse -- data.json SEN lundi
//! cargo run --bin catalog_browse -- data.json SEN lundi --open Aide
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use portico::{
    CatalogStore, EngineOptions, RenderTree, SectionView, Selection, Span, render,
};

const HELP_TEXT: &str = "catalog_browse - render one catalog view to stdout

USAGE:
    catalog_browse <CATALOG.json> [PORTAL [QUERY]] [OPTIONS]

OPTIONS:
    -h, --help          Print this help message and exit
    --open <TITLE>      Open a section in the detail panel
    --portals           List portal keys and exit

With no PORTAL, prints the no-portal placeholder (and --portals lists the
available keys). Matched spans are rendered in bold; navigable links get an
arrow, informational ones are printed as plain text.
";

struct Args {
    catalog: PathBuf,
    portal: Option<String>,
    query: String,
    open: Option<String>,
    list_portals: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut open = None;
    let mut list_portals = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print!("{HELP_TEXT}");
                std::process::exit(0);
            }
            "--open" => {
                open = Some(args.next().ok_or("--open requires a section title")?);
            }
            "--portals" => list_portals = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}"));
            }
            other => positional.push(other.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let catalog = positional
        .next()
        .ok_or("missing catalog path (try --help)")?;
    Ok(Args {
        catalog: PathBuf::from(catalog),
        portal: positional.next(),
        query: positional.next().unwrap_or_default(),
        open,
        list_portals,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("catalog_browse: {message}");
            return ExitCode::FAILURE;
        }
    };

    let store = CatalogStore::load_from_path(&args.catalog);

    if args.list_portals {
        if let Some(catalog) = store.catalog() {
            for key in catalog.portal_keys() {
                println!("{key}");
            }
        }
    }

    let mut selection = Selection::new();
    if let Some(portal) = &args.portal {
        selection.select_portal(portal.clone());
    }
    selection.set_query(args.query.clone());
    if let Some(title) = &args.open {
        selection.open_section(title.clone());
    }

    let tree = render(&store, &selection, &EngineOptions::default());
    print_tree(&tree);

    match tree {
        RenderTree::LoadFailed { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

fn print_tree(tree: &RenderTree<'_>) {
    match tree {
        RenderTree::Loading => println!("(loading…)"),
        RenderTree::LoadFailed { message } => eprintln!("error: {message}"),
        RenderTree::NoPortalSelected => println!("(no portal selected)"),
        RenderTree::NoResults { portal, query } => {
            if query.trim().is_empty() {
                println!("{portal}: nothing to show");
            } else {
                println!("{portal}: no results for {query:?}");
            }
        }
        RenderTree::Portal(view) => {
            for section in &view.sections {
                print_section(section, "");
            }
            if let Some(open) = &view.open {
                println!("--- open panel ---");
                print_section(open, "  ");
            }
        }
    }
}

fn print_section(section: &SectionView<'_>, indent: &str) {
    let marker = if section.is_open { "*" } else { " " };
    println!("{indent}[{marker}] {}", emphasized(&section.title_spans));
    for item in &section.items {
        println!("{indent}    {}", emphasized(&item.label_spans));
        let text = emphasized(&item.text_spans);
        if !text.is_empty() {
            println!("{indent}      {text}");
        }
        for link in &item.links {
            if link.is_navigable() {
                println!("{indent}      -> {}", emphasized(&link.spans));
            } else {
                println!("{indent}      ({})", emphasized(&link.spans));
            }
        }
    }
}

/// Render spans with ANSI bold around matches.
fn emphasized(spans: &[Span<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        if span.is_match {
            out.push_str("\x1b[1m");
            out.push_str(span.text);
            out.push_str("\x1b[0m");
        } else {
            out.push_str(span.text);
        }
    }
    out
}
