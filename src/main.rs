//! Inserts the keys given on the command line into a tree, then prints the tree along with its
//! traversals and a few of its properties.

use std::fmt::Display;

use bst_set::Tree;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(about = "Build a binary search tree and print it", allow_negative_numbers = true)]
struct Args {
    /// Keys to insert, in order.
    #[arg(default_values_t = [1, 2, 3, 4, 5, 6, 7])]
    keys: Vec<i64>,
    /// A key to delete once every key has been inserted. May be repeated.
    #[arg(short, long)]
    delete: Vec<i64>,
    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn configure_tracing(default_level: LevelFilter) {
    let fmt_layer = fmt::layer().compact().with_target(true);
    let level_filter_layer =
        EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    tracing_subscriber::registry().with(fmt_layer).with(level_filter_layer).init();
}

fn main() {
    let args = Args::parse();
    configure_tracing(args.log_level);

    let mut tree = Tree::new();
    for key in args.keys {
        if !tree.insert(key) {
            warn!(key, "ignoring duplicate key");
        }
    }
    for key in &args.delete {
        if !tree.delete(key) {
            warn!(key, "key to delete is not in the tree");
        }
    }
    info!(len = tree.len(), "built tree");

    println!("=== Tree ===");
    println!("(right subtrees are drawn above their parent)\n");
    print!("{tree}");

    println!("\n=== Traversals ===");
    println!("In-order    (L→Root→R): {}", joined(tree.inorder()));
    println!("Pre-order   (Root→L→R): {}", joined(tree.preorder()));
    println!("Post-order  (L→R→Root): {}", joined(tree.postorder()));
    println!("Level-order (BFS)     : {}", joined(tree.level_order()));

    println!("\n=== Properties ===");
    println!("Size     : {}", tree.len());
    println!("Height   : {}", tree.height());
    println!("Min      : {}", describe(tree.min()));
    println!("Max      : {}", describe(tree.max()));
    println!("Valid BST: {}", tree.is_valid_bst());
    println!("Balanced : {}", tree.is_balanced());
}

fn joined<T: Display>(keys: impl Iterator<Item = T>) -> String {
    keys.map(|key| key.to_string()).collect::<Vec<_>>().join(" ")
}

fn describe<T: Display>(result: bst_set::Result<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => format!("<{e}>"),
    }
}
