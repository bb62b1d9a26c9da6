use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heaptree::parser::parse_quoted_strings;
use heaptree::{ArrayTree, BinaryTree, Heap, MaxHeap, TraversalOrder};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heaptree", about = "Array-backed binary trees, traversals and heaps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay values out as a nearly-complete tree and print them in traversal order.
    Traverse {
        /// Traversal order: pre, in, post or level.
        #[arg(long, short, default_value_t = TraversalOrder::InOrder)]
        order: TraversalOrder,
        /// Node values, in slot (level) order.
        values: Vec<String>,
    },
    /// Sort integers through a max-heap, largest first.
    Heapsort {
        /// Build by pushing one value at a time instead of one bottom-up pass.
        #[arg(long)]
        incremental: bool,
        /// Values to sort.
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Print every quoted string found in the input, one per line.
    Strings {
        /// Text to scan.
        input: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{}", run(cli.command)?);

    Ok(())
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Traverse { order, values } => Ok(run_traverse(order, values)),
        Commands::Heapsort {
            incremental,
            numbers,
        } => run_heapsort(incremental, numbers),
        Commands::Strings { input } => run_strings(&input),
    }
}

fn run_traverse(order: TraversalOrder, values: Vec<String>) -> String {
    let tree = ArrayTree::from(values);
    debug!(%order, size = tree.size(), "traversing");

    let line: Vec<&str> = order.traverse(&tree).map(String::as_str).collect();
    line.join(" ")
}

fn run_heapsort(incremental: bool, numbers: Vec<i64>) -> Result<String> {
    debug!(incremental, count = numbers.len(), "sorting");

    let heap = if incremental {
        let mut heap = MaxHeap::new();
        for number in numbers {
            heap.push(number)
                .with_context(|| format!("failed to push {}", number))?;
        }
        heap
    } else {
        MaxHeap::from_values(numbers).context("failed to build heap")?
    };

    let sorted = heap.into_sorted_desc().context("failed to drain heap")?;
    let line: Vec<String> = sorted.iter().map(i64::to_string).collect();
    Ok(line.join(" "))
}

fn run_strings(input: &str) -> Result<String> {
    let strings = parse_quoted_strings(input).context("failed to tokenize input")?;
    Ok(strings.join("\n"))
}
