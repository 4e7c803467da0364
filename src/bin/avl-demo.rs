use avl_tree::{AvlTree, Key, Order};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
  Pre,
  In,
  Post,
}

impl From<OrderArg> for Order {
  fn from(order: OrderArg) -> Self {
    match order {
      OrderArg::Pre => Order::Pre,
      OrderArg::In => Order::In,
      OrderArg::Post => Order::Post,
    }
  }
}

/// Inserts keys into an AVL tree, prints it, deletes keys and prints it again.
#[derive(Debug, Parser)]
struct Options {
  /// Keys to insert, in order
  #[clap(
    long,
    value_delimiter = ',',
    allow_hyphen_values = true,
    default_values_t = [3, 1, 5, 0, 2]
  )]
  insert: Vec<Key>,
  /// Keys to delete after inserting
  #[clap(
    long,
    value_delimiter = ',',
    allow_hyphen_values = true,
    default_values_t = [1]
  )]
  delete: Vec<Key>,
  /// Traversal used when printing
  #[clap(long, value_enum, env = "AVL_ORDER", default_value_t = OrderArg::Pre)]
  order: OrderArg,
  /// Enables verbose logging
  #[clap(short, long, action = ArgAction::Count)]
  verbose: u8,
  /// Also print the final tree in graphviz format
  #[cfg(feature = "dot")]
  #[clap(long)]
  dot: bool,
}

fn main() -> Result<(), avl_tree::Error> {
  let opts = Options::parse();

  let level = match opts.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .init();

  let order = Order::from(opts.order);
  let mut tree = AvlTree::new();

  for &key in &opts.insert {
    tree.insert(key)?;
  }
  tree.assert_valid();
  log::info!("inserted {} keys, height {}", tree.len(), tree.height());
  println!("{}", tree.display(order));

  for &key in &opts.delete {
    if !tree.delete(key) {
      log::warn!("key {key} was not in the tree");
    }
  }
  tree.assert_valid();
  log::info!("{} keys left, height {}", tree.len(), tree.height());
  print!("{}", tree.display(order));

  #[cfg(feature = "dot")]
  if opts.dot {
    print!("{}", tree.dot());
  }

  Ok(())
}
