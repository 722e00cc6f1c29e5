use std::{io::Read, process};

use clap::Parser;
use dynarray::{DEFAULT_CAPACITY, DynamicArray};
use libc::sbrk;
use log::{LevelFilter, error, info};

#[derive(Parser, Debug)]
#[command(name = "array")]
#[command(version, about = "Walks a DynamicArray through growth, both-end edits and search", long_about = None)]
struct Cli {
  /// Initial capacity of the array
  #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
  capacity: usize,

  /// Wait for ENTER between steps
  #[arg(short, long)]
  pause: bool,

  /// Raise the log level when RUST_LOG is unset (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

/// Waits until the user presses ENTER, giving time to inspect the process
/// with `pmap` or `gdb` between steps.
fn block_until_enter_pressed(pause: bool) {
  if !pause {
    return;
  }

  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

/// Prints the current program break using `sbrk(0)`.
/// Small reallocations usually stay below it; large ones may move it.
fn print_program_break(label: &str) {
  println!(
    "[{}] PID = {}, program break (sbrk(0)) = {:?}",
    label,
    process::id(),
    unsafe { sbrk(0) },
  );
}

fn print_array(array: &DynamicArray<i32>) -> dynarray::Result<()> {
  let mut line = String::new();
  for i in 0..array.len() {
    line.push_str(&array.at(i)?.to_string());
    line.push('\t');
  }
  println!("{line}");

  Ok(())
}

fn init_logger(verbose: u8) {
  let mut builder = pretty_env_logger::formatted_builder();

  match std::env::var("RUST_LOG") {
    Ok(filters) => {
      builder.parse_filters(&filters);
    }
    Err(_) => {
      let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
      };
      builder.filter_level(level);
    }
  }

  builder.init();
}

fn run(cli: &Cli) -> dynarray::Result<()> {
  let mut array = DynamicArray::with_capacity(cli.capacity);

  print_program_break("start");
  println!("Initial size: {}", array.len());
  println!("Initial capacity: {}", array.capacity());
  block_until_enter_pressed(cli.pause);

  // --------------------------------------------------------------------
  // 1) Fill part of the initial buffer.
  // --------------------------------------------------------------------
  for value in [1, 2, 3] {
    array.push(value);
  }
  println!("Size after adding 3 elements: {}", array.len());
  println!("Capacity after adding 3 elements: {}", array.capacity());
  block_until_enter_pressed(cli.pause);

  // --------------------------------------------------------------------
  // 2) Cross the capacity boundary so the buffer doubles.
  // --------------------------------------------------------------------
  for value in [4, 5, 6] {
    array.push(value);
  }
  println!("Size after adding 6 elements: {}", array.len());
  println!("Capacity after expansion: {}", array.capacity());
  print_program_break("after expansion");
  block_until_enter_pressed(cli.pause);

  // --------------------------------------------------------------------
  // 3) Edit both ends.
  // --------------------------------------------------------------------
  for value in [1, 2, 3] {
    array.push(value);
  }
  array.unshift(0);
  print_array(&array)?;

  let last = array.pop()?;
  let first = array.shift()?;
  info!("removed {last} from the back and {first} from the front");
  print_array(&array)?;
  block_until_enter_pressed(cli.pause);

  // --------------------------------------------------------------------
  // 4) Search.
  // --------------------------------------------------------------------
  match array.find_index(|&x| x == 2) {
    Some(index) => println!("Index of 2: {index}"),
    None => println!("Index of 2: not found"),
  }

  if let Some(found) = array.find(|&x| x > 3) {
    println!("Found: {found}");
  }

  Ok(())
}

fn main() {
  let cli = Cli::parse();
  init_logger(cli.verbose);

  if let Err(err) = run(&cli) {
    error!("{err}");
    process::exit(1);
  }
}
