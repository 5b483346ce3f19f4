use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use binheap::{BinaryHeap, Compare, HeapConfig, Max, Min};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use structopt::StructOpt;

const NAME: &str = "heap-menu";

const ABOUT: &str = "
Interactive binary heap of integers.
Menu choices are read from stdin, one per line; results are printed on stdout.
";

const MENU: &str = "
Choose an Options
1. Insert Element
2. Extract Top
3. Peek
4. HeapSize
5. Print
6. Exit";

enum Order {
    Min,
    Max,
}

impl Order {
    fn new(tag: &str) -> Self {
        match tag {
            "max" => Self::Max,
            _ => Self::Min,
        }
    }
}

#[derive(StructOpt)]
#[structopt(name = NAME, about = ABOUT)]
struct Options {
    #[structopt(
        long,
        help = "which item surfaces first",
        possible_values = &["min", "max"],
        default_value = "min",
        parse(from_str = Order::new)
    )]
    order: Order,

    #[structopt(long, help = "initial heap capacity", default_value = "4")]
    capacity: usize,

    #[structopt(long, help = "reject inserts into a full heap instead of doubling it")]
    fixed: bool,

    #[structopt(short, long, help = "log capacity growth")]
    verbose: bool,
}

/// One menu entry, each backed by exactly one heap operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    Insert,
    ExtractTop,
    Peek,
    Size,
    Print,
    Exit,
}

impl Command {
    fn parse(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Insert),
            "2" => Some(Self::ExtractTop),
            "3" => Some(Self::Peek),
            "4" => Some(Self::Size),
            "5" => Some(Self::Print),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Runs the menu loop until `Exit` or end of input.
fn session<C, R, W>(heap: &mut BinaryHeap<i64, C>, input: &mut R, out: &mut W) -> Result<()>
where
    C: Compare<i64>,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        out.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(());
        };
        writeln!(out)?;

        match Command::parse(&choice) {
            Some(Command::Insert) => {
                write!(out, "Enter Value : ")?;
                out.flush()?;
                let Some(value) = read_line(input)? else {
                    return Ok(());
                };
                match value.parse::<i64>() {
                    Ok(value) => {
                        if let Err(e) = heap.push(value) {
                            writeln!(out, "Cannot insert {} : {}", e.rest(), e)?;
                        }
                    }
                    Err(e) => writeln!(out, "Invalid value {:?} : {}", value, e)?,
                }
            }
            Some(Command::ExtractTop) => match heap.pop() {
                Ok(top) => writeln!(out, "Extracted Top : {}", top)?,
                Err(e) => writeln!(out, "Cannot extract : {}", e)?,
            },
            Some(Command::Peek) => match heap.peek() {
                Ok(top) => writeln!(out, "Peek : {}", top)?,
                Err(e) => writeln!(out, "Cannot peek : {}", e)?,
            },
            Some(Command::Size) => writeln!(out, "HeapSize : {}", heap.len())?,
            Some(Command::Print) => {
                write!(out, "Heap Data : ")?;
                for item in heap.snapshot() {
                    write!(out, "{} ", item)?;
                }
                writeln!(out)?;
            }
            Some(Command::Exit) => return Ok(()),
            None => log::debug!("ignoring unknown menu choice {:?}", choice),
        }
    }
}

fn run<C: Compare<i64>>(mut heap: BinaryHeap<i64, C>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&mut heap, &mut stdin.lock(), &mut stdout.lock())
}

fn main() -> Result<()> {
    let options = Options::from_args();

    let level = if options.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to install logger")?;

    let config = if options.fixed {
        HeapConfig::fixed(options.capacity)
    } else {
        HeapConfig::doubling(options.capacity)
    };

    match options.order {
        Order::Min => run(BinaryHeap::with_config(Min, config)),
        Order::Max => run(BinaryHeap::with_config(Max, config)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn transcript<C: Compare<i64>>(heap: &mut BinaryHeap<i64, C>, input: &str) -> String {
        let mut out = Vec::new();
        session(heap, &mut Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commands() {
        assert_eq!(Command::parse("1"), Some(Command::Insert));
        assert_eq!(Command::parse("6"), Some(Command::Exit));
        assert_eq!(Command::parse("7"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn min_session() {
        let mut heap = BinaryHeap::with_config(Min, HeapConfig::doubling(4));
        let out = transcript(
            &mut heap,
            "1\n7\n1\n2\n1\n9\n1\n1\n2\n3\n4\n5\n6\n",
        );

        assert!(out.contains("Extracted Top : 1\n"));
        assert!(out.contains("Peek : 2\n"));
        assert!(out.contains("HeapSize : 3\n"));
        assert!(out.contains("Heap Data : 2 7 9 \n"));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn empty_heap_and_bad_input() {
        let mut heap = BinaryHeap::with_config(Max, HeapConfig::doubling(4));
        let out = transcript(&mut heap, "2\n3\n1\nseven\n9\n");

        assert!(out.contains("Cannot extract : heap is empty"));
        assert!(out.contains("Cannot peek : heap is empty"));
        assert!(out.contains("Invalid value \"seven\""));
        assert!(heap.is_empty());
    }

    #[test]
    fn fixed_capacity_rejects() {
        let mut heap = BinaryHeap::with_config(Max, HeapConfig::fixed(1));
        let out = transcript(&mut heap, "1\n5\n1\n6\n4\n");

        assert!(out.contains("Cannot insert 6 : insufficient capacity: maximum 1, encountered 2"));
        assert!(out.contains("HeapSize : 1"));
    }

    #[test]
    fn end_of_input_exits() {
        let mut heap = BinaryHeap::with_config(Min, HeapConfig::default());
        let out = transcript(&mut heap, "1\n");
        assert!(out.ends_with("Enter Value : "));
        assert!(heap.is_empty());
    }
}
