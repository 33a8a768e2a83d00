use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wordlist_reader::{parse_encoding, MappedWordList, WordList, WordListConfig};

/// Look up words in a sorted word list file
#[derive(Parser, Debug)]
#[command(name = "wordlist-lookup")]
#[command(about = "Binary-search a sorted, newline-delimited word list", long_about = None)]
struct Args {
    /// Path to the sorted word list
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// The file is sorted case-insensitively
    #[arg(short, long)]
    ignore_case: bool,

    /// Percentage of line offsets to cache (0-100)
    #[arg(short, long, default_value_t = wordlist_reader::wordlist::DEFAULT_CACHE_PERCENT)]
    cache_percent: u8,

    /// Text encoding label of the file
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,

    /// Print every word in the list
    #[arg(long)]
    dump: bool,
}

fn run(args: &Args) -> wordlist_reader::Result<()> {
    let config = WordListConfig::default()
        .case_sensitive(!args.ignore_case)
        .cache_percent(args.cache_percent)
        .encoding(parse_encoding(&args.encoding)?);

    let list = MappedWordList::open_with(&args.path, config)?;
    println!("Word list: {}", args.path.display());
    println!("  Words: {}", list.len());
    println!("  Bytes: {}", list.file_len());
    println!("  Segments: {}", list.segment_count()?);
    println!("  Cached offsets: {}", list.breakpoint_count()?);
    println!("  Case sensitive: {}", list.is_case_sensitive());
    println!("  Encoding: {}", list.encoding().name());
    println!("{}", "=".repeat(60));

    if args.dump {
        for (i, word) in list.iter().enumerate() {
            println!("{:>8}  {}", i, word?);
        }
        println!("{}", "=".repeat(60));
    }

    for word in &args.words {
        match list.index_of(word)? {
            Some(index) => println!("{}: found {}", word, index),
            None => println!("{}: absent", word),
        }
    }

    list.close()
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
