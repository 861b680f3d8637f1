use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use regex_extractor::config::{parse_kinds, ExtractorConfig, PhoneStyle};
use regex_extractor::{Extractor, TokenStats, SAMPLE_TEXT};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Extract emails, URLs, phone numbers and currency amounts from text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to scan, or "-" for stdin. Without it a built-in sample is scanned
    #[arg(index = 1)]
    file_path: Option<PathBuf>,

    /// Process only first N lines (optional)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Extract only these kinds (comma-separated: email,url,phone,currency)
    #[arg(short, long)]
    kinds: Option<String>,

    /// Exclude specific kinds (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Accept an area code with only one of its parentheses, e.g. "123) 456-7890"
    #[arg(long)]
    lenient_phone: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Count tokens per kind instead of listing them
    #[arg(short, long)]
    stats: bool,

    /// Where the --stats report is written
    #[arg(long, default_value = "outputstats.json")]
    stats_output: PathBuf,
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn build_config(args: &Args) -> io::Result<ExtractorConfig> {
    let mut config = ExtractorConfig::new();
    if let Some(list) = &args.kinds {
        config = config.kinds(parse_kinds(list)?);
    }
    if let Some(list) = &args.exclude {
        config = config.exclude(&parse_kinds(list)?);
    }
    if args.lenient_phone {
        config = config.phone_style(PhoneStyle::Lenient);
    }
    Ok(config)
}

fn run_demo(extractor: &Extractor) {
    let found = extractor.extract_all(SAMPLE_TEXT);
    for &kind in extractor.kinds() {
        println!("\n{} found: {:?}", kind.label(), found.get(kind));
    }
}

fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::with_capacity(1_000_000, file)))
    }
}

/// Count lines up front so the progress bar has a length. Stdin is not counted.
fn count_lines(path: &Path, limit: Option<usize>) -> io::Result<Option<u64>> {
    if path.as_os_str() == "-" {
        return Ok(None);
    }
    let start = Instant::now();
    let mut reader = BufReader::with_capacity(1_000_000, File::open(path)?);
    let mut count = 0usize;
    let mut buffer = [0; 16384];
    loop {
        let bytes = reader.read(&mut buffer)?;
        if bytes == 0 {
            break;
        }
        count += buffer[..bytes].iter().filter(|&&b| b == b'\n').count();
    }
    debug!(lines = count, elapsed = ?start.elapsed(), "counted lines");
    Ok(Some(limit.map_or(count, |l| l.min(count)) as u64))
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;
    let extractor = Extractor::with_config(&config);

    let Some(path) = &args.file_path else {
        run_demo(&extractor);
        return Ok(());
    };

    let progress_bar = if args.stats {
        let pb = match count_lines(path, args.limit)? {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        Some(pb)
    } else {
        info!("Processing {}", path.display());
        None
    };

    let reader = open_input(path)?;
    let limit = args.limit.unwrap_or(usize::MAX);
    let mut stats = TokenStats::new();
    let mut line_count = 0;

    for line_result in reader.lines() {
        if line_count >= limit {
            break;
        }
        let line = line_result?;
        line_count += 1;

        if let Some(pb) = &progress_bar {
            if line_count % 1000 == 0 || line_count == 1 {
                pb.set_position(line_count as u64);
            }
        }

        let found = extractor.extract_all(&line);

        if args.stats {
            stats.record(&found);
        } else {
            print!("\n{}", found.format_line(line_count));
        }
    }

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    if args.stats {
        let report = stats.report(&path.to_string_lossy());
        fs::write(&args.stats_output, report.to_json_pretty()?)?;
        info!("Statistics written to {}", args.stats_output.display());
    }

    Ok(())
}
