//! A Spelling Bee solver
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use clap::{value_parser, Arg, ArgAction, Command};
use eyre::{Result, WrapErr};
use spelling_bee_engine::{
    parse_center, prepare::clean_word_list, present::Presentation, Engine, Query, Strategy,
};
use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let opts = parse_opts();
    let (query, words) = prepare(&opts)?;

    if let Some(iterations) = opts.bench {
        return bench(&words, &query, iterations);
    }

    let engine = Engine::build(opts.strategy, words.iter().map(String::as_str))
        .wrap_err("The word list could not be prepared.")?;
    let solutions = engine.solve(&query);
    tracing::info!(strategy = %engine.strategy(), solutions = solutions.len(), "solved {query}");

    let presentation = match opts.common.as_deref() {
        Some(common) => {
            let common = read_word_set(common)?;
            Presentation::with_common(query, solutions, |word| common.contains(word))
        }
        None => Presentation::new(query, solutions),
    };
    print!("{presentation}");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug)]
struct Opts {
    word_list: PathBuf,
    block_list: Option<PathBuf>,
    common: Option<PathBuf>,
    center: Option<String>,
    others: Option<String>,
    strategy: Strategy,
    raw: bool,
    bench: Option<u32>,
}

fn parse_opts() -> Opts {
    let matches = Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(concat!(
            "The solutions may contain extra words or miss some words. ",
            "There is no published dictionary for the Spelling Bee, ",
            "the results are only as good as the word list."
        ))
        .arg(
            Arg::new("word-list")
                .value_name("WORD_LIST")
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("The word list to use")
                .long_help(concat!(
                    "The word list to use. ",
                    "The list must contain one word per line. ",
                    "Words that can never be a solution (shorter than 4 letters, ",
                    "more than 7 distinct letters, or not only [a-z]) ",
                    "are removed unless --raw is given."
                ))
                .default_value("/usr/share/dict/words"),
        )
        .arg(
            Arg::new("center")
                .help("The center letter that every solution must contain")
                .short('c')
                .long("center")
                .value_name("LETTER"),
        )
        .arg(
            Arg::new("others")
                .help("The six other letters that solutions may contain")
                .short('o')
                .long("others")
                .value_name("LETTERS"),
        )
        .arg(
            Arg::new("strategy")
                .help("The matcher used to find the solutions")
                .long_help(concat!(
                    "The matcher used to find the solutions. ",
                    "One of naive, bitmask, prefix-tree, radix-tree, or fst. ",
                    "All of them find the same words, they only differ in speed."
                ))
                .short('s')
                .long("strategy")
                .value_parser(str::parse::<Strategy>)
                .default_value("radix-tree"),
        )
        .arg(
            Arg::new("block-list")
                .help("A list of words that are never solutions. Must be one word per line.")
                .short('b')
                .long("block-list")
                .value_name("BLOCK_LIST")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("common")
                .help("A list of common words, solutions are grouped by it. One word per line.")
                .long("common")
                .value_name("COMMON_LIST")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("raw")
                .help("Use the word list as it is")
                .long_help(concat!(
                    "Use the word list as it is. ",
                    "The default behavior is to remove all words that can never be a solution. ",
                    "With this flag, every line is used as a word. ",
                    "Lines that are not only [a-z] will result in an error."
                ))
                .long("raw")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bench")
                .help("Compare the speed of all strategies for the query")
                .long_help(concat!(
                    "Compare the speed of all strategies for the query. ",
                    "Every strategy solves the query ITERATIONS times, repeated 5 times. ",
                    "The fastest repetition is reported. ",
                    "Fails if any strategy finds different words than the naive one."
                ))
                .long("bench")
                .value_name("ITERATIONS")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .get_matches();

    let word_list = matches
        .get_one::<PathBuf>("word-list")
        .cloned()
        .unwrap_or_default();
    let block_list = matches.get_one::<PathBuf>("block-list").cloned();
    let common = matches.get_one::<PathBuf>("common").cloned();
    let center = matches.get_one::<String>("center").cloned();
    let others = matches.get_one::<String>("others").cloned();
    let strategy = matches
        .get_one::<Strategy>("strategy")
        .copied()
        .unwrap_or(Strategy::RadixTree);
    let raw = matches.get_flag("raw");
    let bench = matches.get_one::<u32>("bench").copied();

    Opts {
        word_list,
        block_list,
        common,
        center,
        others,
        strategy,
        raw,
        bench,
    }
}

/// The query comes first, a bad letter should not wait for a large word list
fn prepare(opts: &Opts) -> Result<(Query, Vec<String>)> {
    let query = read_query(opts.center.as_deref(), opts.others.as_deref())?;
    let words = load_word_list(&opts.word_list, opts.block_list.as_deref(), opts.raw)?;
    Ok((query, words))
}

fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

fn read_lines(file: &Path) -> Result<Vec<String>> {
    BufReader::new(
        File::open(file).wrap_err_with(|| format!("The file '{}' is missing.", file.display()))?,
    )
    .lines()
    .map(|l| l.map_err(eyre::Report::from))
    .collect::<Result<Vec<_>>>()
    .wrap_err_with(|| format!("The file '{}' could not be read.", file.display()))
}

fn read_word_set(file: &Path) -> Result<HashSet<String>> {
    Ok(read_lines(file)?
        .iter()
        .map(|line| normalize(line))
        .filter(|word| !word.is_empty())
        .collect())
}

fn load_word_list(file: &Path, block_list: Option<&Path>, raw: bool) -> Result<Vec<String>> {
    let lines = read_lines(file)?;

    let block_list = block_list
        .map(read_word_set)
        .transpose()
        .wrap_err("The block list could not be read.")?
        .unwrap_or_default();

    let words = select_words(lines, &block_list, raw);

    tracing::info!(words = words.len(), "loaded word list from {}", file.display());
    Ok(words)
}

fn select_words(lines: Vec<String>, block_list: &HashSet<String>, raw: bool) -> Vec<String> {
    if raw {
        lines
            .into_iter()
            .map(|line| line.trim().to_owned())
            .filter(|word| !word.is_empty() && !block_list.contains(word))
            .collect()
    } else {
        clean_word_list(lines, |word| block_list.contains(word))
    }
}

fn read_query(center: Option<&str>, others: Option<&str>) -> Result<Query> {
    let center = match center {
        Some(center) => {
            let center = normalize(center);
            let _ = parse_center(&center)
                .wrap_err("The letters do not form a Spelling Bee puzzle.")?;
            center
        }
        None => normalize(
            &dialoguer::Input::<String>::new()
                .with_prompt("Center letter")
                .validate_with(|input: &String| -> Result<(), String> {
                    parse_center(&normalize(input))
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()?,
        ),
    };

    let others = match others {
        Some(others) => normalize(others),
        None => normalize(
            &dialoguer::Input::<String>::new()
                .with_prompt("Other letters")
                .validate_with(|input: &String| -> Result<(), String> {
                    Query::new(&center, &normalize(input))
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()?,
        ),
    };

    Query::new(&center, &others).wrap_err("The letters do not form a Spelling Bee puzzle.")
}

const REPETITIONS: u32 = 5;

fn bench(words: &[String], query: &Query, iterations: u32) -> Result<()> {
    let mut expected = None;
    let mut naive_time = None;

    println!("Query:\t\t{query}");
    println!("Words:\t\t{}", words.len());
    println!("Iterations:\t{iterations}");
    println!("Repetitions:\t{REPETITIONS}");
    println!();
    println!(
        "{:<12}  {:>12}  {:>14}  {:>9}  {:>9}  {:>9}  {:>5}",
        "Strategy", "Build (s)", "Min Time (s)", "Speedup", "Solutions", "Visited", "Depth"
    );
    println!(
        "{:-<12}  {:->12}  {:->14}  {:->9}  {:->9}  {:->9}  {:->5}",
        "", "", "", "", "", "", ""
    );

    for strategy in Strategy::ALL {
        let start = Instant::now();
        let engine = Engine::build(strategy, words.iter().map(String::as_str))
            .wrap_err_with(|| format!("The {strategy} matcher could not be built."))?;
        let build_time = start.elapsed();

        let min_time = (0..REPETITIONS)
            .map(|_| {
                let start = Instant::now();
                for _ in 0..iterations {
                    let _ = std::hint::black_box(engine.solve(std::hint::black_box(query)));
                }
                start.elapsed() / iterations
            })
            .min()
            .unwrap_or_default();

        let (mut solutions, stats) = engine.solve_with_stats(query);
        solutions.sort_unstable();
        solutions.dedup();
        let found = solutions.len();

        if *expected.get_or_insert_with(|| solutions.clone()) != solutions {
            eyre::bail!("The {strategy} matcher found different words than the naive one.");
        }

        let naive_time = *naive_time.get_or_insert(min_time);
        let (visited, depth) = stats.map_or_else(
            || (String::from("-"), String::from("-")),
            |stats| (stats.visited.to_string(), stats.max_depth.to_string()),
        );
        println!(
            "{:<12}  {:>12.6}  {:>14.9}  {:>9.3}  {:>9}  {:>9}  {:>5}",
            strategy,
            build_time.as_secs_f64(),
            min_time.as_secs_f64(),
            speedup(naive_time, min_time),
            found,
            visited,
            depth
        );
    }

    Ok(())
}

fn speedup(baseline: Duration, time: Duration) -> f64 {
    if time.is_zero() {
        return f64::INFINITY;
    }
    baseline.as_secs_f64() / time.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speedup() {
        let naive = Duration::from_millis(100);
        assert!((speedup(naive, naive) - 1.0).abs() < f64::EPSILON);
        assert!((speedup(naive, Duration::from_millis(25)) - 4.0).abs() < 1e-9);
        assert!(speedup(naive, Duration::ZERO).is_infinite());
    }

    #[test]
    fn test_read_query_from_args() {
        let query = read_query(Some(" T "), Some("ORABYZ")).unwrap();
        assert_eq!(query, Query::new("t", "orabyz").unwrap());
    }

    #[test]
    fn test_read_query_invalid() {
        assert!(read_query(Some("t"), Some("orab")).is_err());
        assert!(read_query(Some("t"), Some("ora-yz")).is_err());
    }

    fn opts(word_list: &str, center: &str, others: &str) -> Opts {
        Opts {
            word_list: PathBuf::from(word_list),
            block_list: None,
            common: None,
            center: Some(String::from(center)),
            others: Some(String::from(others)),
            strategy: Strategy::RadixTree,
            raw: false,
            bench: None,
        }
    }

    fn lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|&l| String::from(l)).collect()
    }

    #[test]
    fn test_query_is_checked_before_word_list() {
        let bad_center = opts("/this/file/does/not/exist", "ab", "orabyz");
        let err = prepare(&bad_center).unwrap_err();

        assert!(
            err.chain().any(|e| e.to_string().contains("only one center letter")),
            "{err:?}"
        );
        assert!(!err.chain().any(|e| e.to_string().contains("is missing")), "{err:?}");

        let valid = opts("/this/file/does/not/exist", "t", "orabyz");
        let err = prepare(&valid).unwrap_err();
        assert!(err.to_string().contains("is missing"));
    }

    #[test]
    fn test_invalid_center_fails_before_prompt() {
        let err = read_query(Some("ab"), None).unwrap_err();
        assert!(err.chain().any(|e| e.to_string().contains("only one center letter")));

        let err = read_query(Some("1"), None).unwrap_err();
        assert!(err.chain().any(|e| e.to_string().contains('1')));
    }

    #[test]
    fn test_select_raw_words_are_trimmed() {
        let block_list = HashSet::from([String::from("tart")]);
        let words = select_words(
            lines(&["rot\r", "  tort ", "", "   ", "tart\r", "art"]),
            &block_list,
            true,
        );
        assert_eq!(words, ["rot", "tort", "art"]);
    }

    #[test]
    fn test_select_clean_words_with_block_list() {
        let block_list = HashSet::from([String::from("tarot")]);
        let words = select_words(lines(&["Tarot\r", "rotor", "toot "]), &block_list, false);
        assert_eq!(words, ["rotor", "toot"]);
    }

    #[test]
    fn test_read_word_set_normalizes_lines() {
        let file = std::env::temp_dir().join(format!("spelling-bee-words-{}", std::process::id()));
        std::fs::write(&file, "Tempo\r\n  coop \n\nTEMPO\n").unwrap();
        let words = read_word_set(&file);
        std::fs::remove_file(&file).unwrap();

        let expected = HashSet::from([String::from("tempo"), String::from("coop")]);
        assert_eq!(words.unwrap(), expected);
    }

    #[test]
    fn test_load_missing_word_list() {
        let err = load_word_list(Path::new("/this/file/does/not/exist"), None, false).unwrap_err();
        assert!(err.to_string().contains("is missing"));
    }
}
