use std::io::{self, Write};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dedup_bst::{filters, input, report, OrderedCountingSet, OrderedSet};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Variant {
    /// Count every value and report duplicates and unique values.
    Counting,
    /// Drop repeats and report the top of the tree.
    Set,
    /// Time each filter on the same input.
    Compare,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Input {
    /// The fixed demo sequence.
    Demo,
    /// Random signed values.
    Random,
    /// 0, 1, 2, ... (degenerates the tree).
    Growing,
    /// Ascending runs repeated `--repeats` times.
    Repeating,
}

#[derive(Debug, Parser)]
#[command(name = "dedup-bst")]
#[command(about = "Find duplicate integers with a binary search tree")]
struct Args {
    #[arg(long, value_enum, default_value_t = Variant::Counting)]
    variant: Variant,

    #[arg(long, value_enum, default_value_t = Input::Demo)]
    input: Input,

    /// Number of generated values.
    #[arg(long, default_value_t = 16)]
    len: usize,

    /// Upper bound (exclusive) on the magnitude of random values.
    #[arg(long, default_value_t = 100)]
    max: usize,

    /// How many times values repeat in `repeating` input (2 when missing). With `random` input the
    /// range is narrowed by this factor, but only when it's given.
    #[arg(long)]
    repeats: Option<usize>,

    /// Seed for random input. A fresh seed is used when this is missing.
    #[arg(long)]
    seed: Option<u64>,

    /// With the `set` variant, also list every value.
    #[arg(long)]
    full: bool,
}

fn values(args: &Args) -> Result<Vec<i32>, dedup_bst::Error> {
    match args.input {
        Input::Demo => Ok(input::DEMO.to_vec()),
        Input::Random => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            match args.repeats {
                Some(repeats) => input::random_repeating(&mut rng, args.len, args.max, repeats),
                None => input::random(&mut rng, args.len, args.max),
            }
        }
        Input::Growing => input::growing(args.len),
        Input::Repeating => input::repeating(args.len, args.repeats.unwrap_or(2)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("{args:?}");

    let values = values(&args).context("failed to generate input")?;
    log::info!("Running {:?} over {} {:?} values", args.variant, values.len(), args.input);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.variant {
        Variant::Counting => {
            let start = Instant::now();
            let set = OrderedCountingSet::build_from(values.iter().copied())
                .context("failed to build counting set")?;
            log::info!(
                "Built {} nodes of height {} in {:?}",
                set.len(),
                set.height(),
                start.elapsed()
            );

            report::duplicates(&mut out, &set)?;
            report::unique(&mut out, &set)?;
        }
        Variant::Set => {
            let start = Instant::now();
            let set = OrderedSet::build_from(values.iter().copied())
                .context("failed to build set")?;
            log::info!(
                "Built {} nodes of height {} in {:?}",
                set.len(),
                set.height(),
                start.elapsed()
            );

            report::shallow(&mut out, &set)?;
            if args.full {
                report::listing(&mut out, &set)?;
            }
        }
        Variant::Compare => {
            type Filter = fn(&[i32]) -> Result<Vec<i32>, dedup_bst::Error>;
            let runs: [(&str, Filter); 5] = [
                ("naive algorithm", |xs| Ok(filters::naive(xs))),
                ("hash table algorithm", |xs| Ok(filters::hashed(xs))),
                ("bucketed hash table algorithm", |xs| Ok(filters::bucketed(xs))),
                ("bit map algorithm", filters::bitmap),
                ("binary tree algorithm", filters::tree),
            ];

            for (name, filter) in runs {
                let start = Instant::now();
                let filtered = filter(&values).with_context(|| format!("{name} failed"))?;
                let elapsed = start.elapsed();
                log::debug!("{name} kept {} of {} values", filtered.len(), values.len());

                report::filtered(&mut out, name, &values, &filtered, elapsed)?;
            }
        }
    }

    out.flush()?;

    Ok(())
}
