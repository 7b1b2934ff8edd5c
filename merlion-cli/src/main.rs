mod display;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use merlion_id::{hkid, mykad, nric};
use merlion_predict::sampler::{date_seed, DEFAULT_RANDOMNESS};
use merlion_predict::{fourd, pairs, toto};

use crate::display::{
    display_ball_probabilities, display_fourd_draws, display_fourd_prediction, display_generated,
    display_legacy_draws, display_pair_prediction, display_position_probabilities, display_summary,
    display_top_pairs, display_toto_draws, display_toto_prediction, display_validation,
};

#[derive(Parser)]
#[command(
    name = "merlion",
    about = "National ID checkers and draw predictors for Singapore, Malaysia and Hong Kong"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Jurisdiction {
    Nric,
    Mykad,
    Hkid,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Domain {
    Fourd,
    Toto,
    Pairs,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum PrefixArg {
    #[default]
    Auto,
    S,
    T,
    F,
    G,
    M,
}

impl From<PrefixArg> for nric::PrefixSelection {
    fn from(arg: PrefixArg) -> Self {
        match arg {
            PrefixArg::Auto => nric::PrefixSelection::Auto,
            PrefixArg::S => nric::PrefixSelection::Fixed(nric::Prefix::S),
            PrefixArg::T => nric::PrefixSelection::Fixed(nric::Prefix::T),
            PrefixArg::F => nric::PrefixSelection::Fixed(nric::Prefix::F),
            PrefixArg::G => nric::PrefixSelection::Fixed(nric::Prefix::G),
            PrefixArg::M => nric::PrefixSelection::Fixed(nric::Prefix::M),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum GenderArg {
    #[default]
    Any,
    Male,
    Female,
}

impl From<GenderArg> for mykad::Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Any => mykad::Gender::Any,
            GenderArg::Male => mykad::Gender::Male,
            GenderArg::Female => mykad::Gender::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum PrefixModeArg {
    #[default]
    Auto,
    One,
    Two,
}

impl From<PrefixModeArg> for hkid::PrefixMode {
    fn from(arg: PrefixModeArg) -> Self {
        match arg {
            PrefixModeArg::Auto => hkid::PrefixMode::Auto,
            PrefixModeArg::One => hkid::PrefixMode::One,
            PrefixModeArg::Two => hkid::PrefixMode::Two,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum CheckFormatArg {
    #[default]
    Hyphen,
    Parentheses,
}

impl From<CheckFormatArg> for hkid::CheckDigitFormat {
    fn from(arg: CheckFormatArg) -> Self {
        match arg {
            CheckFormatArg::Hyphen => hkid::CheckDigitFormat::Hyphen,
            CheckFormatArg::Parentheses => hkid::CheckDigitFormat::Parentheses,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Validate an identifier against its format and checksum rules
    Validate {
        jurisdiction: Jurisdiction,
        value: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate identifiers with a correct checksum (test/demo use only)
    Generate {
        jurisdiction: Jurisdiction,

        /// Number of values to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// NRIC prefix series
        #[arg(long, value_enum, default_value = "auto")]
        prefix: PrefixArg,

        /// MyKad gender constraint on the final serial digit
        #[arg(long, value_enum, default_value = "any")]
        gender: GenderArg,

        /// HKID prefix letter count
        #[arg(long, value_enum, default_value = "auto")]
        prefix_mode: PrefixModeArg,

        /// HKID check digit separator style
        #[arg(long, value_enum, default_value = "hyphen")]
        check_format: CheckFormatArg,
    },

    /// Produce weighted-random picks from the embedded draw history
    Predict {
        domain: Domain,

        /// Number of picks or sets
        #[arg(short, long, default_value = "5")]
        count: usize,

        /// Seed for reproducibility (default: today's date as YYYYMMDD)
        #[arg(long)]
        seed: Option<u64>,

        /// Jitter strength in [0,1]; 0 is fully deterministic per seed
        #[arg(short, long)]
        randomness: Option<f64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the scoring tables behind a prediction domain
    Stats { domain: Domain },

    /// List the embedded recent draws
    Draws {
        domain: Domain,

        /// Number of draws to show
        #[arg(short, long, default_value = "10")]
        last: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate {
            jurisdiction,
            value,
            json,
        } => cmd_validate(jurisdiction, &value, json),
        Command::Generate {
            jurisdiction,
            count,
            seed,
            prefix,
            gender,
            prefix_mode,
            check_format,
        } => cmd_generate(jurisdiction, count, seed, prefix, gender, prefix_mode, check_format),
        Command::Predict {
            domain,
            count,
            seed,
            randomness,
            json,
        } => cmd_predict(domain, count, seed, randomness, json),
        Command::Stats { domain } => cmd_stats(domain),
        Command::Draws { domain, last } => cmd_draws(domain, last),
    }
}

fn cmd_validate(jurisdiction: Jurisdiction, value: &str, json: bool) -> Result<()> {
    let result = match jurisdiction {
        Jurisdiction::Nric => nric::validate(value),
        Jurisdiction::Mykad => mykad::validate(value),
        Jurisdiction::Hkid => hkid::validate(value),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_validation(&result);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    jurisdiction: Jurisdiction,
    count: usize,
    seed: Option<u64>,
    prefix: PrefixArg,
    gender: GenderArg,
    prefix_mode: PrefixModeArg,
    check_format: CheckFormatArg,
) -> Result<()> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let size = count.clamp(1, 50);

    let values = match jurisdiction {
        Jurisdiction::Nric => nric::generate_batch(size, prefix.into(), &mut rng),
        Jurisdiction::Mykad => (0..size)
            .map(|_| mykad::generate(gender.into(), &mut rng))
            .collect(),
        Jurisdiction::Hkid => {
            let options = hkid::GenerateOptions {
                prefix_mode: prefix_mode.into(),
                check_digit_format: check_format.into(),
            };
            (0..size).map(|_| hkid::generate(options, &mut rng)).collect()
        }
    };

    display_generated(&values);
    Ok(())
}

fn cmd_predict(
    domain: Domain,
    count: usize,
    seed: Option<u64>,
    randomness: Option<f64>,
    json: bool,
) -> Result<()> {
    let seed = seed.unwrap_or_else(date_seed);
    let randomness = randomness.unwrap_or(DEFAULT_RANDOMNESS).clamp(0.0, 1.0);

    if !json {
        println!("Seed: {seed} | Randomness: {randomness}");
    }

    match domain {
        Domain::Fourd => {
            let prediction = fourd::predict(count, seed, randomness)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                display_fourd_prediction(&prediction);
            }
        }
        Domain::Toto => {
            let prediction = toto::predict(count, seed, randomness)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                display_toto_prediction(&prediction);
            }
        }
        Domain::Pairs => {
            let prediction = pairs::predict(count, seed, randomness)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                display_pair_prediction(&prediction);
            }
        }
    }
    Ok(())
}

fn cmd_stats(domain: Domain) -> Result<()> {
    match domain {
        Domain::Fourd => {
            display_summary("4D dataset", &fourd::dataset_summary());
            let records = fourd::flatten_records();
            let matrix = fourd::position_digit_weights(&records);
            display_position_probabilities(&fourd::position_probabilities(&matrix));
        }
        Domain::Toto => {
            display_summary("Toto dataset", &toto::dataset_summary());
            display_ball_probabilities(&toto::ball_probabilities(), 49);
        }
        Domain::Pairs => {
            display_summary("Legacy pair dataset", &pairs::dataset_summary());
            display_top_pairs(&pairs::scored_pairs(), 20);
        }
    }
    Ok(())
}

fn cmd_draws(domain: Domain, last: usize) -> Result<()> {
    match domain {
        Domain::Fourd => {
            display_fourd_draws(&merlion_predict::data::RECENT_FOURD_DRAWS, last)
        }
        Domain::Toto => display_toto_draws(&merlion_predict::data::RECENT_TOTO_DRAWS, last),
        Domain::Pairs => display_legacy_draws(&merlion_predict::data::LEGACY_DRAWS, last),
    }
    Ok(())
}
