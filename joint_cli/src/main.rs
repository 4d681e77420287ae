//! # Joint CLI
//!
//! Command-line host for `joint_core`: gathers two joint definitions, runs the
//! comparison and prints the result as text or JSON.
//!
//! ```text
//! joint_cli compare --request joints.json --json
//! joint_cli compare --size-2 5/8-11 --grade-2 "A307 Gr. B" --torque-2 50
//! joint_cli --config settings.toml prompt
//! joint_cli sizes | grades | formulas
//! ```
//!
//! Exit status: 0 pass, 2 fail, 1 for errors (including an undefined ratio).
//! Set `RUST_LOG=debug` to trace each computed joint.

mod config;
mod prompt;
mod render;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use joint_core::calculations::advisor::{recommend, torque_what_if};
use joint_core::{
    compare_joints, compute_joint, CalcError, CalcSettings, JointComparison, JointInput, ReferenceData,
};
use serde::Deserialize;

use crate::config::Overrides;

const STATUS_PASS: u8 = 0;
const STATUS_ERROR: u8 = 1;
const STATUS_FAIL: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "joint_cli")]
#[command(author, version, about = "Bolted joint strength comparator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Custom size/grade tables (JSON) instead of the built-in ones
    #[arg(long, global = true)]
    reference: Option<PathBuf>,

    /// Pass threshold, percent
    #[arg(long, global = true, env = "JOINT_THRESHOLD_PERCENT")]
    threshold: Option<f64>,

    /// Equivalent-strength basis: stress-area or force-strength
    #[arg(long, global = true, env = "JOINT_STRENGTH_BASIS")]
    basis: Option<String>,

    /// Material strength to resolve: ys or uts
    #[arg(long, global = true)]
    strength_kind: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two joints
    Compare(CompareArgs),
    /// Enter both joints interactively, then compare
    Prompt {
        /// Also recompute joint 2 with its torque scaled by this factor
        #[arg(long)]
        what_if: Option<f64>,
    },
    /// List fastener sizes
    Sizes,
    /// List material grades
    Grades,
    /// List formulas and their variables
    Formulas,
}

#[derive(Args, Debug, Default)]
struct CompareArgs {
    /// JSON file with `joint_1` and `joint_2`; "-" reads stdin
    #[arg(long)]
    request: Option<PathBuf>,

    /// Also recompute joint 2 with its torque scaled by this factor (e.g. 1.10)
    #[arg(long)]
    what_if: Option<f64>,

    #[arg(long)]
    size_1: Option<String>,
    #[arg(long)]
    grade_1: Option<String>,
    #[arg(long)]
    bolts_1: Option<u32>,
    #[arg(long)]
    torque_1: Option<f64>,
    #[arg(long)]
    k_1: Option<f64>,

    #[arg(long)]
    size_2: Option<String>,
    #[arg(long)]
    grade_2: Option<String>,
    #[arg(long)]
    bolts_2: Option<u32>,
    #[arg(long)]
    torque_2: Option<f64>,
    #[arg(long)]
    k_2: Option<f64>,
}

/// Request file contents
#[derive(Debug, Deserialize)]
struct CompareRequest {
    joint_1: JointInput,
    joint_2: JointInput,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the process exit status.
fn run(cli: &Cli) -> Result<u8> {
    let overrides = Overrides {
        threshold_percent: cli.threshold,
        strength_basis: cli.basis.clone(),
        strength_kind: cli.strength_kind.clone(),
    };
    let settings = config::load_settings(cli.config.as_deref(), &overrides)?;
    let reference = config::load_reference(cli.reference.as_deref())?;

    match &cli.command {
        Commands::Compare(args) => {
            let (input_1, input_2) = match &args.request {
                Some(path) => read_request(path)?,
                None => joints_from_flags(args),
            };
            evaluate(&reference, &settings, &input_1, &input_2, args.what_if, cli.json)
        }
        Commands::Prompt { what_if } => {
            println!("Bolted Joint Comparator");
            println!("=======================");
            println!();
            let (default_1, default_2) = prompt::default_joints();
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let input_1 = prompt::prompt_joint(&mut input, &mut output, &default_1).context("writing prompt")?;
            let input_2 = prompt::prompt_joint(&mut input, &mut output, &default_2).context("writing prompt")?;
            println!();
            evaluate(&reference, &settings, &input_1, &input_2, *what_if, cli.json)
        }
        Commands::Sizes => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(reference.fastener_sizes())?);
            } else {
                print!("{}", render::sizes_table(&reference));
            }
            Ok(STATUS_PASS)
        }
        Commands::Grades => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(reference.material_grades())?);
            } else {
                print!("{}", render::grades_table(&reference));
            }
            Ok(STATUS_PASS)
        }
        Commands::Formulas => {
            print!("{}", render::formula_catalog());
            Ok(STATUS_PASS)
        }
    }
}

fn read_request(path: &Path) -> Result<(JointInput, JointInput)> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading request from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading request {}", path.display()))?
    };
    let request: CompareRequest =
        serde_json::from_str(&text).with_context(|| format!("parsing request {}", path.display()))?;
    Ok((request.joint_1, request.joint_2))
}

/// Start from the prompt defaults and apply any per-joint flags.
fn joints_from_flags(args: &CompareArgs) -> (JointInput, JointInput) {
    let (mut joint_1, mut joint_2) = prompt::default_joints();

    if let Some(v) = &args.size_1 { joint_1.size = v.clone(); }
    if let Some(v) = &args.grade_1 { joint_1.grade = v.clone(); }
    if let Some(v) = args.bolts_1 { joint_1.quantity = v; }
    if let Some(v) = args.torque_1 { joint_1.torque_ftlb = v; }
    if let Some(v) = args.k_1 { joint_1.k_factor = v; }

    if let Some(v) = &args.size_2 { joint_2.size = v.clone(); }
    if let Some(v) = &args.grade_2 { joint_2.grade = v.clone(); }
    if let Some(v) = args.bolts_2 { joint_2.quantity = v; }
    if let Some(v) = args.torque_2 { joint_2.torque_ftlb = v; }
    if let Some(v) = args.k_2 { joint_2.k_factor = v; }

    (joint_1, joint_2)
}

fn report_error(error: &CalcError, json: bool) -> Result<u8> {
    if json {
        println!("{}", serde_json::to_string_pretty(error)?);
    } else {
        eprintln!("Error [{}]: {}", error.error_code(), error);
    }
    Ok(STATUS_ERROR)
}

fn evaluate(
    reference: &ReferenceData,
    settings: &CalcSettings,
    input_1: &JointInput,
    input_2: &JointInput,
    what_if: Option<f64>,
    json: bool,
) -> Result<u8> {
    // Same order as `check_joints`, but both joint results are kept so they
    // can still be reported when the ratio is undefined.
    let joints = input_1
        .validate()
        .and_then(|_| input_2.validate())
        .and_then(|_| Ok((compute_joint(reference, settings, input_1)?, compute_joint(reference, settings, input_2)?)));
    let (joint_1, joint_2) = match joints {
        Ok(joints) => joints,
        Err(e) => return report_error(&CalcError::from(e), json),
    };

    let comparison = compare_joints(&joint_1, &joint_2, settings.threshold_percent);

    let recommendations = match &comparison {
        Ok(c) if !c.passes() => {
            let check = JointComparison {
                joint_1: joint_1.clone(),
                joint_2: joint_2.clone(),
                comparison: c.clone(),
            };
            recommend(reference, settings, input_1, input_2, &check)?
        }
        _ => None,
    };
    let what_if = match what_if {
        Some(factor) => Some(torque_what_if(reference, settings, input_2, factor)?),
        None => None,
    };

    if json {
        let report = render::Report {
            generated_at: Utc::now(),
            settings,
            joint_1: &joint_1,
            joint_2: &joint_2,
            comparison: comparison.as_ref().ok(),
            error: comparison.as_ref().err().cloned().map(CalcError::from),
            recommendations: recommendations.as_ref(),
            what_if: what_if.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!(
            "{}",
            render::comparison_text(
                settings,
                &joint_1,
                &joint_2,
                comparison.as_ref(),
                recommendations.as_ref(),
                what_if.as_ref(),
            )
        );
    }

    Ok(match &comparison {
        Ok(c) if c.passes() => STATUS_PASS,
        Ok(_) => STATUS_FAIL,
        Err(e) => {
            log::warn!("comparison undefined: {}", e);
            STATUS_ERROR
        }
    })
}
