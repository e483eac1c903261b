//! `symex-glue` binary: a small CLI exercising ADA and LTL end to end, for
//! manual inspection and as the driver behind `tests/end_to_end.rs` (spec
//! SPEC_FULL §6, "Expansion — configuration"). Not a production surface —
//! `lift` reads the ad hoc textual format from [`symex_glue::decls`], never
//! LLVM syntax (parsing that is out of scope, spec §1).

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ada::{ValueBound, ValueRange};
use layout::DataLayout;
use symex_glue::decls::parse_decls;

#[derive(Parser)]
#[command(name = "symex-glue", about = "Drive the LLVM type lifter and the abstract domain algebra from the command line")]
struct Cli {
    /// Tracing filter; defaults to `info`, overridable via `RUST_LOG`.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Named data-layout preset passed to the type lifter.
    #[arg(long, default_value = "x86_64-linux")]
    target: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lift a file of type declarations (see `symex_glue::decls` for the
    /// grammar) and print the resulting alias map and any errors.
    Lift {
        file: PathBuf,
    },
    /// Evaluate one ADA range operation on two `lo,hi` integer ranges given
    /// on the command line, e.g. `range mul -2,3 -4,5`.
    Range {
        op: String,
        a: String,
        b: String,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn parse_range(text: &str) -> Result<ValueRange<i128>, String> {
    match text.split_once(',') {
        Some((lo, hi)) => {
            let lo: i128 = lo.trim().parse().map_err(|_| format!("not an integer: `{}`", lo))?;
            let hi: i128 = hi.trim().parse().map_err(|_| format!("not an integer: `{}`", hi))?;
            Ok(ValueRange::multi(ValueBound::Inclusive(lo), ValueBound::Inclusive(hi)))
        }
        None => {
            let n: i128 = text.trim().parse().map_err(|_| format!("not an integer: `{}`", text))?;
            Ok(ValueRange::single(n))
        }
    }
}

fn run_range(op: &str, a: &str, b: &str) -> Result<String, String> {
    let ra = parse_range(a)?;
    let rb = parse_range(b)?;
    let result = match op {
        "join" => format!("{:?}", ValueRange::join(&ra, &rb)),
        "add" => format!("{:?}", ValueRange::add(&ra, &rb)),
        "mul" => format!("{:?}", ValueRange::mul(&ra, &rb)),
        "overlap" => format!("{}", ValueRange::overlap(&ra, &rb)),
        "eq" => format!("{:?}", ValueRange::check_eq(&ra, &rb)),
        "le" => format!("{:?}", ValueRange::check_le(&ra, &rb)),
        other => return Err(format!("unknown range op `{}` (expected join/add/mul/overlap/eq/le)", other)),
    };
    Ok(result)
}

fn run_lift(target: &str, file: &PathBuf) -> Result<String, String> {
    let data_layout = DataLayout::preset(target).map_err(|e| e.to_string())?;
    let text = fs::read_to_string(file).map_err(|e| format!("reading {}: {}", file.display(), e))?;
    let (idents, decl_list) = parse_decls(&text).map_err(|e| e.to_string())?;
    let (errors, ctx) = ltl::mk_context(data_layout, Default::default(), decl_list.clone());

    let mut out = String::new();
    for (id, _) in &decl_list {
        let sym = ctx.lookup_alias(*id).expect("every declared ident is in the alias map");
        out.push_str(&format!("{} = {:?}\n", idents.get(*id), sym));
    }
    if errors.is_empty() {
        out.push_str("(no errors)\n");
    } else {
        out.push_str("errors:\n");
        for err in &errors {
            out.push_str(&format!("  {}\n", err));
        }
    }
    Ok(out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match &cli.command {
        Command::Lift { file } => run_lift(&cli.target, file),
        Command::Range { op, a, b } => run_range(op, a, b),
    };

    match result {
        Ok(out) => {
            print!("{}", out);
            if !out.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("error: {}", msg);
            ExitCode::FAILURE
        }
    }
}
