#![warn(clippy::uninlined_format_args)]

use splitpot_application::{
    CurrencyCode, SettlementReport, SplitId, SplitService, validate_contributions,
};
use splitpot_infrastructure::{JsonSplitStore, parse_contributions};
use splitpot_presentation::SettlementPresenter;
use std::{borrow::Cow, env, fs, process};

const DEFAULT_DATA_DIR: &str = ".splitpot";

type CliResult<T> = Result<T, Cow<'static, str>>;

struct CliArgs {
    file: String,
    save_as: Option<SplitId>,
}

fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let args = parse_args(env::args().skip(1))?;

    let source = fs::read_to_string(&args.file)
        .map_err(|err| format!("Failed to read '{}': {err}", args.file))?;
    let contributors = parse_contributions(&source).map_err(|err| err.to_string())?;
    validate_contributions(&contributors).map_err(|err| err.to_string())?;

    let currency = env::var("SPLITPOT_CURRENCY")
        .map(CurrencyCode::new)
        .unwrap_or_default();

    let report = SettlementReport::compute(&contributors);
    let view = SettlementPresenter::render(&report, &currency);

    println!("{}", view.balance_table);
    match &view.transfer_table {
        Some(table) => println!("\n{table}"),
        None if contributors.len() < 2 => {
            println!("\nNothing to settle yet: a split needs at least two contributors.");
        }
        None => println!("\nEveryone is settled."),
    }

    if let Some(id) = args.save_as {
        let data_dir =
            env::var("SPLITPOT_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let store = JsonSplitStore::open(&data_dir)
            .map_err(|err| format!("Failed to open split store in '{data_dir}': {err}"))?;
        let service = SplitService::new(&store);
        let split = service
            .import_split(id, currency, contributors)
            .map_err(|err| err.to_string())?;
        tracing::info!(split = %split.id, dir = %data_dir, "split saved");
        println!("\nSaved split '{}' to {data_dir}", split.id);
    }

    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> CliResult<CliArgs> {
    let mut file = None;
    let mut save_as = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--save" => {
                let id = args
                    .next()
                    .ok_or(Cow::Borrowed("--save requires a split id"))?;
                save_as = Some(SplitId::new(id));
            }
            _ if file.is_none() => file = Some(arg),
            _ => return Err(format!("Unexpected argument '{arg}'").into()),
        }
    }

    let Some(file) = file else {
        return Err("Usage: splitpot <contributions-file> [--save <split-id>]".into());
    };

    Ok(CliArgs { file, save_as })
}
