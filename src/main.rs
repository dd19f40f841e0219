use clap::error::ErrorKind;
use clap::CommandFactory;
use device_component_sync::adapters::outbound::console::StderrProgressReporter;
use device_component_sync::adapters::outbound::filesystem::JsonInventoryStore;
use device_component_sync::application::dto::{ApplyRequest, ComparisonRequest};
use device_component_sync::application::factories::{FormatterFactory, PresenterFactory};
use device_component_sync::application::read_models::ReportBuilder;
use device_component_sync::application::use_cases::{
    ApplyComponentsUseCase, CompareComponentsUseCase, DeviceOverviewUseCase,
};
use device_component_sync::cli::{Args, Command};
use device_component_sync::config::{self, ConfigFile};
use device_component_sync::ports::outbound::ProgressReporter;
use device_component_sync::reconciliation::policies::{EqualityPolicy, SyncOptions};
use device_component_sync::reconciliation::services::ReportGenerator;
use device_component_sync::shared::error::ExitCode;
use device_component_sync::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(&args);

    let device_id = match args.device {
        Some(device_id) => device_id,
        None => Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "the following required argument was not provided: --device <DEVICE>",
            )
            .exit(),
    };

    match run(args, device_id) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr; RUST_LOG overrides the `-v` level.
fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args, device_id: u64) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let options = resolve_options(&args, config.as_ref());
    let config_format = match &config {
        Some(config) => config.output_format()?,
        None => None,
    };
    debug!(?options, "Resolved sync options");

    let store = JsonInventoryStore::open(&args.store)?;
    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let selection = args.command.selection().unwrap_or_default();
    match args.command {
        Command::Compare {
            kind,
            format,
            output,
        } => {
            let use_case = CompareComponentsUseCase::new(store, &reporter, options);
            let response = use_case.execute(ComparisonRequest::new(device_id, kind))?;

            let format = format.or(config_format).unwrap_or_default();
            reporter.report(FormatterFactory::progress_message(format));
            let report = ReportBuilder::comparison(
                &response,
                &ReportGenerator::generate_default_metadata(),
                &EqualityPolicy::from_options(&options),
            );
            let rendered = FormatterFactory::create(format).format_comparison(&report)?;
            present(&rendered, output)?;
            Ok(ExitCode::Success)
        }
        Command::Apply { kind, .. } => {
            let mut use_case = ApplyComponentsUseCase::new(store, &reporter, options);
            let outcome = use_case.execute(ApplyRequest::new(device_id, kind, selection))?;

            println!("{}", outcome.message(kind));
            if outcome.is_applied() {
                Ok(ExitCode::Success)
            } else {
                info!(%kind, device_id, "Apply rejected");
                Ok(ExitCode::ApplyRejected)
            }
        }
        Command::Overview { format, output } => {
            let use_case = DeviceOverviewUseCase::new(store, &reporter, options);
            let overview = use_case.execute(device_id)?;

            let format = format.or(config_format).unwrap_or_default();
            reporter.report(FormatterFactory::progress_message(format));
            let report =
                ReportBuilder::overview(&overview, &ReportGenerator::generate_default_metadata());
            let rendered = FormatterFactory::create(format).format_overview(&report)?;
            present(&rendered, output)?;
            Ok(ExitCode::Success)
        }
    }
}

/// Explicit `--config` must exist; otherwise look next to the inventory.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&store_dir(&args.store)),
    }
}

/// Command-line flags win over the config file, which wins over defaults.
fn resolve_options(args: &Args, config: Option<&ConfigFile>) -> SyncOptions {
    let mut options = match config {
        Some(config) => config.apply_to(SyncOptions::default()),
        None => SyncOptions::default(),
    };
    if args.ignore_descriptions {
        options = options.with_sync_descriptions(false);
    }
    if args.include_virtual {
        options = options.with_exclude_virtual_interfaces(false);
    }
    options
}

fn store_dir(store: &Path) -> PathBuf {
    match store.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn present(rendered: &str, output: Option<PathBuf>) -> Result<()> {
    PresenterFactory::create(output.into()).present(rendered)
}
