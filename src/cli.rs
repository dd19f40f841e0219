use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::reconciliation::domain::{ComponentKind, Selection};

/// Compare and synchronize device components against their device type templates
#[derive(Parser, Debug)]
#[command(name = "component-sync")]
#[command(version)]
#[command(about = "Compare and synchronize device components against their device type templates", long_about = None)]
pub struct Args {
    /// Path to the JSON inventory holding devices, templates and components
    #[arg(short, long, global = true, default_value = "inventory.json")]
    pub store: PathBuf,

    /// Id of the device to reconcile
    #[arg(short, long, global = true)]
    pub device: Option<u64>,

    /// Path to a config file (defaults to component-sync.config.yml next to the inventory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Ignore description differences when comparing
    #[arg(long, global = true)]
    pub ignore_descriptions: bool,

    /// Keep virtual, bridge and LAG interfaces in interface comparisons
    #[arg(long, global = true)]
    pub include_virtual: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compare one component kind of a device against its templates
    Compare {
        /// Component kind, e.g. interface, power-outlet, front-port
        #[arg(short, long)]
        kind: ComponentKind,

        /// Output format: markdown or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add, remove and re-sync components of one kind
    Apply {
        /// Component kind, e.g. interface, power-outlet, front-port
        #[arg(short, long)]
        kind: ComponentKind,

        /// Template ids to create on the device
        #[arg(long, value_name = "TEMPLATE_ID", value_delimiter = ',')]
        add: Vec<u64>,

        /// Component ids to delete from the device
        #[arg(long, value_name = "COMPONENT_ID", value_delimiter = ',')]
        remove: Vec<u64>,

        /// Component ids to rename and update from their template
        #[arg(long, value_name = "COMPONENT_ID", value_delimiter = ',')]
        sync: Vec<u64>,
    },
    /// Summarize every component kind of a device
    Overview {
        /// Output format: markdown or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Tracing filter directive matching `-v` occurrences
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl Command {
    /// The selection carried by an `apply` command
    pub fn selection(&self) -> Option<Selection> {
        match self {
            Command::Apply {
                add, remove, sync, ..
            } => Some(Selection::new(
                add.iter().copied(),
                remove.iter().copied(),
                sync.iter().copied(),
            )),
            _ => None,
        }
    }
}
