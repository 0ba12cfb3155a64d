use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{debug, info};

use contentqc::input::{CriteriaDoc, InputError, file_name, load_criteria, read_text};
use contentqc::logging::init_logging;
use contentqc::model::criteria::CriteriaFamily;
use contentqc::pipeline::stage6_report::{ReportError, ReportInput, write_reports};
use contentqc::report::text::{render_tab, tab_heading};
use contentqc::view::{Dashboard, SortConfig, SortKey, Tab};

const TOOL_NAME: &str = "contentqc";

#[derive(Debug, Parser)]
#[command(name = "contentqc")]
#[command(about = "Content quality scorecard over rubric score exports")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a CSV export and write the report files.
    Run(RunArgs),
    /// Score a CSV export and print one dashboard tab.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Score export (CSV, optionally gzip-compressed).
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    wq_criteria: Option<PathBuf>,
    #[arg(long)]
    tv_criteria: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ViewArgs {
    /// Detailed view sort column, e.g. PageTitle, OverallWQScore, WQ3.
    #[arg(long, default_value = "PageTitle")]
    sort: SortKey,
    #[arg(long, default_value_t = false)]
    descending: bool,
    /// Case-insensitive page title filter for the detailed view.
    #[arg(long, default_value = "")]
    filter: String,
    #[arg(long, default_value = "OverallWQScore")]
    action_sort: SortKey,
    #[arg(long, default_value_t = false)]
    action_descending: bool,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[command(flatten)]
    input: InputArgs,
    #[command(flatten)]
    view: ViewArgs,
    #[arg(long)]
    out: PathBuf,
    /// Include per-page sub-criteria in report.txt.
    #[arg(long, default_value_t = false)]
    expand: bool,
}

#[derive(Debug, Args)]
struct ShowArgs {
    #[command(flatten)]
    input: InputArgs,
    #[command(flatten)]
    view: ViewArgs,
    #[arg(long, value_enum, default_value_t = TabArg::Snapshot)]
    tab: TabArg,
    #[arg(long, default_value_t = false)]
    expand: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TabArg {
    Snapshot,
    ActionNeeded,
    Detailed,
    Criteria,
}

impl From<TabArg> for Tab {
    fn from(value: TabArg) -> Self {
        match value {
            TabArg::Snapshot => Tab::Snapshot,
            TabArg::ActionNeeded => Tab::ActionNeeded,
            TabArg::Detailed => Tab::DetailedView,
            TabArg::Criteria => Tab::CriteriaDocs,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{path}: {source}", path = .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: InputError,
    },
    #[error("{file}: {message}")]
    Scores { file: String, message: String },
    #[error("failed to write reports: {0}")]
    Report(#[from] ReportError),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Run(args) => {
            let dashboard = build_dashboard(&args.input, &args.view)?;
            let input = ReportInput {
                dashboard: &dashboard,
                tool_name: TOOL_NAME.to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                expand: args.expand,
            };
            write_reports(&input, &args.out)?;
        }
        Command::Show(args) => {
            let dashboard =
                build_dashboard(&args.input, &args.view)?.select_tab(args.tab.into());
            let tab = dashboard.active_tab();
            println!("{}", tab_heading(&dashboard, tab));
            print!("{}", render_tab(&dashboard, tab, args.expand));
        }
    }
    Ok(())
}

fn build_dashboard(input: &InputArgs, view: &ViewArgs) -> Result<Dashboard, CliError> {
    let text = read_text(&input.input).map_err(|source| CliError::Input {
        path: input.input.clone(),
        source,
    })?;
    let csv_name = file_name(&input.input);
    let mut dashboard = Dashboard::default().load_scores(&csv_name, &text);
    if let Some(message) = dashboard.error() {
        return Err(CliError::Scores {
            file: csv_name,
            message: message.to_string(),
        });
    }

    for (family, path) in [
        (CriteriaFamily::WritingQuality, &input.wq_criteria),
        (CriteriaFamily::TopicValue, &input.tv_criteria),
    ] {
        if let Some(path) = path {
            dashboard = dashboard.load_criteria(family, read_criteria(path)?);
        }
    }

    let dashboard = dashboard
        .with_detailed_sort(sort_config(view.sort, view.descending))
        .with_action_sort(sort_config(view.action_sort, view.action_descending))
        .filter_detailed(&view.filter);
    debug!(
        "detailed sort {}, action sort {}, filter {:?}",
        view.sort, view.action_sort, view.filter
    );
    info!(
        "{} pages, {} need action",
        dashboard.scored_pages().len(),
        dashboard.action_needed().len()
    );
    Ok(dashboard)
}

fn read_criteria(path: &Path) -> Result<CriteriaDoc, CliError> {
    load_criteria(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

fn sort_config(key: SortKey, descending: bool) -> SortConfig {
    if descending {
        SortConfig::descending(key)
    } else {
        SortConfig::ascending(key)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
