use anyhow::Context;
use clap::{crate_description, crate_version, Arg, ArgAction, ArgMatches, Command};
use postats::{Analyzer, OutputFormat, PoFileSource, ReportConfig, ReportError};
use std::io::Write;
use std::path::PathBuf;
use tr::tr;

mod logging;

/// Everything a report run needs to know, taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Options {
    output: String,
    template: Option<PathBuf>,
    files: Vec<PathBuf>,
    verbosity: u8,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Options {
            output: matches
                .get_one::<String>("OUTPUT")
                .cloned()
                .unwrap_or_else(|| OutputFormat::default().to_string()),
            template: matches.get_one::<PathBuf>("TEMPLATE").cloned(),
            files: matches
                .get_many::<PathBuf>("INPUT")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            verbosity: matches.get_count("VERBOSE"),
        }
    }
}

fn command() -> Command {
    Command::new("gettext-report")
        .version(crate_version!())
        .about(crate_description!())
        .after_help(tr!(
            "Examples:\n  \
             # Generate a report for two specific .po files\n  \
             gettext-report french.po german.po\n\n  \
             # Generate a report for two specific .po files, including a template file\n  \
             gettext-report french.po german.po -t template.pot\n\n  \
             # (Bash) Generate a report for all .po files under the current directory\n  \
             gettext-report $(find . -name '*.po') -t template.pot"
        ))
        .arg(
            Arg::new("OUTPUT")
                .short('o')
                .long("output")
                .value_name("format")
                .default_value("table")
                .help(tr!("Output format: table or json")),
        )
        .arg(
            Arg::new("TEMPLATE")
                .short('t')
                .long("template")
                .value_name("file")
                .value_parser(clap::value_parser!(PathBuf))
                .help(tr!("Template (.pot) file")),
        )
        .arg(
            Arg::new("VERBOSE")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help(tr!("Log progress on stderr, repeat for more detail")),
        )
        .arg(
            Arg::new("INPUT")
                // not required: an empty list is reported by `run`
                .value_name(".po files")
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help(tr!("The .po files to report on")),
        )
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_matches(&command().get_matches());
    logging::init(options.verbosity);
    run(&options, std::io::stdout().lock())
}

/// Analyzes the files of `options` and writes the report to `out`.
///
/// Nothing is written unless every file could be analyzed.
fn run(options: &Options, out: impl Write) -> anyhow::Result<()> {
    if options.files.is_empty() {
        return Err(ReportError::NoFiles.into());
    }
    let format: OutputFormat = options.output.parse()?;

    let config = ReportConfig {
        template: options.template.clone(),
    };
    let analyzer = Analyzer::from_config(PoFileSource, &config)?;
    let report = analyzer.report(&options.files)?;
    tracing::info!(
        files = report.files.len(),
        count = report.total.count,
        diff = report.total.diff,
        "report complete"
    );

    format
        .render(&report, out)
        .context("could not write the report")
}
