use calverlex::application::{NextTagRequest, NextTagService};
use calverlex::cli::{self, Cli, OutputFormat};
use calverlex::error::CalverError;
use calverlex::infrastructure::{logging, Config, LogStyle};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    let format = OutputFormat::detect(cli.format);

    logging::init(match format {
        OutputFormat::Plain => LogStyle::Plain,
        OutputFormat::Actions => LogStyle::Workflow,
    });

    match run(cli, format) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            if let Some(line) = cli::format_failure(&e.to_string(), format) {
                println!("{}", line);
            }
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, format: OutputFormat) -> Result<(), CalverError> {
    let config = Config::load(cli.config.as_deref())?;

    let instant = cli.date.as_deref().map(parse_instant).transpose()?;
    let repository = cli
        .repository
        .or_else(|| std::env::var("GITHUB_REPOSITORY").ok());

    let request = NextTagRequest {
        instant,
        year_format: cli.year_format,
        current_version: cli.current_version,
        repository,
        token: cli.token,
    };

    let next = NextTagService::new(config).execute(&request)?;
    let tag = next.tag.to_string();

    println!("{}", cli::format_tag(&tag, format));
    if format == OutputFormat::Actions {
        if let Some(path) = std::env::var_os("GITHUB_OUTPUT").filter(|p| !p.is_empty()) {
            cli::write_github_output(&PathBuf::from(path), &tag)?;
        }
    }

    Ok(())
}

fn parse_instant(input: &str) -> Result<DateTime<Utc>, CalverError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CalverError::InvalidDate(input.to_string()))
}
