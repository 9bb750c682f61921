//! CLI Adapter.

mod prompt;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::app::api::{self, DoctorOptions};
use crate::app::commands::cgi::{self, CgiRequest};
use crate::app::commands::generate::{self, GenerateFormat};
use crate::app::commands::{install, screens};
use crate::app::{AppContext, logging};
use crate::domain::request::validate_language;
use crate::domain::{AppError, RawRequest};

#[derive(Parser)]
#[command(name = "rpidsm")]
#[command(version)]
#[command(about = "Generate Raspberry Pi display setup scripts", long_about = None)]
struct Cli {
    /// Configuration file (defaults to $RPIDSM_CONFIG, then ./rpidsm.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Request parameters shared by the generating commands.
#[derive(Args, Debug, Clone, Default)]
struct RequestArgs {
    /// Screen id from the catalog
    #[arg(long)]
    id: Option<String>,
    /// Rotation in degrees: 0, 90, 180 or 270
    #[arg(long)]
    rot: Option<String>,
    /// Target OS: bookworm64, bookworm32, bullseye64 or bullseye32
    #[arg(long)]
    os: Option<String>,
    /// Output language: zh or en
    #[arg(long)]
    lang: Option<String>,
}

impl From<RequestArgs> for RawRequest {
    fn from(args: RequestArgs) -> Self {
        RawRequest { id: args.id, rot: args.rot, os: args.os, lang: args.lang }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parameter summary and the generated script
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        request: RequestArgs,
        /// Print the JSON description instead
        #[arg(long, conflicts_with = "interactive")]
        json: bool,
        /// Prompt for parameters not given on the command line
        #[arg(short, long)]
        interactive: bool,
    },
    /// Print only the script, for piping into bash
    #[clap(visible_alias = "i")]
    Install {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// List supported screens
    #[clap(visible_alias = "ls")]
    Screens {
        /// Language for screen names: zh or en
        #[arg(long)]
        lang: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the one-line `curl | sudo bash` install command
    Command {
        #[command(flatten)]
        request: RequestArgs,
        /// Override [delivery] base_url
        #[arg(long, value_name = "URL")]
        base_url: Option<Url>,
    },
    /// Validate the screen catalog and script template
    Doctor {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
    /// Answer one CGI request described by the environment
    Cgi,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn dispatch(cli: Cli) -> Result<i32, AppError> {
    let ctx = api::load_context(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate { request, json, interactive } => {
            run_generate(&ctx, request.into(), json, interactive)
        }
        Commands::Install { request } => {
            let script = install::execute(&ctx, &request.into())?;
            write_stdout(&script)?;
            Ok(0)
        }
        Commands::Screens { lang, json } => run_screens(&ctx, lang, json).map(|_| 0),
        Commands::Command { request, base_url } => {
            let line = api::install_command(&ctx, &request.into(), base_url.as_ref())?;
            println!("{}", line);
            Ok(0)
        }
        Commands::Doctor { strict } => {
            api::doctor(&ctx, DoctorOptions { strict }).map(|outcome| outcome.exit_code)
        }
        Commands::Cgi => {
            write_stdout(&cgi::execute(&ctx, &CgiRequest::from_env()))?;
            Ok(0)
        }
    }
}

fn run_generate(
    ctx: &AppContext,
    raw: RawRequest,
    json: bool,
    interactive: bool,
) -> Result<i32, AppError> {
    let raw = if interactive {
        match prompt::complete_request(ctx, raw)? {
            Some(raw) => raw,
            None => return Ok(0),
        }
    } else {
        raw
    };

    let format = if json { GenerateFormat::Json } else { GenerateFormat::Text };
    let output = generate::execute(ctx, &raw, format)?;
    println!("{}", output.trim_end());
    Ok(0)
}

fn run_screens(ctx: &AppContext, lang: Option<String>, json: bool) -> Result<(), AppError> {
    let language = match lang {
        Some(value) => validate_language(value.trim())?,
        None => ctx.service().defaults().language,
    };
    let listings = api::list_screens(ctx, language);

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
    } else {
        print!("{}", screens::format_table(&listings));
    }
    Ok(())
}

fn write_stdout(text: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
