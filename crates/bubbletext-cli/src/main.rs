//! bubbletext - format assistant replies for the dashboard chat pane

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bubbletext_core::{
    Message, Role, failure_text, format_assistant_text, reply_text, trace_stages,
};

#[derive(Parser)]
#[command(name = "bubbletext")]
#[command(version, about = "Render chat text as safe bubble markup", long_about = None)]
#[command(after_help = "EXAMPLES:
    bubbletext answer.txt               Format assistant text
    bubbletext --role user question.txt Escape user text without formatting
    bubbletext --reply reply.json       Format the display text of a chat reply
    bubbletext --stages answer.txt      Show every pipeline stage")]
struct Cli {
    /// Input file (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Whose message the input is
    #[arg(long, value_enum, default_value_t = RoleArg::Assistant)]
    role: RoleArg,

    /// Treat the input as a JSON chat reply
    #[arg(long, conflicts_with = "failure")]
    reply: bool,

    /// Treat the input as the body of a failed chat request
    #[arg(long)]
    failure: bool,

    /// Print the output of each pipeline stage
    #[arg(long, conflicts_with = "text")]
    stages: bool,

    /// Stop before escaping and print the canonical text
    #[arg(long)]
    text: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    User,
    Assistant,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::User => Role::User,
            RoleArg::Assistant => Role::Assistant,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<String> {
    let source = read_input(cli.input.as_deref())?;
    let text = if cli.reply {
        reply_text(&source).context("failed to read chat reply")?
    } else if cli.failure {
        failure_text(Some(&source))
    } else {
        source
    };

    let role = if cli.reply || cli.failure {
        Role::Assistant
    } else {
        cli.role.into()
    };
    debug!(%role, len = text.len(), "formatting message");

    if role == Role::User {
        return Ok(Message::user(text).content().to_inner_html());
    }
    if cli.text {
        return Ok(format_assistant_text(Some(&text)));
    }
    if cli.stages {
        return Ok(render_stages(&text));
    }
    Ok(Message::assistant(text).content().to_inner_html())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {path}")),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn render_stages(text: &str) -> String {
    let mut out = String::new();
    for (stage, output) in trace_stages(Some(text)) {
        out.push_str(&format!("== {stage}\n{output}\n"));
    }
    out
}
