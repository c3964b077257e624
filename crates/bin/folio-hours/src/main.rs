//! # folio-hours
//!
//! Adds study hours to the tracker widget of the portfolio page and
//! optionally commits and pushes the change.
//!
//! ```text
//! folio-hours [--file index.html] [--hours 2] [--goal 10000] [--push | --no-push]
//! ```
//!
//! Without `--push`/`--no-push` the user is asked before anything is
//! published. Logs go to stderr, filtered by `FOLIO_LOG` or `RUST_LOG`.

mod git;
mod updater;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use folio_domain::study_tracker::{DEFAULT_GOAL, HoursUpdate, group_thousands};

use crate::git::{PublishOutcome, Publisher};

#[derive(Parser, Debug)]
#[command(name = "folio-hours", about = "Add study hours to the portfolio tracker", version)]
struct Cli {
    /// Page holding the tracker
    #[arg(short, long, default_value = "index.html")]
    file: PathBuf,

    /// Hours to add
    #[arg(long, default_value_t = 2)]
    hours: u32,

    /// Hours goal for the progress bar
    #[arg(long, default_value_t = DEFAULT_GOAL, value_parser = clap::value_parser!(u32).range(1..))]
    goal: u32,

    /// Commit and push without asking
    #[arg(long, conflicts_with = "no_push")]
    push: bool,

    /// Update locally only, without asking
    #[arg(long)]
    no_push: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let update = updater::update_file(&cli.file, cli.hours, cli.goal)?;
    print_update(&update);

    let push = if cli.push {
        true
    } else if cli.no_push {
        false
    } else {
        ask_push(io::stdin().lock(), io::stdout().lock())?
    };

    if !push {
        println!("Study hours updated locally. Changes not pushed.");
        return Ok(());
    }

    let publisher = Publisher::for_file(&cli.file);
    let message = git::commit_message(cli.hours, &git::local_timestamp());
    match publisher.publish(&message) {
        Ok(PublishOutcome::Pushed) => {
            println!("Pushed the update.");
            Ok(())
        }
        Ok(PublishOutcome::NothingToCommit) => {
            println!("No changes to commit.");
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "publishing failed");
            println!("Study hours updated locally, but publishing failed.");
            println!("Publish manually with:");
            for command in git::manual_commands(publisher.file(), cli.hours) {
                println!("  {command}");
            }
            bail!(err)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_update(update: &HoursUpdate) {
    println!("Updated study hours:");
    println!("  Previous: {}", update.previous);
    println!("  New:      {}", update.current);
    println!("  Added:    {} hours", group_thousands(update.added));
}

/// Ask whether to publish until the answer is yes or no. End of input is no.
fn ask_push(input: impl BufRead, mut output: impl Write) -> io::Result<bool> {
    write!(output, "Push these changes? (y/n): ")?;
    output.flush()?;
    for line in input.lines() {
        match line?.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                write!(output, "Please enter 'y' or 'n': ")?;
                output.flush()?;
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn should_have_valid_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_default_to_index_and_two_hours() {
        let cli = Cli::parse_from(["folio-hours"]);
        assert_eq!(cli.file, PathBuf::from("index.html"));
        assert_eq!(cli.hours, 2);
        assert_eq!(cli.goal, DEFAULT_GOAL);
        assert!(!cli.push && !cli.no_push);
    }

    #[test]
    fn should_reject_push_with_no_push() {
        assert!(Cli::try_parse_from(["folio-hours", "--push", "--no-push"]).is_err());
    }

    #[test]
    fn should_reject_zero_goal() {
        assert!(Cli::try_parse_from(["folio-hours", "--goal", "0"]).is_err());
    }

    #[test]
    fn should_reprompt_until_clear_answer() {
        let mut output = Vec::new();
        let answer = ask_push("maybe\n YES \n".as_bytes(), &mut output).unwrap();
        assert!(answer);
        assert!(String::from_utf8(output).unwrap().contains("Please enter"));
    }

    #[test]
    fn should_treat_end_of_input_as_no() {
        assert!(!ask_push("".as_bytes(), io::sink()).unwrap());
    }
}
