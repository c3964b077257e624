//! Commits and pushes the updated page with the `git` command line.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, info};

/// Errors raised while publishing the change.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git is not installed or not in PATH")]
    NotFound(#[source] io::Error),

    #[error("failed to run git {step}")]
    Spawn {
        step: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("git {step} failed: {stderr}")]
    Failed { step: &'static str, stderr: String },
}

/// What [`Publisher::publish`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Pushed,
    NothingToCommit,
}

/// Runs the git sequence for one file inside its repository.
pub struct Publisher {
    workdir: PathBuf,
    file: String,
}

impl Publisher {
    /// Publisher for `path`; git runs in the file's directory.
    #[must_use]
    pub fn for_file(path: &Path) -> Self {
        let workdir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let file = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |f| f.to_string_lossy().into_owned());
        Self { workdir, file }
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Stage, commit and push the file.
    ///
    /// # Errors
    ///
    /// Returns the first failing git step.
    pub fn publish(&self, message: &str) -> Result<PublishOutcome, GitError> {
        self.run("status", &["status", "--short"])?;
        self.run("add", &["add", &self.file])?;

        let staged = self.git(&["diff", "--cached", "--quiet"], "diff")?;
        if staged.status.success() {
            info!("no changes to commit");
            return Ok(PublishOutcome::NothingToCommit);
        }

        self.run("commit", &["commit", "-m", message])?;
        self.run("push", &["push"])?;
        Ok(PublishOutcome::Pushed)
    }

    fn run(&self, step: &'static str, args: &[&str]) -> Result<Output, GitError> {
        let output = self.git(args, step)?;
        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            debug!(step, stdout = %stdout.trim(), "git step succeeded");
            Ok(output)
        } else {
            Err(GitError::Failed {
                step,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    fn git(&self, args: &[&str], step: &'static str) -> Result<Output, GitError> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => GitError::NotFound(source),
                _ => GitError::Spawn { step, source },
            })
    }
}

/// Commit message for an update adding `hours`, stamped with `timestamp`.
#[must_use]
pub fn commit_message(hours: u32, timestamp: &str) -> String {
    format!("Update study hours (+{hours} hours) - {timestamp}")
}

/// Current local time as used in commit messages.
#[must_use]
pub fn local_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Commands to publish the change by hand.
#[must_use]
pub fn manual_commands(file: &str, hours: u32) -> [String; 3] {
    [
        format!("git add {file}"),
        format!("git commit -m 'Update study hours (+{hours} hours)'"),
        "git push".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_commit_message() {
        assert_eq!(
            commit_message(2, "2026-01-31 18:00:00"),
            "Update study hours (+2 hours) - 2026-01-31 18:00:00"
        );
    }

    #[test]
    fn should_run_in_file_directory() {
        let publisher = Publisher::for_file(Path::new("site/index.html"));
        assert_eq!(publisher.workdir, PathBuf::from("site"));
        assert_eq!(publisher.file(), "index.html");
    }

    #[test]
    fn should_use_current_directory_for_bare_file_name() {
        let publisher = Publisher::for_file(Path::new("index.html"));
        assert_eq!(publisher.workdir, PathBuf::from("."));
    }

    #[test]
    fn should_list_manual_commands_for_file() {
        let commands = manual_commands("index.html", 3);
        assert_eq!(commands[0], "git add index.html");
        assert!(commands[1].contains("+3 hours"));
    }

    #[test]
    fn should_timestamp_with_seconds() {
        assert_eq!(local_timestamp().len(), "2026-01-31 18:00:00".len());
    }
}
