//! Branch change analysis.
//!
//! Collects the changed files, diff statistics, commit list, and (optionally)
//! the full diff between a base branch and `HEAD`. Large diffs are cut to a
//! line budget so tool responses stay within client token limits.

use crate::git::GitBackend;
use course_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Placeholder reported in `diff` when the diff was not requested.
pub const DIFF_NOT_INCLUDED: &str = "Diff not included (set include_diff=true to see full diff)";

/// Result of analyzing a branch against its base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeAnalysis {
    /// Branch the changes were compared against.
    pub base_branch: String,
    /// `git diff --name-status` output.
    pub files_changed: String,
    /// `git diff --stat` output.
    pub statistics: String,
    /// `git log --oneline` output.
    pub commits: String,
    /// Diff text, possibly truncated, or [`DIFF_NOT_INCLUDED`].
    pub diff: String,
    /// Whether the diff was cut to the line budget.
    pub truncated: bool,
    /// Line count of the full diff (0 when not requested).
    pub total_diff_lines: usize,
}

/// A diff cut to a line budget.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffExcerpt {
    /// Text to report.
    pub content: String,
    /// Whether lines were dropped.
    pub truncated: bool,
    /// Lines in the full diff, counting the segment after a trailing newline.
    pub total_lines: usize,
}

/// Keep at most `max_lines` lines of `diff`, appending a notice when cut.
pub fn truncate_diff(diff: &str, max_lines: usize) -> DiffExcerpt {
    let lines: Vec<&str> = diff.split('\n').collect();
    let total_lines = lines.len();

    if total_lines <= max_lines {
        return DiffExcerpt {
            content: diff.to_string(),
            truncated: false,
            total_lines,
        };
    }

    let mut content = lines[..max_lines].join("\n");
    content.push_str(&format!(
        "\n\n... Output truncated. Showing {max_lines} of {total_lines} lines ..."
    ));
    content.push_str("\n... Use max_diff_lines parameter to see more ...");

    DiffExcerpt {
        content,
        truncated: true,
        total_lines,
    }
}

/// Analyze the changes of `HEAD` against `base_branch`.
///
/// Only the changed-file listing must succeed; a failure there is reported
/// as [`Error::Git`] with git's stderr. The remaining commands contribute
/// whatever they print.
///
/// A `base_branch` starting with `-` is rejected before git runs, since git
/// would parse it as an option.
pub async fn analyze_changes(
    git: &dyn GitBackend,
    base_branch: &str,
    include_diff: bool,
    max_diff_lines: usize,
) -> Result<ChangeAnalysis> {
    if base_branch.starts_with('-') {
        return Err(Error::invalid_argument(format!(
            "base branch must not start with '-': {base_branch}"
        )));
    }

    let three_dot = format!("{base_branch}...HEAD");
    let two_dot = format!("{base_branch}..HEAD");

    let files = git.run(&["diff", "--name-status", &three_dot]).await?;
    if !files.success {
        return Err(Error::git(files.stderr.trim_end()));
    }

    let stats = git.run(&["diff", "--stat", &three_dot]).await?;

    let (diff, truncated, total_diff_lines) = if include_diff {
        let full = git.run(&["diff", &three_dot]).await?;
        let excerpt = truncate_diff(&full.stdout, max_diff_lines);
        (excerpt.content, excerpt.truncated, excerpt.total_lines)
    } else {
        (DIFF_NOT_INCLUDED.to_string(), false, 0)
    };

    let commits = git.run(&["log", "--oneline", &two_dot]).await?;

    tracing::debug!(
        base_branch,
        total_diff_lines,
        truncated,
        "Analyzed branch changes"
    );

    Ok(ChangeAnalysis {
        base_branch: base_branch.to_string(),
        files_changed: files.stdout,
        statistics: stats.stdout,
        commits: commits.stdout,
        diff,
        truncated,
        total_diff_lines,
    })
}
