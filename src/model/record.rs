//! History records and their display projection.
//!
//! A [`Dataset`] is built once at startup and never mutated. The table never
//! holds records directly; it holds [`VisibleRow`]s produced by the filter on
//! every pass.

use chrono::{DateTime, Duration, Utc};

// ===== Record =====

/// A single shell history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    timestamp: DateTime<Utc>,
    directory: String,
    command: String,
}

impl Record {
    /// Create a new record.
    pub fn new(
        timestamp: DateTime<Utc>,
        directory: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            directory: directory.into(),
            command: command.into(),
        }
    }

    /// When the command was run.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Working directory the command was run in.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The command line itself.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Project this record into a display row, rendering the timestamp
    /// relative to `now`.
    pub fn to_visible_row(&self, now: DateTime<Utc>) -> VisibleRow {
        VisibleRow::new(
            format_age(now - self.timestamp),
            self.directory.clone(),
            self.command.clone(),
        )
    }
}

// ===== VisibleRow =====

/// Display-ready projection of a [`Record`]: (time, directory, command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    time: String,
    directory: String,
    command: String,
}

impl VisibleRow {
    /// Create a row from its three display cells.
    pub fn new(
        time: impl Into<String>,
        directory: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            directory: directory.into(),
            command: command.into(),
        }
    }

    /// Time cell.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Directory cell.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Command cell.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The three cells in column order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.time, &self.directory, &self.command]
    }
}

/// Render an age as a short label that fits the 4-wide Time column.
///
/// Negative ages (clock skew) render as "now".
pub fn format_age(age: Duration) -> String {
    let secs = age.num_seconds();
    if secs < 60 {
        "now".to_string()
    } else if secs < 3_600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3_600)
    } else if secs < 7 * 86_400 {
        format!("{}d", secs / 86_400)
    } else {
        format!("{}w", secs / (7 * 86_400))
    }
}

// ===== Dataset =====

/// Immutable, ordered collection of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
    reference_time: DateTime<Utc>,
}

impl Dataset {
    /// Build a dataset whose ages are rendered relative to `reference_time`.
    pub fn new(records: Vec<Record>, reference_time: DateTime<Utc>) -> Self {
        Self {
            records,
            reference_time,
        }
    }

    /// Records in dataset order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The instant ages are measured from.
    pub fn reference_time(&self) -> DateTime<Utc> {
        self.reference_time
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build a dataset from `(directory, command)` pairs all stamped `now`.
    pub fn from_commands<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
        now: DateTime<Utc>,
    ) -> Self {
        let records = entries
            .into_iter()
            .map(|(dir, cmd)| Record::new(now, dir, cmd))
            .collect();
        Self::new(records, now)
    }

    /// The compiled-in sample history, stamped at `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self::from_commands(SAMPLE_HISTORY.iter().copied(), now)
    }
}

const SAMPLE_HISTORY: &[(&str, &str)] = &[
    ("~/git/betterstack", "git push"),
    ("~/git/betterstack", "git commit"),
    ("~/git/betterstack", "git push --force"),
    ("~/git/betterstack", "git commit --message 'fix: fix something'"),
    ("~/git/betterstack", "git rebase"),
    ("~/git/betterstack", "git stash"),
    ("~/git/betterstack", "git pull"),
    ("~/git/betterstack", "bin/dev"),
    ("~/git/logtail", "git push"),
    ("~/git/logtail", "git commit"),
    ("~/git/logtail", "git rebase"),
    ("~/git/logtail", "git merge"),
    ("~/git/logtail", "git cherry-pick"),
    ("~/git/logtail", "bin/dev-server"),
    ("~/git/uptime", "git commit"),
    ("~/git/uptime", "git push --force"),
    ("~/git/uptime", "git merge"),
    ("~/git/uptime", "git push"),
    ("~/git/uptime", "git commit -m 'fix: fix something'"),
    ("~/git/uptime", "bin/dev-server"),
    ("~", "netstat -tlnp"),
    ("~", "ps aux"),
    ("~", "top"),
    ("~", "htop"),
    ("~", "ls -la"),
    ("~", "tree dotfiles"),
    ("~", "tree .config"),
    ("~", "ncdu -x"),
    ("~", "du -sh *"),
    ("~", "du -sh .config/*"),
    ("~", "man curl"),
];
