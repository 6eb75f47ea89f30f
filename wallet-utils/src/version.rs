//! Client version and user-agent parsing

use serde::{Deserialize, Serialize};

/// Agent prefixes reported by older client libraries, all normalized to `bwc`
const LEGACY_AGENTS: [&str; 2] = ["bwc", "bws"];

/// Canonical name for the legacy agent aliases
const CANONICAL_AGENT: &str = "bwc";

/// A parsed `<agent>-<major>.<minor>.<patch>` client version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub agent: String,
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
}

/// Wallet applications recognized in user-agent strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum App {
    Copay,
    Bitpay,
    Other,
}

impl App {
    /// Identifiers searched for, in priority order
    const KNOWN: [App; 2] = [App::Copay, App::Bitpay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Copay => "copay",
            Self::Bitpay => "bitpay",
            Self::Other => "other",
        }
    }
}

/// A parsed application version from a user-agent string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppVersionInfo {
    pub app: App,
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
}

/// Parse a client version such as `bwc-8.3.1`.
///
/// A string without exactly one `-` is taken whole as the agent name, with
/// no version numbers. Returns `None` for absent or empty input.
pub fn parse_version(version: Option<&str>) -> Option<VersionInfo> {
    let version = version.filter(|v| !v.is_empty())?;

    let parts: Vec<&str> = version.split('-').collect();
    let [agent, numbers] = parts[..] else {
        return Some(VersionInfo {
            agent: version.to_string(),
            major: None,
            minor: None,
            patch: None,
        });
    };

    let agent = if LEGACY_AGENTS.contains(&agent) {
        CANONICAL_AGENT
    } else {
        agent
    };

    let mut fields = numbers.split('.');
    let major = fields.next().and_then(parse_int);
    let minor = fields.next().and_then(parse_int);
    let patch = fields.next().and_then(parse_int);

    Some(VersionInfo {
        agent: agent.to_string(),
        major,
        minor,
        patch,
    })
}

/// Parse the wallet application and its version out of a user-agent.
///
/// Matching is case-insensitive and `copay` wins over `bitpay`. An agent
/// naming neither app yields `App::Other` without version numbers.
pub fn parse_app_version(agent: Option<&str>) -> Option<AppVersionInfo> {
    let agent = agent.filter(|a| !a.is_empty())?.to_lowercase();

    let found = App::KNOWN
        .into_iter()
        .find_map(|app| agent.find(app.as_str()).map(|at| (app, at)));

    let Some((app, at)) = found else {
        return Some(AppVersionInfo {
            app: App::Other,
            major: None,
            minor: None,
            patch: None,
        });
    };

    let rest = &agent[at + app.as_str().len()..];
    let mut fields = rest.split('.');
    let major = fields.next().and_then(|field| {
        let digits: String = field.chars().filter(char::is_ascii_digit).collect();
        parse_int(&digits)
    });
    let minor = fields.next().and_then(parse_int);
    let patch = fields.next().and_then(parse_int);

    Some(AppVersionInfo {
        app,
        major,
        minor,
        patch,
    })
}

/// Leading-integer parse: skips leading whitespace, then reads the longest
/// run of ASCII digits. `None` when there are no digits.
fn parse_int(field: &str) -> Option<u64> {
    let field = field.trim_start();
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().ok()
}
