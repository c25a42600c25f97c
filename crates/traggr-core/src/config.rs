//! Session options: host-parser args layered over rc-file defaults.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::traceback::TracebackStyle;

/// Rc file looked up in the home directory.
pub const RC_FILE_NAME: &str = ".traggr.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required option absent from both the command line and the rc file.
    /// The display text is the instruction shown to the operator.
    #[error("please specify --traggr-{option}")]
    MissingOption { option: &'static str },

    #[error("failed to parse rc file {path}: {source}")]
    RcParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Option block a host harness flattens into its own parser.
#[derive(Debug, Default, Clone, Args)]
pub struct TraggrArgs {
    /// Test results aggregation API URL.
    #[arg(long = "traggr-api-url", env = "TRAGGR_API_URL")]
    pub api_url: Option<String>,

    /// Project name, for which the results will be posted.
    #[arg(long = "traggr-project", env = "TRAGGR_PROJECT")]
    pub project: Option<String>,

    /// Sprint name, for which the results will be posted.
    #[arg(long = "traggr-sprint", env = "TRAGGR_SPRINT")]
    pub sprint: Option<String>,

    /// Component name, for which the results will be posted.
    #[arg(long = "traggr-component", env = "TRAGGR_COMPONENT")]
    pub component: Option<String>,

    /// Comment included into each test result.
    #[arg(long = "traggr-comment")]
    pub comment: Option<String>,

    /// Comma-separated test attributes included into results when a test has
    /// them.
    #[arg(long = "traggr-test-attrs")]
    pub test_attrs: Option<String>,

    /// Test attribute used as the test id.
    #[arg(long = "traggr-test-id-attr")]
    pub test_id_attr: Option<String>,

    /// Verbose adapter logging.
    #[arg(long = "traggr-verbose")]
    pub verbose: bool,
}

/// Defaults read from `~/.traggr.yaml`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RcConfig {
    pub api_url: Option<String>,
    pub project: Option<String>,
    pub sprint: Option<String>,
    pub component: Option<String>,
    pub test_attrs: Option<String>,
    pub test_id_attr: Option<String>,
}

impl RcConfig {
    /// Load defaults from the user's rc file; a missing file is fine.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(home) = dirs::home_dir() else {
            return Ok(Self::default());
        };
        Self::load_from(&home.join(RC_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(path = %path.display(), "no rc file");
                return Ok(Self::default());
            }
        };
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::RcParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fixed parameters of one collection session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub api_url: String,
    pub project: String,
    pub sprint: String,
    pub component: String,
    pub comment: Option<String>,
    /// Attribute names pulled off each test method, in order.
    pub test_attrs: Vec<String>,
    /// Attribute holding the test id.
    pub test_id_attr: String,
    pub traceback_style: TracebackStyle,
    /// Hosts map this onto their log filter.
    pub verbose: bool,
}

impl SessionConfig {
    /// Merge host-parser args over rc defaults. Every required option must be
    /// present somewhere before a session may start.
    pub fn resolve(args: TraggrArgs, rc: RcConfig) -> Result<Self, ConfigError> {
        let api_url = require("api-url", args.api_url.or(rc.api_url))?;
        let project = require("project", args.project.or(rc.project))?;
        let sprint = require("sprint", args.sprint.or(rc.sprint))?;
        let component = require("component", args.component.or(rc.component))?;

        let test_attrs = args
            .test_attrs
            .or(rc.test_attrs)
            .map(|raw| {
                raw.split(',')
                    .map(|attr| attr.trim().to_string())
                    .filter(|attr| !attr.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let test_id_attr = args
            .test_id_attr
            .or(rc.test_id_attr)
            .unwrap_or_else(|| "id".to_string());

        Ok(Self {
            api_url,
            project,
            sprint,
            component,
            comment: args.comment,
            test_attrs,
            test_id_attr,
            traceback_style: TracebackStyle::default(),
            verbose: args.verbose,
        })
    }
}

fn require(option: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingOption { option })
}
