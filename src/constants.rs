//! Central constants for the gabbs application

/// Values used when talking to the GitHub API
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// User-Agent header sent with every API request
    pub const USER_AGENT: &str = concat!("gabbs/", env!("CARGO_PKG_VERSION"));

    /// Accept header for the v3 REST API
    pub const ACCEPT: &str = "application/vnd.github.v3+json";

    /// Client-side request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 5;
}

/// Well-known paths
pub mod paths {
    /// Home configuration file, relative to the user's home directory
    pub const HOME_CONFIG: &str = ".gabbs.yaml";

    /// Default lint ruleset, relative to the installation root
    pub const LINT_RULES: &str = "config/eslint.json";

    /// Alternate lint ruleset selected by `--es6`
    pub const LINT_RULES_ES6: &str = "config/eslint-es6.json";
}

/// Environment variables read by the application
pub mod env {
    /// Overrides the location of the home configuration file
    pub const HOME_CONFIG_OVERRIDE: &str = "GABBS_HOME_CONFIG";

    /// Enables debug logging when set
    pub const DEBUG: &str = "GABBS_DEBUG";

    /// Fallback token for GitHub authentication
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
}

/// Command line flags understood by the built-in commands
pub mod flags {
    /// Selects the alternate lint ruleset
    pub const ES6: &str = "--es6";
}

/// Keys looked up in the home configuration
pub mod config_keys {
    pub const GITHUB_USERNAME: &str = "github_username";
    pub const GITHUB_TOKEN: &str = "github_token";
    pub const LINT_COMMAND: &str = "lint_command";
}

/// Name of the default setup command
pub const DEFAULT_COMMAND: &str = "setup";

/// Fallback linter executable
pub const DEFAULT_LINT_COMMAND: &str = "eslint";
