//! Input validation utilities
//!
//! Domain-name syntax checks and small string predicates used when accepting
//! values from requests or configuration.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const MAX_LABEL_LENGTH: usize = 63;

static TLD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^([a-z\x{00A1}-\x{00A8}\x{00AA}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,}|xn[a-z0-9-]{2,})$",
    )
    .expect("TLD pattern is valid")
});

static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z_\x{00A1}-\x{10FFFF}0-9-]+$").expect("label pattern is valid")
});

static FULL_WIDTH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{FF01}-\x{FF5E}]").expect("full-width pattern is valid"));

// ECMAScript whitespace: includes U+FEFF, which otherwise passes the TLD letter range.
static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]",
    )
    .expect("whitespace pattern is valid")
});

/// Flags controlling [`validate_fqdn`]. Every flag is off by default.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FqdnOptions {
    /// Reject names without a top-level domain, or whose TLD is not alphabetic / punycode
    pub require_tld: bool,
    pub allow_underscores: bool,
    /// Accept a single trailing `.` (absolute form)
    pub allow_trailing_dot: bool,
    pub allow_numeric_tld: bool,
    /// Accept a leading `*.` label
    pub allow_wildcard: bool,
    /// Skip the 63 character label limit
    pub ignore_max_length: bool,
}

impl FqdnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_tld(mut self, value: bool) -> Self {
        self.require_tld = value;
        self
    }

    pub fn allow_underscores(mut self, value: bool) -> Self {
        self.allow_underscores = value;
        self
    }

    pub fn allow_trailing_dot(mut self, value: bool) -> Self {
        self.allow_trailing_dot = value;
        self
    }

    pub fn allow_numeric_tld(mut self, value: bool) -> Self {
        self.allow_numeric_tld = value;
        self
    }

    pub fn allow_wildcard(mut self, value: bool) -> Self {
        self.allow_wildcard = value;
        self
    }

    pub fn ignore_max_length(mut self, value: bool) -> Self {
        self.ignore_max_length = value;
        self
    }

    /// Combine two option sets, enabling every flag enabled in either
    ///
    /// # Examples
    /// ```
    /// use edgekit::utils::validation::FqdnOptions;
    /// let configured = FqdnOptions::new().require_tld(true);
    /// let flags = FqdnOptions::new().allow_wildcard(true);
    /// let merged = configured.union(flags);
    /// assert!(merged.require_tld && merged.allow_wildcard);
    /// ```
    pub fn union(self, other: FqdnOptions) -> Self {
        Self {
            require_tld: self.require_tld || other.require_tld,
            allow_underscores: self.allow_underscores || other.allow_underscores,
            allow_trailing_dot: self.allow_trailing_dot || other.allow_trailing_dot,
            allow_numeric_tld: self.allow_numeric_tld || other.allow_numeric_tld,
            allow_wildcard: self.allow_wildcard || other.allow_wildcard,
            ignore_max_length: self.ignore_max_length || other.ignore_max_length,
        }
    }
}

/// Reason a domain name was rejected by [`validate_fqdn`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FqdnError {
    #[error("missing top-level domain")]
    MissingTld,
    #[error("top-level domain '{tld}' is not alphabetic or punycode")]
    InvalidTld { tld: String },
    #[error("top-level domain '{tld}' contains whitespace")]
    TldWhitespace { tld: String },
    #[error("top-level domain '{tld}' is numeric")]
    NumericTld { tld: String },
    #[error("empty label")]
    EmptyLabel,
    #[error("label '{label}' is longer than 63 characters")]
    LabelTooLong { label: String },
    #[error("label '{label}' contains invalid characters")]
    InvalidCharacters { label: String },
    #[error("label '{label}' contains full-width characters")]
    FullWidthCharacters { label: String },
    #[error("label '{label}' starts or ends with a hyphen")]
    HyphenBoundary { label: String },
    #[error("label '{label}' contains an underscore")]
    Underscore { label: String },
}

/// Check whether a string is a syntactically valid fully qualified domain name
///
/// # Examples
/// ```
/// use edgekit::utils::validation::{FqdnOptions, is_fqdn};
/// assert!(is_fqdn("example.com", &FqdnOptions::default()));
/// assert!(!is_fqdn("-bad-.com", &FqdnOptions::default()));
/// assert!(is_fqdn("*.example.com", &FqdnOptions::new().allow_wildcard(true)));
/// ```
pub fn is_fqdn(value: &str, options: &FqdnOptions) -> bool {
    match validate_fqdn(value, options) {
        Ok(()) => true,
        Err(reason) => {
            debug!(domain = value, %reason, "rejected domain name");
            false
        }
    }
}

/// Validate a domain name, reporting the first rule it breaks
///
/// Rules run in a fixed order: trailing dot and wildcard stripping, the
/// top-level domain checks, then every label in turn.
pub fn validate_fqdn(value: &str, options: &FqdnOptions) -> Result<(), FqdnError> {
    let mut name = value;

    if options.allow_trailing_dot {
        name = name.strip_suffix('.').unwrap_or(name);
    }

    if options.allow_wildcard {
        name = name.strip_prefix("*.").unwrap_or(name);
    }

    let labels: Vec<&str> = name.split('.').collect();
    // split always yields at least one element
    let tld = labels.last().copied().unwrap_or_default();

    if options.require_tld {
        if labels.len() < 2 {
            return Err(FqdnError::MissingTld);
        }

        if !options.allow_numeric_tld && !TLD_PATTERN.is_match(tld) {
            return Err(FqdnError::InvalidTld {
                tld: tld.to_string(),
            });
        }

        if WHITESPACE_PATTERN.is_match(tld) {
            return Err(FqdnError::TldWhitespace {
                tld: tld.to_string(),
            });
        }
    }

    if !options.allow_numeric_tld && !tld.is_empty() && tld.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(FqdnError::NumericTld {
            tld: tld.to_string(),
        });
    }

    labels
        .iter()
        .try_for_each(|label| validate_label(label, options))
}

fn validate_label(label: &str, options: &FqdnOptions) -> Result<(), FqdnError> {
    // Length is measured in UTF-16 code units, matching browser-side validators.
    if !options.ignore_max_length && label.encode_utf16().count() > MAX_LABEL_LENGTH {
        return Err(FqdnError::LabelTooLong {
            label: label.to_string(),
        });
    }

    if label.is_empty() {
        return Err(FqdnError::EmptyLabel);
    }

    if !LABEL_PATTERN.is_match(label) {
        return Err(FqdnError::InvalidCharacters {
            label: label.to_string(),
        });
    }

    if FULL_WIDTH_PATTERN.is_match(label) {
        return Err(FqdnError::FullWidthCharacters {
            label: label.to_string(),
        });
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(FqdnError::HyphenBoundary {
            label: label.to_string(),
        });
    }

    if !options.allow_underscores && label.contains('_') {
        return Err(FqdnError::Underscore {
            label: label.to_string(),
        });
    }

    Ok(())
}

/// Check whether a string ends with a line break (`\n` or `\r\n`)
///
/// # Examples
/// ```
/// use edgekit::utils::validation::is_with_line_break;
/// assert!(is_with_line_break(Some("abc\r\n")));
/// assert!(!is_with_line_break(None));
/// ```
pub fn is_with_line_break(value: Option<&str>) -> bool {
    value.is_some_and(|text| text.ends_with('\n'))
}
