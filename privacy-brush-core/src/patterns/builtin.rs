//! The six built-in detectors and their statically compiled matchers.
//!
//! Digit and hex classes are spelled out as ASCII ranges. A mask character
//! that one of those classes or separators would accept is rejected when the
//! engine is built (see `is_reserved_char`), so masked digits are never
//! matched again by a later pattern. `user_name_in_path` accepts any name,
//! and a name that is already fully masked is left alone.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::masking::{mask_dotted, mask_mac, mask_span, mask_uuid, mask_version, MaskStyle};

/// A predefined detector. Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinPattern {
    WindowsVersion,
    BrowserVersion,
    IpAddress,
    UserNameInPath,
    Uuid,
    MacAddress,
}

static WINDOWS_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\[(?:版本|Version)\s+)([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)(\])")
        .expect("windows_version regex is valid")
});

static BROWSER_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(Chrome|Edge)(\s+)([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)")
        .expect("browser_version regex is valid")
});

static IP_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").expect("ip_address regex is valid")
});

static USER_NAME_IN_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/Users/([^/\r\n]+)/").expect("user_name_in_path regex is valid")
});

static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\b",
    )
    .expect("uuid regex is valid")
});

// No backreferences in `regex`, so the two separator styles are spelled out.
static MAC_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}\b|\b(?:[0-9A-Fa-f]{2}-){5}[0-9A-Fa-f]{2}\b",
    )
    .expect("mac_address regex is valid")
});

impl BuiltinPattern {
    pub const ALL: [BuiltinPattern; 6] = [
        BuiltinPattern::WindowsVersion,
        BuiltinPattern::BrowserVersion,
        BuiltinPattern::IpAddress,
        BuiltinPattern::UserNameInPath,
        BuiltinPattern::Uuid,
        BuiltinPattern::MacAddress,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinPattern::WindowsVersion => "windows_version",
            BuiltinPattern::BrowserVersion => "browser_version",
            BuiltinPattern::IpAddress => "ip_address",
            BuiltinPattern::UserNameInPath => "user_name_in_path",
            BuiltinPattern::Uuid => "uuid",
            BuiltinPattern::MacAddress => "mac_address",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BuiltinPattern::WindowsVersion => "Windows build in `[Version X.Y.Z.W]` or `[版本 X.Y.Z.W]`",
            BuiltinPattern::BrowserVersion => "Chrome or Edge followed by a four-part version",
            BuiltinPattern::IpAddress => "IPv4 dotted quad, all four octets masked",
            BuiltinPattern::UserNameInPath => "User name in `/Users/<name>/` paths",
            BuiltinPattern::Uuid => "UUID versions 1-5; version nibble kept, v4 keeps its first group",
            BuiltinPattern::MacAddress => "MAC address with `:` or `-` separators",
        }
    }

    /// The shared compiled matcher. `Regex` clones are reference counted.
    pub fn regex(self) -> &'static Regex {
        match self {
            BuiltinPattern::WindowsVersion => Lazy::force(&WINDOWS_VERSION),
            BuiltinPattern::BrowserVersion => Lazy::force(&BROWSER_VERSION),
            BuiltinPattern::IpAddress => Lazy::force(&IP_ADDRESS),
            BuiltinPattern::UserNameInPath => Lazy::force(&USER_NAME_IN_PATH),
            BuiltinPattern::Uuid => Lazy::force(&UUID),
            BuiltinPattern::MacAddress => Lazy::force(&MAC_ADDRESS),
        }
    }

    /// Builds the replacement for one match of this pattern's regex.
    pub fn replace(self, caps: &Captures<'_>, style: &MaskStyle) -> String {
        let whole = &caps[0];
        match self {
            BuiltinPattern::WindowsVersion => {
                format!("{}{}{}", &caps[1], mask_version(&caps[2], style), &caps[3])
            }
            BuiltinPattern::BrowserVersion => {
                format!("{}{}{}", &caps[1], &caps[2], mask_version(&caps[3], style))
            }
            BuiltinPattern::IpAddress => mask_dotted(whole, style, false),
            BuiltinPattern::UserNameInPath => match (caps.get(0), caps.get(1)) {
                (Some(_), Some(name)) if name.as_str().chars().all(|c| c == style.mask_char) => {
                    whole.to_string()
                }
                (Some(m), Some(name)) => mask_span(
                    whole,
                    name.start() - m.start(),
                    name.end() - m.start(),
                    style,
                ),
                _ => whole.to_string(),
            },
            BuiltinPattern::Uuid => mask_uuid(whole, style),
            BuiltinPattern::MacAddress => mask_mac(whole, style),
        }
    }
}

impl fmt::Display for BuiltinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True for characters a built-in matcher treats as part of a value: ASCII
/// hex digits and the `.`, `:`, `-` and `/` separators.
pub fn is_reserved_char(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, '.' | ':' | '-' | '/')
}

/// Error returned when a name does not belong to any built-in pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPatternName(pub String);

impl fmt::Display for UnknownPatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Built-in pattern '{}' not found.", self.0)
    }
}

impl std::error::Error for UnknownPatternName {}

impl FromStr for BuiltinPattern {
    type Err = UnknownPatternName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinPattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPatternName(s.to_string()))
    }
}

/// Names of every built-in pattern, in evaluation order.
pub fn builtin_names() -> Vec<String> {
    BuiltinPattern::ALL.iter().map(|p| p.name().to_string()).collect()
}
