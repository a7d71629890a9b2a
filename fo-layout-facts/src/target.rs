// Build targets of the engine.
//
// The engine compiles its headers twice: once with `__SERVER` defined and
// once with `__CLIENT`. Some types (e.g. `Item`) differ between the two.

use std::fmt;
use std::str::FromStr;

/// Which engine binary a layout belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildTarget {
    Server,
    Client,
}

impl BuildTarget {
    /// Both targets, server first.
    pub const ALL: [BuildTarget; 2] = [BuildTarget::Server, BuildTarget::Client];

    /// Preprocessor define selecting this target in the engine headers.
    pub const fn define(self) -> &'static str {
        match self {
            BuildTarget::Server => "__SERVER",
            BuildTarget::Client => "__CLIENT",
        }
    }

    /// Lowercase name, as used in config files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            BuildTarget::Server => "server",
            BuildTarget::Client => "client",
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names neither `server` nor `client`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTarget(pub String);

impl fmt::Display for UnknownTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown build target `{}` (expected `server` or `client`)", self.0)
    }
}

impl std::error::Error for UnknownTarget {}

impl FromStr for BuildTarget {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" | "__server" => Ok(BuildTarget::Server),
            "client" | "__client" => Ok(BuildTarget::Client),
            _ => Err(UnknownTarget(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defines_match_engine_macros() {
        assert_eq!(BuildTarget::Server.define(), "__SERVER");
        assert_eq!(BuildTarget::Client.define(), "__CLIENT");
    }

    #[test]
    fn parses_names_and_defines() {
        assert_eq!("server".parse::<BuildTarget>(), Ok(BuildTarget::Server));
        assert_eq!("Client".parse::<BuildTarget>(), Ok(BuildTarget::Client));
        assert_eq!("__SERVER".parse::<BuildTarget>(), Ok(BuildTarget::Server));
        assert!("both".parse::<BuildTarget>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for target in BuildTarget::ALL {
            assert_eq!(target.to_string().parse::<BuildTarget>(), Ok(target));
        }
    }
}
