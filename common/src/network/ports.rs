//! # Port Set Model
//!
//! Parses port specifications such as `22,80,8000-8010` into the concrete
//! sequence of ports to probe.
//!
//! The sequence keeps input order and duplicates: `80,80` probes port 80 twice.

use std::str::FromStr;

use tracing::debug;

use crate::error::ParseError;

const MIN_PORT: u32 = 1;
const MAX_PORT: u32 = 65_535;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortSet {
    ports: Vec<u16>,
}

impl PortSet {
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u16> {
        self.ports.iter()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.ports
    }
}

impl<'a> IntoIterator for &'a PortSet {
    type Item = &'a u16;
    type IntoIter = std::slice::Iter<'a, u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.ports.iter()
    }
}

impl FromStr for PortSet {
    type Err = ParseError;

    /// Parses a comma-separated list where each token is a port (`443`) or an
    /// inclusive range (`8000-8010`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::InvalidInput { what: "Port list" });
        }

        let mut ports: Vec<u16> = Vec::new();
        for token in s.split(',') {
            expand_token(token, &mut ports)?;
        }

        debug!("Expanded '{s}' into {} ports", ports.len());
        Ok(PortSet { ports })
    }
}

fn expand_token(token: &str, ports: &mut Vec<u16>) -> Result<(), ParseError> {
    let parts: Vec<&str> = token.split('-').collect();

    match parts[..] {
        [single] => ports.push(parse_port(single)?),
        [start_str, end_str] => {
            let start = parse_port(start_str)?;
            let end = parse_port(end_str)?;

            if start > end {
                return Err(ParseError::RangeOrderError { what: "port number" });
            }

            ports.extend(start..=end);
        }
        _ => {
            return Err(ParseError::InvalidFormat {
                what: "port range",
                value: token.to_string(),
            });
        }
    }

    Ok(())
}

fn parse_port(s: &str) -> Result<u16, ParseError> {
    let invalid = || ParseError::InvalidPort {
        value: s.to_string(),
    };

    // Parse wide so that "70000" is an out-of-range port rather than garbage.
    let port = s.parse::<u32>().map_err(|_| invalid())?;
    if !(MIN_PORT..=MAX_PORT).contains(&port) {
        return Err(invalid());
    }

    u16::try_from(port).map_err(|_| invalid())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
