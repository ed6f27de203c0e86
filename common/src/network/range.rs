//! # Address Range Model
//!
//! An inclusive span of IPv4 addresses, parsed from `"<start>-<end>"`
//! (e.g. `10.0.0.1-10.0.0.254`).
//!
//! Addresses are kept in their packed big-endian `u32` form, so ordering and
//! membership are plain integer comparisons.

use std::net::Ipv4Addr;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Bound, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: u32,
    end: u32,
}

impl AddressRange {
    /// Builds a range from two addresses, rejecting a reversed pair.
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Result<Self, ParseError> {
        let start: u32 = start_addr.into();
        let end: u32 = end_addr.into();

        if start > end {
            return Err(ParseError::RangeOrderError { what: "IP address" });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of addresses covered. A `u64` because `0.0.0.0-255.255.255.255` holds 2^32.
    pub fn len(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }

    /// A range always holds at least its start address.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        (self.start..=self.end).contains(&u32::from(addr))
    }

    /// Every address in ascending order, packed.
    pub fn to_iter(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl FromStr for AddressRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::InvalidInput { what: "IP range" });
        }

        let parts: Vec<&str> = s.split('-').collect();
        let [start_str, end_str] = parts[..] else {
            return Err(ParseError::InvalidFormat {
                what: "IP range",
                value: s.to_string(),
            });
        };

        let start_addr = parse_addr(start_str, Bound::Start)?;
        let end_addr = parse_addr(end_str, Bound::End)?;

        AddressRange::new(start_addr, end_addr)
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", Ipv4Addr::from(self.start), Ipv4Addr::from(self.end))
    }
}

fn parse_addr(s: &str, bound: Bound) -> Result<Ipv4Addr, ParseError> {
    s.trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| ParseError::InvalidAddress {
            bound,
            value: s.to_string(),
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
