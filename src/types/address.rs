//! Dotted-decimal IPv4 addresses that remember how they were written.
//!
//! An `Address` keeps the text of every octet exactly as given. Stepping to
//! the next address only re-renders the octets the step touches, and two
//! addresses are equal when their text is equal.

use crate::error::{AddressError, AddressResult, AddressViolation};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// One octet of an address: its numeric value and the text it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Octet {
    value: u8,
    text: String,
}

impl Octet {
    fn parse(segment: &str) -> Result<Self, AddressViolation> {
        let value: i64 = segment
            .parse()
            .map_err(|_| AddressViolation::NonNumeric(segment.to_string()))?;
        let value = u8::try_from(value).map_err(|_| AddressViolation::OutOfRange(value))?;

        Ok(Self {
            value,
            text: segment.to_string(),
        })
    }

    fn from_value(value: u8) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }
}

/// A validated IPv4 address in dotted-decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    octets: [Octet; 4],
}

impl Address {
    /// Number of octets in an IPv4 address.
    pub const OCTETS: usize = 4;

    /// Parse and validate a dotted-decimal string.
    ///
    /// The input must split on `.` into exactly four parts, each a base-10
    /// integer in `0..=255`. The original text is preserved.
    pub fn parse(s: &str) -> AddressResult<Self> {
        let invalid = |violation: AddressViolation| AddressError::InvalidAddress {
            input: s.to_string(),
            violation,
        };

        let segments: Vec<&str> = s.split('.').collect();
        if segments.len() != Self::OCTETS {
            return Err(invalid(AddressViolation::OctetCount(segments.len())));
        }

        let mut octets = Vec::with_capacity(Self::OCTETS);
        for segment in segments {
            octets.push(Octet::parse(segment).map_err(invalid)?);
        }

        let octets: [Octet; 4] = octets
            .try_into()
            .map_err(|v: Vec<Octet>| invalid(AddressViolation::OctetCount(v.len())))?;

        Ok(Self { octets })
    }

    /// Compute the address that follows this one.
    ///
    /// Works from the last octet towards the first. An octet that would pass
    /// 255 has 255 subtracted (so it lands on 1, not 0) and carries into the
    /// next octet. A carry out of the first octet exhausts the address space.
    pub fn next(&self) -> AddressResult<Self> {
        let mut octets = self.octets.clone();

        for i in (0..Self::OCTETS).rev() {
            let mut value = u16::from(octets[i].value) + 1;
            let carry = value > 255;
            if carry {
                value -= 255;
            }

            // value is at most 255 here: either no carry, or 256 - 255
            octets[i] = Octet::from_value(value as u8);

            if !carry {
                return Ok(Self { octets });
            }
        }

        Err(AddressError::AddressSpaceExhausted)
    }

    /// The numeric octets of this address.
    pub fn octets(&self) -> [u8; 4] {
        [
            self.octets[0].value,
            self.octets[1].value,
            self.octets[2].value,
            self.octets[3].value,
        ]
    }

    /// The address as a standard library IPv4 address.
    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.octets[0].text, self.octets[1].text, self.octets[2].text, self.octets[3].text
        )
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
