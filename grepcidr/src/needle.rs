use std::{io, net::IpAddr};

use ipnet::IpNet;
use log::*;
use thiserror::Error;

use crate::source::LineSource;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	#[error("'{0}' does not appear to be an IPv4 or IPv6 network")]
	NotANetwork(String),
	#[error("'{0}' has host bits set")]
	HostBits(String),
	#[error("'{0}' does not appear to be an IPv4 or IPv6 address")]
	NotAnAddress(String),
}

/// Parse one needle: CIDR form, or a bare address as a /32 or /128.
/// A CIDR with host bits set is rejected, needles must be in network form.
pub fn parse_needle(s: &str) -> Result<IpNet, ParseError> {
	if let Ok(net) = s.parse::<IpNet>() {
		if net.trunc() != net {
			return Err(ParseError::HostBits(s.to_string()));
		}
		return Ok(net);
	}
	if let Ok(addr) = s.parse::<IpAddr>() {
		return Ok(IpNet::from(addr));
	}
	Err(ParseError::NotANetwork(s.to_string()))
}

/// parse a haystack token: a bare address only, a `/` suffix fails
pub fn parse_addr(s: &str) -> Result<IpAddr, ParseError> {
	s.parse()
		.map_err(|_| ParseError::NotAnAddress(s.to_string()))
}

/// The networks to match against, in insertion order.
/// Duplicates are kept; built once at startup, read-only after.
#[derive(Default)]
pub struct NeedleSet(Vec<IpNet>);

impl NeedleSet {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Parse one candidate and append it. A malformed candidate is dropped
	/// and logged, it never aborts the run.
	pub fn add(&mut self, candidate: &str, line: &str) -> bool {
		match parse_needle(candidate) {
			Ok(net) => {
				self.0.push(net);
				true
			}
			Err(e) => {
				debug!("{}, skipping this in line: `{}'", e, line);
				false
			}
		}
	}

	/// one candidate per whitespace token; empty and `#` comment lines skipped
	pub fn add_from_lines(&mut self, lines: impl IntoIterator<Item = impl AsRef<str>>) -> usize {
		let mut c = 0;
		for line in lines {
			let line = line.as_ref().trim_ascii();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}
			for tok in line.split_whitespace() {
				if self.add(tok, line) {
					c += 1;
				}
			}
		}
		c
	}

	/// needle file, `-` for stdin; an unreadable file is fatal
	pub fn add_from_file(&mut self, path: &str) -> io::Result<usize> {
		let src = LineSource::from_path(path);
		let lines = src.lines().map_err(|e| {
			io::Error::new(e.kind(), format!("failed to open {}: {}", src.label(), e))
		})?;
		let c = self.add_from_lines(lines);
		info!("loaded {} needles from {}", c, src.label());
		Ok(c)
	}

	pub fn add_from_files(
		&mut self,
		paths: impl IntoIterator<Item = impl AsRef<str>>,
	) -> io::Result<()> {
		for p in paths {
			self.add_from_file(p.as_ref())?;
		}
		Ok(())
	}

	/// each value is exactly one candidate, no token splitting
	pub fn add_from_strs(&mut self, values: impl IntoIterator<Item = impl AsRef<str>>) {
		for v in values {
			let v = v.as_ref();
			self.add(v, v);
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &IpNet> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn needle_forms() {
		let tests = [
			("10.0.0.0/24", "10.0.0.0/24"),
			("10.0.0.1", "10.0.0.1/32"),
			("0.0.0.0/0", "0.0.0.0/0"),
			("2001:db8::/32", "2001:db8::/32"),
			("2001:db8::1", "2001:db8::1/128"),
		];
		for (s, expected) in tests {
			assert_eq!(parse_needle(s).unwrap().to_string(), expected);
		}
	}

	#[test]
	fn host_bits_rejected() {
		assert_eq!(
			parse_needle("10.0.0.1/24"),
			Err(ParseError::HostBits("10.0.0.1/24".to_string()))
		);
	}

	#[test]
	fn bad_needles() {
		for s in ["", "not-an-ip", "10.0.0.256", "10.0.0.0/33", "10.0.0.0/24/7"] {
			assert_eq!(parse_needle(s), Err(ParseError::NotANetwork(s.to_string())));
		}
	}

	#[test]
	fn addr_tokens() {
		assert_eq!(parse_addr("192.168.1.5").unwrap().to_string(), "192.168.1.5");
		assert!(parse_addr("192.168.1.0/24").is_err());
		assert!(parse_addr("host").is_err());
	}

	#[test]
	fn order_and_duplicates_kept() {
		let mut n = NeedleSet::new();
		n.add_from_strs(["10.0.0.0/8", "10.0.0.0/24", "10.0.0.0/8"]);
		let got: Vec<_> = n.iter().map(|net| net.to_string()).collect();
		assert_eq!(got, ["10.0.0.0/8", "10.0.0.0/24", "10.0.0.0/8"]);
	}

	#[test]
	fn file_lines_are_tokenized() {
		let mut n = NeedleSet::new();
		let c = n.add_from_lines([
			"10.0.0.0/24 192.168.0.0/16",
			"",
			"# a comment",
			"not-an-ip",
			"  1.1.1.1  ",
		]);
		assert_eq!(c, 3);
		assert_eq!(n.len(), 3);
	}

	#[test]
	fn all_malformed_yields_empty_set() {
		let mut n = NeedleSet::new();
		n.add_from_strs(["nope", "512.0.0.1", "10.0.0.0/130"]);
		assert!(n.is_empty());
	}
}
