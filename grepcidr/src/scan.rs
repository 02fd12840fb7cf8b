use std::io::{self, Write};

use log::*;

use crate::{
	format::OutputFormat,
	needle::{parse_addr, NeedleSet},
	source::LineSource,
};

/// Streams haystack lines and writes one record per (token, containing
/// needle) pair. The needle set is read-only for the scanner's lifetime.
pub struct Scanner<'a> {
	needles: &'a NeedleSet,
	format: OutputFormat,
}

impl<'a> Scanner<'a> {
	pub fn new(needles: &'a NeedleSet, format: OutputFormat) -> Self {
		Self { needles, format }
	}

	/// haystack files in argument order, then the inline lines
	pub fn search(
		&self,
		files: impl IntoIterator<Item = impl AsRef<str>>,
		inline: impl IntoIterator<Item = impl AsRef<str>>,
		out: &mut impl Write,
	) -> io::Result<()> {
		for f in files {
			let src = LineSource::from_path(f.as_ref());
			let lines = src.lines().map_err(|e| {
				io::Error::new(e.kind(), format!("failed to open {}: {}", src.label(), e))
			})?;
			for line in lines {
				self.scan_line(src.label(), &line, out)?;
			}
		}
		for l in inline {
			let src = LineSource::Text(l.as_ref().to_string());
			for line in src.lines()? {
				self.scan_line(src.label(), &line, out)?;
			}
		}
		Ok(())
	}

	fn scan_line(&self, label: &str, line: &str, out: &mut impl Write) -> io::Result<()> {
		for tok in line.split_whitespace() {
			self.check(label, tok, line, out)?;
		}
		Ok(())
	}

	/// One token against every needle, in insertion order. A token inside
	/// N needles makes N records, no dedup, no early exit; each record is
	/// flushed as it is produced so piped consumers see matches right away.
	fn check(&self, label: &str, token: &str, line: &str, out: &mut impl Write) -> io::Result<()> {
		let addr = match parse_addr(token) {
			Ok(addr) => addr,
			Err(e) => {
				debug!("{}, skipping this in line: `{}'", e, line.trim_end());
				return Ok(());
			}
		};
		for net in self.needles.iter() {
			if net.contains(&addr) {
				writeln!(out, "{}", self.format.render(label, net, addr, line))?;
				out.flush()?;
			}
		}
		Ok(())
	}
}
