use std::{
	fs::File,
	io::{self, BufRead, BufReader},
	iter,
};

/// One haystack or needle source. Opened lazily; the underlying handle is
/// closed when the iterator returned by [`lines`](Self::lines) is dropped,
/// on every exit path.
pub enum LineSource {
	Stdin,
	File(String),
	Text(String),
}

impl LineSource {
	/// `-` means stdin
	pub fn from_path(path: &str) -> Self {
		if path == "-" {
			Self::Stdin
		} else {
			Self::File(path.to_string())
		}
	}

	/// name used in output records and diagnostics
	pub fn label(&self) -> &str {
		match self {
			Self::Stdin => "-",
			Self::File(path) => path,
			Self::Text(_) => "<arg>",
		}
	}

	/// Line iterator over the source. An open failure is an error; a read
	/// error mid-stream just ends the iterator. `Text` yields its whole
	/// value as a single line.
	pub fn lines(&self) -> io::Result<Box<dyn Iterator<Item = String>>> {
		Ok(match self {
			Self::Stdin => Box::new(io::stdin().lines().map_while(Result::ok)),
			Self::File(path) => {
				let f = File::open(path)?;
				Box::new(BufReader::new(f).lines().map_while(Result::ok))
			}
			Self::Text(text) => Box::new(iter::once(text.clone())),
		})
	}
}
