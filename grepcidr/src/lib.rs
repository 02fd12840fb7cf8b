//! grep for IP addresses inside CIDR ranges.
//!
//! Build a [`NeedleSet`] from CIDR strings and files, then stream haystack
//! lines through a [`Scanner`]; every whitespace token that parses as an IP
//! address is tested against every needle, one output record per match.

pub mod format;
pub mod needle;
pub mod scan;
pub mod source;

pub use format::OutputFormat;
pub use needle::NeedleSet;
pub use scan::Scanner;
