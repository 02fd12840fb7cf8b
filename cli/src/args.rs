use clap::Parser;

/// grep for IP addresses inside CIDR ranges
#[derive(Parser)]
pub struct CliArgs {
	/// files with IP addresses to search, `-` for stdin
	pub file: Vec<String>,

	/// line to search, given inline
	#[arg(short = 'E', value_name = "LINE")]
	pub haystack_str: Vec<String>,

	/// file with needle CIDRs, `-` for stdin
	#[arg(short = 'f', value_name = "FILE")]
	pub needle_file: Vec<String>,

	/// needle CIDR or address, given inline
	#[arg(short = 'e', value_name = "CIDR")]
	pub needle_str: Vec<String>,

	/// include the needle that matched in the output
	#[arg(short = 'p')]
	pub show_pattern: bool,

	/// output the matching IP address only, not the whole line
	#[arg(short = 'o')]
	pub only_ip: bool,

	/// don't output the matching file name
	#[arg(long)]
	pub no_file: bool,

	/// print skipped needles and tokens to stderr
	#[arg(long)]
	pub debug: bool,
}
