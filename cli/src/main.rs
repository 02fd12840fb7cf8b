use std::{
	io::{self, Write},
	process::ExitCode,
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use log::*;

use grepcidr::{NeedleSet, OutputFormat, Scanner};

mod args;
use args::CliArgs;

fn main() -> ExitCode {
	let args = CliArgs::parse();

	let default = if args.debug { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
		.format(|buf, record| writeln!(buf, "grepcidr: {}", record.args()))
		.init();

	if args.file.is_empty() && args.haystack_str.is_empty() {
		CliArgs::command()
			.error(
				ErrorKind::MissingRequiredArgument,
				"file or -E line to search is required",
			)
			.exit();
	}
	if args.needle_file.is_empty() && args.needle_str.is_empty() {
		CliArgs::command()
			.error(
				ErrorKind::MissingRequiredArgument,
				"-f CIDR file or -e CIDR is required",
			)
			.exit();
	}

	let mut needles = NeedleSet::new();
	if let Err(e) = needles.add_from_files(&args.needle_file) {
		error!("{}", e);
		return ExitCode::FAILURE;
	}
	needles.add_from_strs(&args.needle_str);

	let format = OutputFormat {
		file: !args.no_file,
		pattern: args.show_pattern,
		only_ip: args.only_ip,
	};
	let scanner = Scanner::new(&needles, format);

	let stdout = io::stdout();
	match scanner.search(&args.file, &args.haystack_str, &mut stdout.lock()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{}", e);
			ExitCode::FAILURE
		}
	}
}
