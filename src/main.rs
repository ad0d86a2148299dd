extern crate symlang;
use clap::{arg, command, value_parser, Arg, ArgAction, ArgMatches};
use log::info;
use std::fs;
use std::io;
use std::io::Write;
use symlang::symtable::{ConfigOverrides, LookupStrategy, TableConfig};
use symlang::utils;
use symlang::{CompilerError, ProvidesCompilerDiagnostic};

/// Collects table settings given on the command line
fn config_overrides(matches: &ArgMatches) -> ConfigOverrides {
	let mut overrides = ConfigOverrides::default();
	if matches.get_flag("unbounded") {
		overrides.capacity = Some(None);
	}
	else if let Some(capacity) = matches.get_one::<usize>("capacity") {
		overrides.capacity = Some(Some(*capacity));
	}
	if matches.get_flag("hashed") {
		overrides.strategy = Some(LookupStrategy::Hashed);
	}
	overrides
}

fn open_output(matches: &ArgMatches) -> miette::Result<Box<dyn Write>> {
	match matches.get_one::<String>("output") {
		None => Ok(Box::new(io::stdout())),
		Some(path) => match fs::File::create(path) {
			Ok(file) => Ok(Box::new(file)),
			Err(err) => Err(CompilerError::IoError(err).to_miette_report()),
		},
	}
}

fn main() -> miette::Result<()> {
	env_logger::init();

	let matches = command!()
		.arg(Arg::new("source").required(true).help("Declaration file (or JSON snapshot in deserialize mode)"))
		.arg(Arg::new("output").short('o').long("output").help("Write results to a file instead of stdout"))
		.arg(
			arg!(<MODE>)
				.help("Specify which action should be performed")
				.value_parser(["tokenize", "check", "dump", "lookup", "serialize", "deserialize"])
				.required(false)
				.short('m')
				.long("mode"),
		)
		.arg(
			Arg::new("name")
				.short('n')
				.long("name")
				.action(ArgAction::Append)
				.required_if_eq("MODE", "lookup")
				.help("Symbol to look up (can be repeated)"),
		)
		.arg(
			Arg::new("capacity")
				.long("capacity")
				.value_parser(value_parser!(usize))
				.conflicts_with("unbounded")
				.help("Maximum number of symbols (default 30, or the snapshot's in deserialize mode)"),
		)
		.arg(
			Arg::new("unbounded")
				.long("unbounded")
				.action(ArgAction::SetTrue)
				.help("Let the table grow without limit"),
		)
		.arg(
			Arg::new("hashed")
				.long("hashed")
				.action(ArgAction::SetTrue)
				.help("Use a hash index for lookups"),
		)
		.arg(
			Arg::new("sort")
				.long("sort")
				.action(ArgAction::SetTrue)
				.help("Print symbols ordered by name"),
		)
		.get_matches();

	let mode = matches.get_one::<String>("MODE").map(String::as_str).unwrap_or("dump");
	let file_name = matches.get_one::<String>("source").cloned().unwrap_or_default();
	let overrides = config_overrides(&matches);
	let config = overrides.apply(TableConfig::default());
	let sorted = matches.get_flag("sort");
	let names: Vec<String> = matches
		.get_many::<String>("name")
		.map(|names| names.cloned().collect())
		.unwrap_or_default();

	let code = fs::read_to_string(&file_name)
		.map_err(|_| CompilerError::FileNotFound(file_name.clone()).to_miette_report())?;
	let mut output = open_output(&matches)?;
	info!("Running '{}' on '{}' with {:?}", mode, file_name, overrides);

	match mode {
		"tokenize" => utils::tokenize(&code, &file_name, &mut output)?,
		"check" => {
			let table = utils::build_table(&code, &file_name, &config)?;
			writeln!(output, "{}: {} symbols", file_name, table.len())
				.map_err(|e| CompilerError::IoError(e).to_miette_report())?;
		},
		"dump" => {
			let table = utils::build_table(&code, &file_name, &config)?;
			utils::dump(table.as_ref(), sorted, &mut output)?;
		},
		"lookup" => {
			let table = utils::build_table(&code, &file_name, &config)?;
			utils::lookup(table.as_ref(), &names, &mut output)?;
		},
		"serialize" => {
			let table = utils::build_table(&code, &file_name, &config)?;
			utils::serialize(table.as_ref(), &config, &mut output)?;
		},
		"deserialize" => {
			let table = utils::deserialize(&code, &file_name, &overrides)?;
			if names.is_empty() {
				utils::dump(table.as_ref(), sorted, &mut output)?;
			}
			else {
				utils::lookup(table.as_ref(), &names, &mut output)?;
			}
		},
		_ => unreachable!("clap restricts the mode"),
	};

	Ok(())
}
