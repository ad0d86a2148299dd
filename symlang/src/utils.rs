use crate::core::{DiagnosticBuffer, ProvidesCompilerDiagnostic};
use crate::lexer::{Lexer, LogosLexer, TokenKind};
use crate::loader::load_declarations;
use crate::parser::parse_source;
use crate::serializer::SymbolTableSnapshot;
use crate::symtable::{new_symbol_table, ConfigOverrides, Symbol, SymbolError, SymbolKey, SymbolTable, TableConfig};
use crate::CompilerError;
use itertools::Itertools;
use log::info;
use miette::NamedSource;
use std::io::Write;

fn io_error(err: std::io::Error) -> miette::Report {
	CompilerError::IoError(err).to_miette_report()
}

fn with_source(report: miette::Report, file_name: &str, code: &str) -> miette::Report {
	report.with_source_code(NamedSource::new(file_name, code.to_owned()))
}

/// Prints every token of the source
pub fn tokenize(code: &str, file_name: &str, output: &mut dyn Write) -> miette::Result<()> {
	let mut lexer = LogosLexer::new(code);
	let tokens = lexer
		.process()
		.map_err(|err| with_source(err.to_miette_report(), file_name, code))?;

	for token in &tokens {
		let text = &code[token.range.start()..token.range.end()];
		let written = match token.kind {
			TokenKind::Id(_) => writeln!(output, "Id '{}'", text),
			kind => writeln!(output, "{:?} '{}'", kind, text),
		};
		written.map_err(io_error)?;
	}
	Ok(())
}

/// Parses a declaration file and loads it into a new table.
///
/// Lexer and parser errors end the process right away. Symbol errors are
/// collected and printed together, then the last one is returned.
pub fn build_table(code: &str, file_name: &str, config: &TableConfig) -> miette::Result<Box<dyn SymbolTable>> {
	let (declarations, id_table) =
		parse_source(code).map_err(|err| with_source(err.to_miette_report(), file_name, code))?;

	let mut table = new_symbol_table(config);
	let mut buffer = DiagnosticBuffer::new();
	load_declarations(&declarations, &id_table, table.as_mut(), &mut buffer);
	buffer.print_diagnostics(file_name, code)?;

	info!("'{}': {} symbols", file_name, table.len());
	Ok(table)
}

fn write_symbol(output: &mut dyn Write, key: SymbolKey, symbol: &Symbol) -> miette::Result<()> {
	writeln!(
		output,
		"{:<5} {:<24} {:<10} {}",
		key.to_string(),
		symbol.name(),
		symbol.symbol_type(),
		symbol.symbol_type().code()
	)
	.map_err(io_error)
}

/// Prints the table contents, in insertion or in name order
pub fn dump(table: &dyn SymbolTable, sorted: bool, output: &mut dyn Write) -> miette::Result<()> {
	let capacity = match table.capacity() {
		Some(capacity) => capacity.to_string(),
		None => String::from("unbounded"),
	};
	writeln!(output, "# {} / {} symbols", table.len(), capacity).map_err(io_error)?;

	let entries: Vec<(SymbolKey, &Symbol)> = if sorted {
		table.entries().sorted_by(|(_, a), (_, b)| a.name().cmp(b.name())).collect()
	}
	else {
		table.entries().collect()
	};

	for (key, symbol) in entries {
		write_symbol(output, key, symbol)?;
	}
	Ok(())
}

/// Looks up the given names. Missing names are reported after all names were tried.
pub fn lookup(table: &dyn SymbolTable, names: &[String], output: &mut dyn Write) -> miette::Result<()> {
	let mut buffer = DiagnosticBuffer::new();
	for name in names {
		match table.find(name).and_then(|key| Some((key, table.get(key)?))) {
			Some((key, symbol)) => write_symbol(output, key, symbol)?,
			None => buffer.push(SymbolError::NotFound(name.clone()).to_diagnostic()),
		}
	}
	buffer.print_diagnostics("<lookup>", "")
}

/// Writes the table as JSON
pub fn serialize(table: &dyn SymbolTable, config: &TableConfig, output: &mut dyn Write) -> miette::Result<()> {
	let json = SymbolTableSnapshot::new(table, config.strategy)
		.to_json()
		.map_err(|err| err.to_miette_report())?;
	writeln!(output, "{}", json).map_err(io_error)
}

/// Reads a JSON snapshot back into a table.
/// Explicit overrides win over the settings stored in the snapshot.
pub fn deserialize(json: &str, file_name: &str, overrides: &ConfigOverrides) -> miette::Result<Box<dyn SymbolTable>> {
	let snapshot = SymbolTableSnapshot::from_json(json)
		.map_err(|err| with_source(err.to_miette_report(), file_name, json))?;
	let config = overrides.apply(snapshot.config());
	info!("Restoring '{}' with {:?}", file_name, config);
	snapshot.restore_with(&config).map_err(|err| err.to_miette_report())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn output_of(f: impl FnOnce(&mut dyn Write) -> miette::Result<()>) -> String {
		let mut output = Vec::new();
		f(&mut output).expect("command failed");
		String::from_utf8(output).unwrap()
	}

	#[test]
	fn dump_orders() {
		let table = build_table("int zed; char alpha;", "t.sym", &TableConfig::default()).unwrap();

		let plain = output_of(|out| dump(table.as_ref(), false, out));
		let lines: Vec<&str> = plain.lines().collect();
		assert_eq!(lines[0], "# 2 / 30 symbols");
		assert!(lines[1].starts_with("#0"));
		assert!(lines[1].contains("zed"));

		let sorted = output_of(|out| dump(table.as_ref(), true, out));
		let lines: Vec<&str> = sorted.lines().collect();
		assert!(lines[1].contains("alpha"));
		assert!(lines[1].starts_with("#1"));
	}

	#[test]
	fn lookup_reports_missing_names() {
		let table = build_table("float pi;", "t.sym", &TableConfig::default()).unwrap();
		let mut output = Vec::new();
		let result = lookup(table.as_ref(), &["pi".to_string(), "tau".to_string()], &mut output);
		assert!(result.is_err());
		assert!(String::from_utf8(output).unwrap().contains("pi"));
	}

	#[test]
	fn build_fails_on_conflicts() {
		assert!(build_table("int a; bool a;", "t.sym", &TableConfig::default()).is_err());
		assert!(build_table("int a", "t.sym", &TableConfig::default()).is_err());
	}

	#[test]
	fn tokenize_lists_tokens() {
		let text = output_of(|out| tokenize("int a;", "t.sym", out));
		assert_eq!(text, "Keyword(Int) 'int'\nId 'a'\nPunctuator(Semicolon) ';'\n");
	}

	#[test]
	fn json_round_trip_through_cli_helpers() {
		let config = TableConfig::default();
		let table = build_table("string s; 4 b;", "t.sym", &config).unwrap();
		let json = output_of(|out| serialize(table.as_ref(), &config, out));
		let restored = deserialize(&json, "t.json", &ConfigOverrides::default()).unwrap();
		assert_eq!(restored.symbols(), table.symbols());
		assert_eq!(restored.capacity(), Some(30));
	}

	#[test]
	fn deserialize_applies_overrides() {
		let config = TableConfig::default();
		let table = build_table("int a; int b; int c;", "t.sym", &config).unwrap();
		let json = output_of(|out| serialize(table.as_ref(), &config, out));

		let overrides = ConfigOverrides {
			capacity: Some(Some(2)),
			strategy: None,
		};
		assert!(deserialize(&json, "t.json", &overrides).is_err());

		let overrides = ConfigOverrides {
			capacity: Some(None),
			strategy: None,
		};
		let restored = deserialize(&json, "t.json", &overrides).unwrap();
		assert_eq!(restored.capacity(), None);
		let text = output_of(|out| dump(restored.as_ref(), false, out));
		assert!(text.starts_with("# 3 / unbounded symbols"));
	}

	#[test]
	fn lookup_prints_key_of_each_name() {
		let table = build_table("int a; bool b; char c;", "t.sym", &TableConfig::default()).unwrap();
		let text = output_of(|out| lookup(table.as_ref(), &["c".to_string(), "a".to_string()], out));
		let lines: Vec<&str> = text.lines().collect();
		assert!(lines[0].starts_with("#2") && lines[0].contains("char"));
		assert!(lines[1].starts_with("#0") && lines[1].contains("int"));
	}
}
