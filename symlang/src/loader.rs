use crate::core::compiler_diagnostic::*;
use crate::core::{DiagnosticBuffer, IdTable};
use crate::parser::{Declaration, TypeSpec};
use crate::symtable::{SymbolError, SymbolTable, SymbolType};
use log::{info, warn};

/// Resolves the type named by a declaration
fn resolve_type(type_spec: &TypeSpec) -> Result<SymbolType, SymbolError> {
	match *type_spec {
		TypeSpec::Keyword(symbol_type, _) => Ok(symbol_type),
		TypeSpec::Code(code, span) => SymbolType::from_code(code)
			.filter(SymbolType::is_defined)
			.ok_or(SymbolError::UnknownTypeCode { code, span: Some(span) }),
	}
}

/// Declares every name from the parsed declarations in the table.
///
/// Errors are collected in the diagnostic buffer and loading goes on with the
/// next name, except for a full table which stops it.
/// Returns the number of names that were declared.
pub fn load_declarations(
	declarations: &[Declaration],
	id_table: &IdTable,
	table: &mut dyn SymbolTable,
	buffer: &mut DiagnosticBuffer,
) -> usize {
	let mut declared = 0;

	for declaration in declarations {
		let symbol_type = match resolve_type(&declaration.type_spec) {
			Ok(symbol_type) => symbol_type,
			Err(err) => {
				buffer.push(err.to_diagnostic());
				continue;
			},
		};

		for (key, span) in &declaration.names {
			let name = match id_table.get_by_key(key) {
				Some(name) => name,
				None => {
					buffer.push(SymbolError::InvalidKey.to_diagnostic());
					continue;
				},
			};

			let existed = table.lookup(name).is_some();
			match table.declare(name, symbol_type, Some(*span)) {
				Ok(symbol_key) if existed => {
					warn!("Symbol '{}' declared more than once", name);
					let previous = table.get(symbol_key).and_then(|s| s.span());
					buffer.push(
						CompilerDiagnosticBuilder::new_warning(&format!("Symbol `{}` declared more than once", name))
							.label_opt(previous, "First declared here")
							.label(*span, "Declared again here")
							.help("Remove the duplicate declaration")
							.build(),
					);
				},
				Ok(_) => declared += 1,
				Err(err @ SymbolError::TableFull { .. }) => {
					buffer.push(err.to_diagnostic());
					info!("Symbol table full, stopped loading after {} symbols", declared);
					return declared;
				},
				Err(err) => buffer.push(err.to_diagnostic()),
			}
		}
	}

	info!(
		"Loaded {} symbols from {} declarations ({} errors)",
		declared,
		declarations.len(),
		buffer.errors().len()
	);
	declared
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parser::parse_source;
	use crate::symtable::{new_symbol_table, LookupStrategy, TableConfig};

	fn load(source: &str, capacity: Option<usize>) -> (Box<dyn SymbolTable>, DiagnosticBuffer, usize) {
		let (declarations, id_table) = parse_source(source).expect("valid source");
		let mut table = new_symbol_table(&TableConfig {
			capacity,
			strategy: LookupStrategy::Linear,
		});
		let mut buffer = DiagnosticBuffer::new();
		let declared = load_declarations(&declarations, &id_table, table.as_mut(), &mut buffer);
		(table, buffer, declared)
	}

	#[test]
	fn loads_keywords_and_codes() {
		let (table, buffer, declared) = load("int a, b; 5 label; bool flag;", None);
		assert_eq!(declared, 4);
		assert!(!buffer.contains_errors());
		assert_eq!(table.lookup("label").unwrap().symbol_type(), SymbolType::String);
		assert_eq!(table.lookup("flag").unwrap().symbol_type(), SymbolType::Bool);
		assert!(table.lookup("a").unwrap().span().is_some());
	}

	#[test]
	fn duplicate_of_same_type_is_a_warning() {
		let (table, buffer, declared) = load("int a; int a;", None);
		assert_eq!(declared, 1);
		assert_eq!(table.len(), 1);
		assert!(!buffer.contains_errors());
		assert_eq!(buffer.warnings().len(), 1);
	}

	#[test]
	fn conflicting_types_are_errors_but_loading_continues() {
		let (table, buffer, declared) = load("int a; float a; char c;", None);
		assert_eq!(declared, 2);
		assert_eq!(buffer.errors().len(), 1);
		assert_eq!(table.lookup("a").unwrap().symbol_type(), SymbolType::Int);
		assert!(table.lookup("c").is_some());
	}

	#[test]
	fn unknown_and_undefined_type_codes() {
		let (table, buffer, declared) = load("0 a; 17 b; 1 c;", None);
		assert_eq!(declared, 1);
		assert_eq!(buffer.errors().len(), 2);
		assert!(table.lookup("a").is_none());
		assert_eq!(table.lookup("c").unwrap().symbol_type(), SymbolType::Int);
	}

	#[test]
	fn full_table_stops_loading() {
		let (table, buffer, declared) = load("int a, b, c; int d;", Some(2));
		assert_eq!(declared, 2);
		assert_eq!(table.len(), 2);
		assert_eq!(buffer.errors().len(), 1);
		assert!(table.lookup("c").is_none());
	}
}
