use super::SymbolType;
use crate::core::compiler_diagnostic::*;
use crate::SourceSpan;
use thiserror::Error;

/// Errors reported by symbol table operations
///
/// A failed operation never modifies the table.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SymbolError {
	#[error("Symbol table is full ({capacity} entries)")]
	TableFull { capacity: usize, span: Option<SourceSpan> },

	#[error("`{name}` is not a valid symbol name")]
	InvalidName { name: String, span: Option<SourceSpan> },

	#[error("Symbol `{name}` redeclared as `{new_type}`, previously declared as `{previous_type}`")]
	Redeclared {
		name: String,
		new_type: SymbolType,
		previous_type: SymbolType,
		span: Option<SourceSpan>,
		previous: Option<SourceSpan>,
	},

	#[error("Symbol `{0}` not found")]
	NotFound(String),

	#[error("Unknown type code {code}")]
	UnknownTypeCode { code: u32, span: Option<SourceSpan> },

	#[error("Unknown type `{0}`")]
	UnknownTypeLabel(String),

	#[error("Symbol key does not belong to this table")]
	InvalidKey,
}

impl SymbolError {
	/// Stable identifier shown next to the message
	pub fn code(&self) -> &'static str {
		use SymbolError::*;
		match self {
			TableFull { .. } => "symtable::table_full",
			InvalidName { .. } => "symtable::invalid_name",
			Redeclared { .. } => "symtable::redeclared",
			NotFound(_) => "symtable::not_found",
			UnknownTypeCode { .. } => "symtable::unknown_type_code",
			UnknownTypeLabel(_) => "symtable::unknown_type_label",
			InvalidKey => "symtable::invalid_key",
		}
	}
}

impl ProvidesCompilerDiagnostic for SymbolError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		use SymbolError::*;
		let diag = CompilerDiagnosticBuilder::from_error(self).error_code(self.code());
		let diag = match self {
			TableFull { span, .. } => diag
				.label_opt(*span, "No room left for this symbol")
				.help("Increase the table capacity with --capacity or use --unbounded"),

			InvalidName { span, .. } => diag
				.label_opt(*span, "Invalid name")
				.help("Names must start with a letter or '_' and contain only letters, digits and '_'"),

			Redeclared { span, previous, .. } => diag
				.label_opt(*previous, "First declared here")
				.label_opt(*span, "Redeclared here")
				.help("Each symbol can only have one type"),

			NotFound(_) => diag.help("Make sure the symbol is declared in the source file"),

			UnknownTypeCode { span, .. } => diag
				.label_opt(*span, "This type code is unknown")
				.help("Valid type codes are 1 (int), 2 (float), 3 (char), 4 (bool), 5 (string) and 6 (void)"),

			UnknownTypeLabel(_) => diag.help("Valid types are int, float, char, bool, string and void"),

			InvalidKey => diag,
		};
		diag.build()
	}
}
