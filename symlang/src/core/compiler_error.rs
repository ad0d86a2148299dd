use crate::compiler_diagnostic::*;
use crate::lexer::LexerError;
use crate::parser::ParserError;
use crate::symtable::SymbolError;
use thiserror::Error;

/// General error type
///
/// Wraps the errors of every stage: lexing, parsing, symbol table operations and I/O
#[derive(Debug, Error)]
pub enum CompilerError {
	#[error(transparent)]
	LexerError(#[from] LexerError),

	#[error(transparent)]
	ParserError(#[from] ParserError),

	#[error(transparent)]
	SymbolError(#[from] SymbolError),

	#[error(transparent)]
	IoError(#[from] std::io::Error),

	#[error("File not found")]
	FileNotFound(String),

	#[error(transparent)]
	JsonError(#[from] serde_json::Error),
}

impl ProvidesCompilerDiagnostic for CompilerError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		use CompilerError::*;
		match self {
			LexerError(lexer_error) => lexer_error.to_diagnostic(),

			ParserError(parser_error) => parser_error.to_diagnostic(),

			SymbolError(symbol_error) => symbol_error.to_diagnostic(),

			IoError(io_error) => CompilerDiagnosticBuilder::from_error(self)
				.help(&io_error.to_string())
				.build(),

			JsonError(serde_error) => CompilerDiagnosticBuilder::new_error("Invalid symbol table snapshot")
				.help(&serde_error.to_string())
				.build(),

			FileNotFound(file_name) => CompilerDiagnosticBuilder::from_error(self)
				.help(&format!("Make sure this file exists: {}", file_name))
				.build(),
		}
	}
}
