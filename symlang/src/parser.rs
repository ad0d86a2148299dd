pub mod ast;
mod declaration_parser;

use crate::core::compiler_diagnostic::*;
use crate::lexer::{Lexer, LogosLexer};
use crate::{CompilerError, SourceSpan};
use std::fmt;
use thiserror::Error;

pub use ast::{Declaration, TypeSpec};
pub use declaration_parser::DeclarationParser;

/// Types of parser errors
#[derive(Copy, Clone, Error, Debug, PartialEq, Eq)]
pub enum ParserErrorKind {
	#[error("Unexpected token")]
	UnexpectedToken,

	#[error("Unexpected end of file")]
	UnexpectedEof,

	#[error("Expected an identifier")]
	ExpectedIdentifier,

	#[error("Expected a type")]
	ExpectedTypeSpec,
}

/// Parser error
#[derive(Copy, Clone, Error, Debug)]
pub struct ParserError {
	pub range: SourceSpan,
	pub kind: ParserErrorKind,
}

impl fmt::Display for ParserError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.kind)
	}
}

impl ProvidesCompilerDiagnostic for ParserError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		use ParserErrorKind::*;
		let diag = CompilerDiagnosticBuilder::from_error(self).error_code("symlang::parser");
		let diag = match self.kind {
			UnexpectedToken => diag
				.label(self.range, "This token was not expected here")
				.help("Each declaration looks like `int a, b;`"),
			UnexpectedEof => diag
				.label(self.range, "File ends here")
				.help("Did you forget a ';'?"),
			ExpectedIdentifier => diag
				.label(self.range, "Expected a symbol name here")
				.help("Type names are reserved and cannot be used as symbol names"),
			ExpectedTypeSpec => diag
				.label(self.range, "Expected a type here")
				.help("Use a type keyword (int, float, char, bool, string, void) or a numeric type code"),
		};
		diag.build()
	}
}

/// Lexes and parses a declaration file
pub fn parse_source(source: &str) -> Result<(Vec<Declaration>, crate::core::IdTable), CompilerError> {
	let mut lexer = LogosLexer::new(source);
	let tokens = lexer.process()?;
	let declarations = DeclarationParser::new(&tokens, source.len()).parse()?;
	Ok((declarations, lexer.into_context().id_table))
}
