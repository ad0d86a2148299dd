use super::{LexerError, LexerErrorKind};
use crate::core::compiler_diagnostic::*;

impl ProvidesCompilerDiagnostic for LexerError {
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		let diag = CompilerDiagnosticBuilder::from_error(self).error_code("symlang::lexer");
		let diag = match self.kind {
			LexerErrorKind::InvalidNumber => diag
				.label(self.range, "This is not a valid type code")
				.help("Type codes are unsigned decimal numbers that fit in 32 bits"),

			LexerErrorKind::InvalidToken => diag
				.label(self.range, "This token doesn't make sense")
				.help("This is neither a type keyword, an identifier, a type code nor one of ',' ';'"),
		};
		diag.build()
	}
}
