use super::{Declaration, ParserError, ParserErrorKind, TypeSpec};
use crate::core::IdTableKey;
use crate::lexer::{PunctuatorKind, Token, TokenKind};
use crate::SourceSpan;

/// Recursive descent parser for declaration files
///
/// ```text
/// file        := declaration*
/// declaration := type_spec identifier (',' identifier)* ';'
/// type_spec   := type_keyword | number
/// ```
pub struct DeclarationParser<'a> {
	tokens: &'a [Token],
	position: usize,
	source_len: usize,
}

impl<'a> DeclarationParser<'a> {
	pub fn new(tokens: &'a [Token], source_len: usize) -> Self {
		Self {
			tokens,
			position: 0,
			source_len,
		}
	}

	/// Parses all declarations. The first error aborts parsing.
	pub fn parse(mut self) -> Result<Vec<Declaration>, ParserError> {
		let mut declarations = Vec::new();
		while self.peek().is_some() {
			declarations.push(self.parse_declaration()?);
		}
		Ok(declarations)
	}

	fn peek(&self) -> Option<&'a Token> {
		self.tokens.get(self.position)
	}

	fn eof_error(&self) -> ParserError {
		ParserError {
			range: SourceSpan::new(self.source_len, 0),
			kind: ParserErrorKind::UnexpectedEof,
		}
	}

	fn next_token(&mut self) -> Result<&'a Token, ParserError> {
		let token = self.peek().ok_or_else(|| self.eof_error())?;
		self.position += 1;
		Ok(token)
	}

	fn parse_type_spec(&mut self) -> Result<TypeSpec, ParserError> {
		let token = self.next_token()?;
		match token.kind {
			TokenKind::Keyword(keyword) => Ok(TypeSpec::Keyword(keyword.symbol_type(), token.range)),
			TokenKind::Number(code) => Ok(TypeSpec::Code(code, token.range)),
			_ => Err(ParserError {
				range: token.range,
				kind: ParserErrorKind::ExpectedTypeSpec,
			}),
		}
	}

	fn parse_identifier(&mut self) -> Result<(IdTableKey, SourceSpan), ParserError> {
		let token = self.next_token()?;
		match token.kind {
			TokenKind::Id(key) => Ok((key, token.range)),
			_ => Err(ParserError {
				range: token.range,
				kind: ParserErrorKind::ExpectedIdentifier,
			}),
		}
	}

	fn parse_declaration(&mut self) -> Result<Declaration, ParserError> {
		let type_spec = self.parse_type_spec()?;
		let mut names = vec![self.parse_identifier()?];

		loop {
			let token = self.next_token()?;
			match token.kind {
				TokenKind::Punctuator(PunctuatorKind::Comma) => names.push(self.parse_identifier()?),
				TokenKind::Punctuator(PunctuatorKind::Semicolon) => {
					return Ok(Declaration {
						type_spec,
						names,
						span: type_spec.span().merge(&token.range),
					})
				},
				_ => {
					return Err(ParserError {
						range: token.range,
						kind: ParserErrorKind::UnexpectedToken,
					})
				},
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::parse_source;
	use super::*;
	use crate::symtable::SymbolType;
	use crate::CompilerError;

	fn parse_err(source: &str) -> ParserError {
		match parse_source(source) {
			Err(CompilerError::ParserError(err)) => err,
			other => panic!("expected parser error, got {:?}", other),
		}
	}

	#[test]
	fn declaration_with_name_list() {
		let (decls, ids) = parse_source("int a, b, c;").unwrap();
		assert_eq!(decls.len(), 1);
		assert!(matches!(decls[0].type_spec, TypeSpec::Keyword(SymbolType::Int, _)));
		let names: Vec<&str> = decls[0]
			.names
			.iter()
			.map(|(key, _)| ids.get_by_key(key).unwrap().as_str())
			.collect();
		assert_eq!(names, vec!["a", "b", "c"]);
		assert_eq!(decls[0].span, SourceSpan::new_between(0, 12));
	}

	#[test]
	fn numeric_type_code() {
		let (decls, _) = parse_source("5 label;\n4 flag;").unwrap();
		assert_eq!(decls.len(), 2);
		assert!(matches!(decls[0].type_spec, TypeSpec::Code(5, _)));
		assert!(matches!(decls[1].type_spec, TypeSpec::Code(4, _)));
	}

	#[test]
	fn empty_source() {
		let (decls, ids) = parse_source("  // nothing here\n").unwrap();
		assert!(decls.is_empty());
		assert!(ids.is_empty());
	}

	#[test]
	fn missing_semicolon() {
		let err = parse_err("int a");
		assert_eq!(err.kind, ParserErrorKind::UnexpectedEof);
		assert_eq!(err.range.start(), 5);
	}

	#[test]
	fn keyword_as_name() {
		let err = parse_err("int float;");
		assert_eq!(err.kind, ParserErrorKind::ExpectedIdentifier);
		assert_eq!(err.range, SourceSpan::new(4, 5));
	}

	#[test]
	fn declaration_without_type() {
		let err = parse_err("a, b;");
		assert_eq!(err.kind, ParserErrorKind::ExpectedTypeSpec);
	}

	#[test]
	fn missing_comma() {
		let err = parse_err("int a b;");
		assert_eq!(err.kind, ParserErrorKind::UnexpectedToken);
		assert_eq!(err.range, SourceSpan::new(6, 1));
	}
}
