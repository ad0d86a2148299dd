use super::{KeywordKind, Lexer, LexerError, LexerErrorKind, PunctuatorKind, SourceSpan, Token};
use crate::core::{IdTable, IdTableKey};
use logos::Logos;

/// Parses a numeric type code, remembering the failure for error reporting
fn parse_type_code(lex: &mut logos::Lexer<TokenKind>) -> Option<u32> {
	match lex.slice().parse::<u32>() {
		Ok(code) => Some(code),
		Err(_) => {
			lex.extras.last_err = Some(LexerError {
				range: SourceSpan::new_from_range(&lex.span()),
				kind: LexerErrorKind::InvalidNumber,
			});
			None
		},
	}
}

/// Registers token in the lexer's ID table
fn register_id_token(lex: &mut logos::Lexer<TokenKind>) -> IdTableKey {
	lex.extras.id_table.insert_or_get(lex.slice())
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LogosLexerContext)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
pub enum TokenKind {
	#[regex(r"[0-9]+", parse_type_code)]
	Number(u32),

	#[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", register_id_token)]
	Id(IdTableKey),

	#[token("bool",   |_| KeywordKind::Bool)]
	#[token("char",   |_| KeywordKind::Char)]
	#[token("float",  |_| KeywordKind::Float)]
	#[token("int",    |_| KeywordKind::Int)]
	#[token("string", |_| KeywordKind::String)]
	#[token("void",   |_| KeywordKind::Void)]
	Keyword(KeywordKind),

	#[token(",", |_| PunctuatorKind::Comma)]
	#[token(";", |_| PunctuatorKind::Semicolon)]
	Punctuator(PunctuatorKind),
}

/// Additional data structures accessed by the token callbacks
///
/// Owned by logos::Lexer as its extras.
#[derive(Default)]
pub struct LogosLexerContext {
	/// Identifier table (names only)
	pub id_table: IdTable,

	/// Last lexing error (written by custom token parsing functions)
	pub last_err: Option<LexerError>,
}

/// Logos-based lexer implementation
pub struct LogosLexer<'source> {
	lexer: logos::Lexer<'source, TokenKind>,
}

impl<'source> LogosLexer<'source> {
	/// Creates a lexer that keeps interning into an existing ID table
	pub fn new_with_context(source: &'source str, context: LogosLexerContext) -> Self {
		LogosLexer {
			lexer: TokenKind::lexer_with_extras(source, context),
		}
	}

	/// Consumes the lexer and gives back the tables it filled
	pub fn into_context(self) -> LogosLexerContext {
		self.lexer.extras
	}
}

impl<'source> Lexer<'source> for LogosLexer<'source> {
	fn new(source: &'source str) -> Self {
		Self::new_with_context(source, LogosLexerContext::default())
	}

	fn process(&mut self) -> Result<Vec<Token>, LexerError> {
		let mut tokens = Vec::<Token>::new();

		while let Some(token_result) = self.lexer.next() {
			let range = SourceSpan::new_from_range(&self.lexer.span());
			match token_result {
				Ok(kind) => tokens.push(Token { kind, range }),
				Err(_) => {
					return Err(self.lexer.extras.last_err.take().unwrap_or(LexerError {
						kind: LexerErrorKind::InvalidToken,
						range,
					}));
				},
			}
		}

		Ok(tokens)
	}

	fn id_table(&self) -> &IdTable {
		&self.lexer.extras.id_table
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lex(source: &str) -> (Vec<TokenKind>, IdTable) {
		let mut lexer = LogosLexer::new(source);
		let tokens = lexer.process().expect("tokens expected");
		(tokens.into_iter().map(|t| t.kind).collect(), lexer.into_context().id_table)
	}

	#[test]
	fn keywords_take_priority_over_identifiers() {
		let (tokens, ids) = lex("int integer");
		assert_eq!(tokens[0], TokenKind::Keyword(KeywordKind::Int));
		let key = ids.get_by_name("integer").expect("identifier interned");
		assert_eq!(tokens[1], TokenKind::Id(key));
		assert!(!ids.contains_name("int"));
	}

	#[test]
	fn comments_and_whitespace_are_skipped() {
		let (tokens, _) = lex("// header\n  3 x ; // trailing\n");
		assert_eq!(tokens.len(), 3);
		assert_eq!(tokens[0], TokenKind::Number(3));
		assert_eq!(tokens[2], TokenKind::Punctuator(PunctuatorKind::Semicolon));
	}

	#[test]
	fn repeated_identifiers_share_a_key() {
		let (tokens, ids) = lex("a, b, a");
		assert_eq!(tokens[0], tokens[4]);
		assert_eq!(ids.len(), 2);
	}

	#[test]
	fn oversized_number_is_reported() {
		let mut lexer = LogosLexer::new("int 99999999999 x;");
		let err = lexer.process().unwrap_err();
		assert_eq!(err.kind, LexerErrorKind::InvalidNumber);
		assert_eq!(err.range.start(), 4);
		assert_eq!(err.range.len(), 11);
	}

	#[test]
	fn unknown_character_is_invalid_token() {
		let mut lexer = LogosLexer::new("int x = 4;");
		let err = lexer.process().unwrap_err();
		assert_eq!(err.kind, LexerErrorKind::InvalidToken);
		assert_eq!(err.range.start(), 6);
	}
}
