mod diagnostic;
mod logos_lexer;

use crate::core::IdTable;
use crate::symtable::SymbolType;
use crate::SourceSpan;
use std::fmt;
use thiserror::Error;

pub use logos_lexer::{LogosLexer, LogosLexerContext, TokenKind};

/// Types of lexer errors
#[derive(Copy, Clone, Error, Debug, PartialEq, Eq)]
pub enum LexerErrorKind {
	/// Lexer couldn't match token to any regex
	#[error("Invalid token")]
	InvalidToken,

	/// Type code does not fit in 32 bits
	#[error("Invalid number token")]
	InvalidNumber,
}

/// Lexer error
#[derive(Copy, Clone, Error, Debug)]
pub struct LexerError {
	pub range: SourceSpan,
	pub kind: LexerErrorKind,
}

impl fmt::Display for LexerError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.kind)
	}
}

/// Type keywords accepted in declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
	Bool,
	Char,
	Float,
	Int,
	String,
	Void,
}

impl KeywordKind {
	/// Symbol type named by the keyword
	pub fn symbol_type(&self) -> SymbolType {
		use KeywordKind::*;
		match self {
			Bool => SymbolType::Bool,
			Char => SymbolType::Char,
			Float => SymbolType::Float,
			Int => SymbolType::Int,
			String => SymbolType::String,
			Void => SymbolType::Void,
		}
	}
}

/// All punctuators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunctuatorKind {
	Comma,     // ,
	Semicolon, // ;
}

/// Token as produced by the lexer (token kind + source location)
#[derive(Debug, Copy, Clone)]
pub struct Token {
	pub kind: TokenKind,
	pub range: SourceSpan,
}

/// Abstract lexer
pub trait Lexer<'source> {
	/// Creates a lexer for provided source code
	fn new(source: &'source str) -> Self;

	/// Processes the text and returns a vector of tokens
	fn process(&mut self) -> Result<Vec<Token>, LexerError>;

	/// Access the ID table
	fn id_table(&self) -> &IdTable;
}
