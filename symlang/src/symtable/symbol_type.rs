use super::SymbolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type descriptor stored with every symbol
///
/// Each variant has a stable numeric code and a textual label,
/// so declarations may name the type either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolType {
	/// Name was referenced before any declaration gave it a type
	#[default]
	Undefined,
	Int,
	Float,
	Char,
	Bool,
	String,
	Void,
}

const ALL_TYPES: [SymbolType; 7] = [
	SymbolType::Undefined,
	SymbolType::Int,
	SymbolType::Float,
	SymbolType::Char,
	SymbolType::Bool,
	SymbolType::String,
	SymbolType::Void,
];

impl SymbolType {
	pub fn code(&self) -> u32 {
		use SymbolType::*;
		match self {
			Undefined => 0,
			Int => 1,
			Float => 2,
			Char => 3,
			Bool => 4,
			String => 5,
			Void => 6,
		}
	}

	pub fn label(&self) -> &'static str {
		use SymbolType::*;
		match self {
			Undefined => "undefined",
			Int => "int",
			Float => "float",
			Char => "char",
			Bool => "bool",
			String => "string",
			Void => "void",
		}
	}

	pub fn from_code(code: u32) -> Option<SymbolType> {
		ALL_TYPES.iter().copied().find(|t| t.code() == code)
	}

	pub fn is_defined(&self) -> bool {
		!matches!(self, SymbolType::Undefined)
	}
}

impl fmt::Display for SymbolType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

impl FromStr for SymbolType {
	type Err = SymbolError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ALL_TYPES
			.iter()
			.copied()
			.find(|t| t.label() == s)
			.ok_or_else(|| SymbolError::UnknownTypeLabel(s.to_owned()))
	}
}
