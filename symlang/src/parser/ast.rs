use crate::core::IdTableKey;
use crate::symtable::SymbolType;
use crate::SourceSpan;

/// Type given in a declaration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeSpec {
	/// Type named by a keyword, e.g. `int`
	Keyword(SymbolType, SourceSpan),

	/// Type given by its numeric code, e.g. `1`
	Code(u32, SourceSpan),
}

impl TypeSpec {
	pub fn span(&self) -> SourceSpan {
		match self {
			TypeSpec::Keyword(_, span) | TypeSpec::Code(_, span) => *span,
		}
	}
}

/// One declaration statement: `int a, b;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
	pub type_spec: TypeSpec,
	pub names: Vec<(IdTableKey, SourceSpan)>,
	pub span: SourceSpan,
}
