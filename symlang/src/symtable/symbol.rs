use super::SymbolType;
use crate::SourceSpan;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_TABLE_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of one symbol table, stored in every key it hands out
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub struct TableId(usize);

impl TableId {
	pub(super) fn next() -> Self {
		TableId(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// Opaque handle to a symbol table entry
///
/// Entries are never removed, so a key stays valid for the lifetime of its table.
/// Keys from another table are rejected even if their index is in range.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, Display)]
#[display(fmt = "#{}", index)]
pub struct SymbolKey {
	table: TableId,
	index: usize,
}

impl SymbolKey {
	pub(super) fn new(table: TableId, index: usize) -> Self {
		Self { table, index }
	}

	pub(super) fn table(&self) -> TableId {
		self.table
	}

	pub(super) fn index(&self) -> usize {
		self.index
	}
}

/// Symbol table entry - a name and its type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
	name: String,
	#[serde(rename = "type")]
	symbol_type: SymbolType,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	span: Option<SourceSpan>,
}

impl Symbol {
	pub fn new(name: &str, symbol_type: SymbolType, span: Option<SourceSpan>) -> Self {
		Self {
			name: name.to_owned(),
			symbol_type,
			span,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn symbol_type(&self) -> SymbolType {
		self.symbol_type
	}

	/// Location of the declaration, if it came from source code
	pub fn span(&self) -> Option<SourceSpan> {
		self.span
	}

	/// Gives the symbol a type. The name is immutable so hashed indices stay valid.
	pub(super) fn set_type(&mut self, symbol_type: SymbolType, span: Option<SourceSpan>) {
		self.symbol_type = symbol_type;
		if span.is_some() {
			self.span = span;
		}
	}
}
