use super::{check_insert, Symbol, SymbolError, SymbolKey, SymbolTable, TableId};
use log::debug;
use std::collections::HashMap;

/// Symbol table with a name index
///
/// Entries live in insertion order just like in [`super::BasicSymbolTable`];
/// the map only speeds up `find`.
#[derive(Debug)]
pub struct HashedSymbolTable {
	id: TableId,
	symbols: Vec<Symbol>,
	index: HashMap<String, SymbolKey>,
	capacity: Option<usize>,
}

impl HashedSymbolTable {
	pub fn new(capacity: Option<usize>) -> Self {
		Self {
			id: TableId::next(),
			symbols: Vec::new(),
			index: HashMap::new(),
			capacity,
		}
	}
}

impl SymbolTable for HashedSymbolTable {
	fn table_id(&self) -> TableId {
		self.id
	}

	fn capacity(&self) -> Option<usize> {
		self.capacity
	}

	fn symbols(&self) -> &[Symbol] {
		&self.symbols
	}

	fn find(&self, name: &str) -> Option<SymbolKey> {
		self.index.get(name).copied()
	}

	fn insert(&mut self, symbol: Symbol) -> Result<SymbolKey, SymbolError> {
		check_insert(&*self, &symbol)?;
		let key = SymbolKey::new(self.id, self.symbols.len());
		debug!("Inserting symbol '{}' ({}) as {} (hashed)", symbol.name(), symbol.symbol_type(), key);
		self.index.insert(symbol.name().to_owned(), key);
		self.symbols.push(symbol);
		Ok(key)
	}

	fn get_mut(&mut self, key: SymbolKey) -> Option<&mut Symbol> {
		if key.table() != self.id {
			return None;
		}
		self.symbols.get_mut(key.index())
	}
}
