use super::{check_insert, Symbol, SymbolError, SymbolKey, SymbolTable, TableId, DEFAULT_CAPACITY};
use log::debug;

/// Symbol table searched with an ordered scan
///
/// Cheap for small tables, which is what compilers usually need for a single file.
#[derive(Debug)]
pub struct BasicSymbolTable {
	id: TableId,
	symbols: Vec<Symbol>,
	capacity: Option<usize>,
}

impl BasicSymbolTable {
	pub fn new(capacity: Option<usize>) -> Self {
		Self {
			id: TableId::next(),
			symbols: Vec::with_capacity(capacity.unwrap_or(0).min(DEFAULT_CAPACITY)),
			capacity,
		}
	}
}

impl SymbolTable for BasicSymbolTable {
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
		self.symbols.iter().position(|s| s.name() == name).map(|index| SymbolKey::new(self.id, index))
	}

	fn insert(&mut self, symbol: Symbol) -> Result<SymbolKey, SymbolError> {
		check_insert(&*self, &symbol)?;
		let key = SymbolKey::new(self.id, self.symbols.len());
		debug!("Inserting symbol '{}' ({}) as {}", symbol.name(), symbol.symbol_type(), key);
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
