mod basic_symbol_table;
mod hashed_symbol_table;
mod symbol;
mod symbol_error;
mod symbol_type;

use crate::SourceSpan;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use basic_symbol_table::BasicSymbolTable;
pub use hashed_symbol_table::HashedSymbolTable;
pub use symbol::{Symbol, SymbolKey, TableId};
pub use symbol_error::SymbolError;
pub use symbol_type::SymbolType;

/// Number of entries a table holds unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 30;

lazy_static! {
	static ref VALID_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][0-9a-zA-Z_]*$").unwrap();
}

/// Checks if given name can be stored in a symbol table
pub fn is_name_valid(name: &str) -> bool {
	VALID_NAME_REGEX.is_match(name)
}

/// How names are matched against table entries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
	/// Ordered scan over the entries
	#[default]
	Linear,

	/// Hash index kept next to the ordered entries
	Hashed,
}

/// Symbol table settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
	/// Maximum number of entries, `None` means the table grows as needed
	pub capacity: Option<usize>,
	pub strategy: LookupStrategy,
}

impl Default for TableConfig {
	fn default() -> Self {
		Self {
			capacity: Some(DEFAULT_CAPACITY),
			strategy: LookupStrategy::default(),
		}
	}
}

/// Settings given explicitly by the user, laid over a base config
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
	/// `Some(None)` requests an unbounded table
	pub capacity: Option<Option<usize>>,
	pub strategy: Option<LookupStrategy>,
}

impl ConfigOverrides {
	pub fn apply(&self, base: TableConfig) -> TableConfig {
		TableConfig {
			capacity: self.capacity.unwrap_or(base.capacity),
			strategy: self.strategy.unwrap_or(base.strategy),
		}
	}
}

/// Creates an empty table as described by the config
pub fn new_symbol_table(config: &TableConfig) -> Box<dyn SymbolTable> {
	debug!("Creating {:?} symbol table, capacity {:?}", config.strategy, config.capacity);
	match config.strategy {
		LookupStrategy::Linear => Box::new(BasicSymbolTable::new(config.capacity)),
		LookupStrategy::Hashed => Box::new(HashedSymbolTable::new(config.capacity)),
	}
}

/// Checks whether a symbol may be appended to a table
fn check_insert(table: &dyn SymbolTable, symbol: &Symbol) -> Result<(), SymbolError> {
	if !is_name_valid(symbol.name()) {
		return Err(SymbolError::InvalidName {
			name: symbol.name().to_owned(),
			span: symbol.span(),
		});
	}

	if let Some(existing) = table.lookup(symbol.name()) {
		return Err(SymbolError::Redeclared {
			name: symbol.name().to_owned(),
			new_type: symbol.symbol_type(),
			previous_type: existing.symbol_type(),
			span: symbol.span(),
			previous: existing.span(),
		});
	}

	match table.capacity() {
		Some(capacity) if table.len() >= capacity => Err(SymbolError::TableFull {
			capacity,
			span: symbol.span(),
		}),
		_ => Ok(()),
	}
}

/// Flat table mapping names to their types
///
/// Names are unique and entries are kept in insertion order.
pub trait SymbolTable {
	/// Identity stamped into every key of this table
	fn table_id(&self) -> TableId;

	/// Maximum number of entries (`None` if unbounded)
	fn capacity(&self) -> Option<usize>;

	/// All entries in insertion order
	fn symbols(&self) -> &[Symbol];

	/// Finds the key of a symbol by name
	fn find(&self, name: &str) -> Option<SymbolKey>;

	/// Appends a new symbol.
	/// Fails if the name is invalid, already present or if the table is full.
	fn insert(&mut self, symbol: Symbol) -> Result<SymbolKey, SymbolError>;

	/// Mutable access to an entry. Only its type can be changed.
	/// Keys issued by another table yield `None`.
	fn get_mut(&mut self, key: SymbolKey) -> Option<&mut Symbol>;

	fn get(&self, key: SymbolKey) -> Option<&Symbol> {
		if key.table() != self.table_id() {
			return None;
		}
		self.symbols().get(key.index())
	}

	/// Entries with their keys, in insertion order
	fn entries(&self) -> Box<dyn Iterator<Item = (SymbolKey, &Symbol)> + '_> {
		let table = self.table_id();
		Box::new(
			self.symbols()
				.iter()
				.enumerate()
				.map(move |(index, symbol)| (SymbolKey::new(table, index), symbol)),
		)
	}

	fn len(&self) -> usize {
		self.symbols().len()
	}

	fn is_empty(&self) -> bool {
		self.symbols().is_empty()
	}

	/// Unbounded tables are never full
	fn is_full(&self) -> bool {
		self.capacity().map_or(false, |capacity| self.len() >= capacity)
	}

	/// Looks a name up without modifying the table
	fn lookup(&self, name: &str) -> Option<&Symbol> {
		self.find(name).and_then(|key| self.get(key))
	}

	/// Returns the symbol's key, adding an `Undefined` entry if the name is new
	fn lookup_or_insert(&mut self, name: &str) -> Result<SymbolKey, SymbolError> {
		match self.find(name) {
			Some(key) => Ok(key),
			None => self.insert(Symbol::new(name, SymbolType::Undefined, None)),
		}
	}

	/// Declares a symbol with a type.
	///
	/// Entries created by [`SymbolTable::lookup_or_insert`] get their type filled in.
	/// Declaring a name again with the same type returns the existing key.
	fn declare(
		&mut self,
		name: &str,
		symbol_type: SymbolType,
		span: Option<SourceSpan>,
	) -> Result<SymbolKey, SymbolError> {
		let key = match self.find(name) {
			Some(key) => key,
			None => return self.insert(Symbol::new(name, symbol_type, span)),
		};

		let symbol = self.get_mut(key).ok_or(SymbolError::InvalidKey)?;
		let previous_type = symbol.symbol_type();
		if !previous_type.is_defined() {
			symbol.set_type(symbol_type, span);
			debug!("Symbol '{}' defined as {}", name, symbol_type);
			return Ok(key);
		}

		if previous_type == symbol_type || !symbol_type.is_defined() {
			return Ok(key);
		}

		Err(SymbolError::Redeclared {
			name: name.to_owned(),
			new_type: symbol_type,
			previous_type,
			span,
			previous: symbol.span(),
		})
	}

	/// Overwrites the type of an existing entry. Foreign keys fail with `InvalidKey`.
	fn define(&mut self, key: SymbolKey, symbol_type: SymbolType) -> Result<(), SymbolError> {
		let symbol = self.get_mut(key).ok_or(SymbolError::InvalidKey)?;
		symbol.set_type(symbol_type, None);
		Ok(())
	}
}
