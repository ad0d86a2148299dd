use bimap::BiHashMap;

/// Opaque key type for the identifier table
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub struct IdTableKey {
	key: usize,
}

/// Interned identifier names - tokens carry keys instead of strings
#[derive(Clone, Debug, Default)]
pub struct IdTable {
	ids: BiHashMap<String, IdTableKey>,
}

impl IdTable {
	pub fn new() -> IdTable {
		IdTable::default()
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn contains_name(&self, name: &str) -> bool {
		self.ids.contains_left(name)
	}

	/// Gets the identifier string by key (or None)
	pub fn get_by_key(&self, key: &IdTableKey) -> Option<&String> {
		self.ids.get_by_right(key)
	}

	/// Gets key by identifier name (or None)
	pub fn get_by_name(&self, name: &str) -> Option<IdTableKey> {
		self.ids.get_by_left(name).copied()
	}

	/// Interns the name, returning the existing key if it is already known
	pub fn insert_or_get(&mut self, name: &str) -> IdTableKey {
		if let Some(key) = self.get_by_name(name) {
			return key;
		}
		let key = IdTableKey { key: self.ids.len() };
		self.ids.insert(String::from(name), key);
		key
	}
}
