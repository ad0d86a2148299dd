use crate::symtable::{new_symbol_table, LookupStrategy, Symbol, SymbolError, SymbolTable, TableConfig};
use crate::CompilerError;
use serde::{Deserialize, Serialize};

/// Serializable copy of a symbol table and its configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolTableSnapshot {
	pub capacity: Option<usize>,
	#[serde(default)]
	pub strategy: LookupStrategy,
	pub symbols: Vec<Symbol>,
}

impl SymbolTableSnapshot {
	/// Copies the entries of a table
	pub fn new(table: &dyn SymbolTable, strategy: LookupStrategy) -> Self {
		Self {
			capacity: table.capacity(),
			strategy,
			symbols: table.symbols().to_vec(),
		}
	}

	pub fn config(&self) -> TableConfig {
		TableConfig {
			capacity: self.capacity,
			strategy: self.strategy,
		}
	}

	pub fn to_json(&self) -> Result<String, CompilerError> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	pub fn from_json(json: &str) -> Result<Self, CompilerError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Rebuilds the table. Every symbol goes through the regular insertion
	/// checks, so a hand-edited snapshot cannot break name uniqueness or capacity.
	pub fn restore(&self) -> Result<Box<dyn SymbolTable>, SymbolError> {
		self.restore_with(&self.config())
	}

	/// Rebuilds the table with different settings than the ones stored
	pub fn restore_with(&self, config: &TableConfig) -> Result<Box<dyn SymbolTable>, SymbolError> {
		let mut table = new_symbol_table(config);
		for symbol in &self.symbols {
			table.insert(symbol.clone())?;
		}
		Ok(table)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::symtable::SymbolType;
	use crate::{ProvidesCompilerDiagnostic, SourceSpan};

	fn sample_table() -> Box<dyn SymbolTable> {
		let mut table = new_symbol_table(&TableConfig::default());
		table.declare("count", SymbolType::Int, Some(SourceSpan::new(4, 5))).unwrap();
		table.lookup_or_insert("pending").unwrap();
		table.declare("name", SymbolType::String, None).unwrap();
		table
	}

	#[test]
	fn json_layout() {
		let snapshot = SymbolTableSnapshot::new(sample_table().as_ref(), LookupStrategy::Linear);
		let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

		assert_eq!(value["capacity"], 30);
		assert_eq!(value["strategy"], "linear");
		assert_eq!(value["symbols"][0]["name"], "count");
		assert_eq!(value["symbols"][0]["type"], "int");
		assert_eq!(value["symbols"][0]["span"]["start"], 4);
		assert_eq!(value["symbols"][1]["type"], "undefined");
		assert!(value["symbols"][2].get("span").is_none());
	}

	#[test]
	fn restore_preserves_order_and_types() {
		let snapshot = SymbolTableSnapshot::new(sample_table().as_ref(), LookupStrategy::Hashed);
		let parsed = SymbolTableSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
		assert_eq!(parsed, snapshot);

		let table = parsed.restore().unwrap();
		assert_eq!(table.capacity(), Some(30));
		assert_eq!(table.symbols(), sample_table().symbols());
	}

	#[test]
	fn restore_rechecks_invariants() {
		let json = r#"{
			"capacity": 1,
			"symbols": [
				{"name": "a", "type": "int"},
				{"name": "b", "type": "bool"}
			]
		}"#;
		let snapshot = SymbolTableSnapshot::from_json(json).unwrap();
		assert_eq!(snapshot.strategy, LookupStrategy::Linear);
		assert!(matches!(snapshot.restore(), Err(SymbolError::TableFull { capacity: 1, .. })));

		let json = r#"{"capacity": null, "symbols": [{"name": "a", "type": "int"}, {"name": "a", "type": "int"}]}"#;
		let snapshot = SymbolTableSnapshot::from_json(json).unwrap();
		assert!(matches!(snapshot.restore(), Err(SymbolError::Redeclared { .. })));
	}

	#[test]
	fn restore_with_other_config() {
		let snapshot = SymbolTableSnapshot::new(sample_table().as_ref(), LookupStrategy::Linear);

		let config = TableConfig {
			capacity: Some(2),
			strategy: LookupStrategy::Linear,
		};
		assert!(matches!(snapshot.restore_with(&config), Err(SymbolError::TableFull { capacity: 2, .. })));

		let config = TableConfig {
			capacity: None,
			strategy: LookupStrategy::Hashed,
		};
		let table = snapshot.restore_with(&config).unwrap();
		assert_eq!(table.capacity(), None);
		assert_eq!(table.symbols(), sample_table().symbols());
	}

	#[test]
	fn reversed_span_is_rejected() {
		let json = r#"{
			"capacity": null,
			"symbols": [
				{"name": "a", "type": "int", "span": {"start": 9, "end": 2}},
				{"name": "a", "type": "bool"}
			]
		}"#;
		assert!(matches!(SymbolTableSnapshot::from_json(json), Err(CompilerError::JsonError(_))));
	}

	#[test]
	fn redeclared_diagnostic_after_restore() {
		let json = r#"{
			"capacity": null,
			"symbols": [
				{"name": "a", "type": "int", "span": {"start": 2, "end": 9}},
				{"name": "a", "type": "bool", "span": {"start": 12, "end": 13}}
			]
		}"#;
		let err = SymbolTableSnapshot::from_json(json).unwrap().restore().err().unwrap();
		let diag = err.to_diagnostic();
		assert!(diag.is_error());
		assert_eq!(diag.label_count(), 2);
	}

	#[test]
	fn unknown_type_label_is_rejected() {
		let json = r#"{"capacity": null, "symbols": [{"name": "a", "type": "quaternion"}]}"#;
		assert!(matches!(SymbolTableSnapshot::from_json(json), Err(CompilerError::JsonError(_))));
	}
}
