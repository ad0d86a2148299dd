use crate::compiler_diagnostic::CompilerDiagnostic;
use miette::NamedSource;

/// Collects diagnostics so that loading can continue past recoverable errors
#[derive(Clone, Default)]
pub struct DiagnosticBuffer {
	buffer: Vec<CompilerDiagnostic>,
	error_buffer: Vec<CompilerDiagnostic>,
}

impl DiagnosticBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores a diagnostic, sorting it by its severity
	pub fn push(&mut self, diag: CompilerDiagnostic) {
		if diag.is_error() {
			self.error_buffer.push(diag);
		}
		else {
			self.buffer.push(diag);
		}
	}

	pub fn contains_errors(&self) -> bool {
		!self.error_buffer.is_empty()
	}

	pub fn errors(&self) -> &[CompilerDiagnostic] {
		&self.error_buffer
	}

	pub fn warnings(&self) -> &[CompilerDiagnostic] {
		&self.buffer
	}

	/// Prints all warnings and errors to stderr.
	/// The last error is not printed but returned, so it can end the program.
	pub fn print_diagnostics(self, file_name: &str, source_code: &str) -> miette::Result<()> {
		let named_source = || NamedSource::new(file_name, source_code.to_owned());

		for diag in self.buffer {
			eprintln!("{:?}", miette::Report::new(diag).with_source_code(named_source()));
		}

		let mut errors = self.error_buffer;
		let last = match errors.pop() {
			Some(last) => last,
			None => return Ok(()),
		};

		for diag in errors {
			eprintln!("{:?}", miette::Report::new(diag).with_source_code(named_source()));
		}
		Err(miette::Report::new(last).with_source_code(named_source()))
	}
}
