use crate::SourceSpan;
use miette::{Diagnostic, LabeledSpan, Severity};
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A diagnostic message produced while lexing, parsing or filling a symbol table
#[derive(Clone, Debug)]
pub struct CompilerDiagnostic {
	severity: Severity,
	error_text: String,
	help_text: Option<String>,
	error_code: Option<String>,
	labels: Vec<LabeledSpan>,
}

/// Used to conveniently craft diagnostic messages
pub struct CompilerDiagnosticBuilder {
	diag: CompilerDiagnostic,
}

impl From<CompilerDiagnostic> for CompilerDiagnosticBuilder {
	fn from(diag: CompilerDiagnostic) -> Self {
		Self { diag }
	}
}

impl CompilerDiagnosticBuilder {
	/// Creates an error diagnostic from an error type
	pub fn from_error<ErrorType>(err: &ErrorType) -> Self
	where
		ErrorType: Error,
	{
		Self::new_error(&err.to_string())
	}

	pub fn new_error(msg: &str) -> Self {
		CompilerDiagnostic::new_error(msg).into()
	}

	pub fn new_warning(msg: &str) -> Self {
		CompilerDiagnostic::new_warning(msg).into()
	}

	/// Adds a source code label
	pub fn label(mut self, span: SourceSpan, msg: &str) -> Self {
		self.diag.add_label(span, msg);
		self
	}

	/// Adds a source code label if the location is known
	pub fn label_opt(self, span: Option<SourceSpan>, msg: &str) -> Self {
		match span {
			Some(span) => self.label(span, msg),
			None => self,
		}
	}

	/// Attaches an error code
	pub fn error_code(mut self, code: &str) -> Self {
		self.diag.error_code = Some(code.into());
		self
	}

	/// Attaches a help message
	pub fn help(mut self, help: &str) -> Self {
		self.diag.help_text = Some(help.into());
		self
	}

	/// Turns the message into a warning, keeping text and labels
	pub fn as_warning(mut self) -> Self {
		self.diag.severity = Severity::Warning;
		self
	}

	pub fn build(self) -> CompilerDiagnostic {
		self.diag
	}
}

impl Display for CompilerDiagnostic {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.error_text)
	}
}

impl Error for CompilerDiagnostic {}

impl Diagnostic for CompilerDiagnostic {
	fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
		self.error_code.as_ref().map(|code| Box::new(code) as Box<dyn Display + 'a>)
	}

	fn severity(&self) -> Option<Severity> {
		Some(self.severity)
	}

	fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
		self.help_text.as_ref().map(|help| Box::new(help) as Box<dyn Display + 'a>)
	}

	fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
		if self.labels.is_empty() {
			return None;
		}
		Some(Box::new(self.labels.iter().cloned()))
	}
}

impl CompilerDiagnostic {
	fn new(severity: Severity, msg: &str) -> Self {
		Self {
			severity,
			error_text: msg.into(),
			help_text: None,
			error_code: None,
			labels: Vec::new(),
		}
	}

	pub fn new_error(msg: &str) -> Self {
		Self::new(Severity::Error, msg)
	}

	pub fn new_warning(msg: &str) -> Self {
		Self::new(Severity::Warning, msg)
	}

	/// Attaches source code label
	pub fn add_label(&mut self, span: SourceSpan, msg: &str) {
		self.labels
			.push(LabeledSpan::new_with_span(Some(String::from(msg)), miette::SourceSpan::from(span)));
	}

	pub fn is_error(&self) -> bool {
		matches!(self.severity, Severity::Error)
	}

	pub fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	pub fn label_count(&self) -> usize {
		self.labels.len()
	}
}

/// Indicates that type can provide a CompilerDiagnostic message.
/// All error types of this crate implement this trait.
pub trait ProvidesCompilerDiagnostic {
	fn to_diagnostic(&self) -> CompilerDiagnostic;

	fn to_miette_report(&self) -> miette::Report {
		miette::Report::new(self.to_diagnostic())
	}
}

impl<T> ProvidesCompilerDiagnostic for &T
where
	T: ProvidesCompilerDiagnostic,
{
	fn to_diagnostic(&self) -> CompilerDiagnostic {
		(*self).to_diagnostic()
	}
}
