pub mod compiler_diagnostic;
pub mod compiler_error;
pub mod diagnostic_buffer;
pub mod id_table;
pub mod source_span;

pub use compiler_diagnostic::CompilerDiagnostic;
pub use compiler_diagnostic::CompilerDiagnosticBuilder;
pub use compiler_diagnostic::ProvidesCompilerDiagnostic;
pub use compiler_error::CompilerError;
pub use diagnostic_buffer::DiagnosticBuffer;
pub use id_table::{IdTable, IdTableKey};
pub use source_span::SourceSpan;
