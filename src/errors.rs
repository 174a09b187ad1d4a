pub use crate::exports::ExportError;
