// Rewriter module - the line scan that updates module versions
//
// - LineRewriter: block detection state machine and version substitution
// - RewriteReport: what a single pass saw and changed
pub mod line_rewriter;
pub mod report;

pub use line_rewriter::LineRewriter;
pub use report::RewriteReport;
