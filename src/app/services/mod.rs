pub mod file_rewriter;

pub use file_rewriter::FileRewriter;
