mod note;

pub use note::{title_or_default, Note, DEFAULT_TITLE};
