//! Editing model: the caret

mod caret;

pub use caret::Caret;
