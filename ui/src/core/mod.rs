//! Platform-agnostic building blocks: input domains, plan text, image
//! lookup/resizing and the sample progress table.

pub mod assets;
pub mod format;
pub mod imaging;
pub mod plan;
pub mod progress;
pub mod selection;
