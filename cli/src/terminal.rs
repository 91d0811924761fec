pub mod colors;
pub mod format;
pub mod keys;
pub mod logging;
pub mod page;
pub mod print;
pub mod screen;
pub mod spinner;
