//! Display helpers used by the HTTP layer. The engine never depends on these.

pub mod format;
pub mod palette;

pub use format::{format_fixed, format_pl, format_price, format_signed};
pub use palette::{ColorAssigner, PaletteColorAssigner, DEFAULT_COLOR_CAPACITY, DEFAULT_PALETTE};
