pub mod constants;
pub mod export;
pub mod layout;
mod options;
mod plate;
mod presets;
pub mod render;
mod types;

pub use export::{Converter, load_fill_csv, write_svg};
pub use options::*;
pub use plate::PaperPlate;
pub use presets::*;
pub use render::{Canvas, SvgDrawing};
pub use types::*;
