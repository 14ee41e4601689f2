pub mod clock;
pub mod extractor;
pub mod fetcher;
pub mod renderer;
pub mod snapshot_writer;

pub use clock::*;
pub use extractor::*;
pub use fetcher::*;
pub use renderer::*;
pub use snapshot_writer::*;
