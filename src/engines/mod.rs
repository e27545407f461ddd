//! Search engine implementations.

mod bing;
mod duckduckgo;
mod startpage;
mod yahoo;

pub use bing::Bing;
pub use duckduckgo::DuckDuckGo;
pub use startpage::Startpage;
pub use yahoo::Yahoo;
