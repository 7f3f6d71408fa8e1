pub mod ergast;
pub mod fallback;
pub mod formula1;
mod http;

pub use ergast::ErgastSource;
pub use fallback::FallbackSource;
pub use formula1::Formula1Source;
pub use http::HttpFetcher;
