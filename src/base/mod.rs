pub mod app;
pub mod barchart;
pub mod charset;
pub mod config;
pub mod date;
pub mod datepart;
pub mod daylist;
pub mod entry;
pub mod gauge;
pub mod history;
pub mod interval;
pub mod milliliters;
pub mod stats;
pub mod store;
pub mod util;

pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use datepart::Datepart;
pub use entry::Entry;
pub use history::History;
pub use interval::Interval;
pub use milliliters::Milliliters;
pub use store::Store;
