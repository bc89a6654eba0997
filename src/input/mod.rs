mod pairs;

pub use pairs::PairParser;
