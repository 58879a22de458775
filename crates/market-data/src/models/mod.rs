mod quote;

pub use quote::ClosingPrices;
