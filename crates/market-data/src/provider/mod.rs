mod traits;

pub use traits::MarketDataProvider;
