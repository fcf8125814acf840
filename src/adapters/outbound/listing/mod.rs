/// Allow-list and deny-list adapters
mod static_listing;

pub use static_listing::StaticArtifactListing;
