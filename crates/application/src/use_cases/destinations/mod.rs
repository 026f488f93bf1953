mod fetch_destinations;

pub use fetch_destinations::FetchDestinationsUseCase;
