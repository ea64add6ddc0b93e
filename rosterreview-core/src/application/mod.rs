mod profile_controller;
mod request_token;
mod search_controller;

#[cfg(test)]
pub(crate) mod testing;

pub use profile_controller::{ProfileController, ProfileRequest, ProfileState};
pub use request_token::{RequestSequence, RequestToken};
pub use search_controller::{PlayerRow, SearchController, SearchOutcome, SearchRequest, SearchState};
