pub mod catalog;
pub mod itinerary;
pub mod profile;
pub mod trip;
pub mod validation;

pub use catalog::*;
pub use itinerary::*;
pub use profile::*;
pub use trip::*;
pub use validation::*;
