pub mod trip_repo;
pub mod user_repo;

pub use trip_repo::TripRepo;
pub use user_repo::UserRepo;
