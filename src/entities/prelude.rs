pub use super::bookings::Entity as Bookings;
pub use super::properties::Entity as Properties;
pub use super::users::Entity as Users;
