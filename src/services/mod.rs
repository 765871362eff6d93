pub mod property_service;
pub use property_service::{PropertyError, PropertyService};

pub mod property_service_impl;
pub use property_service_impl::SeaOrmPropertyService;

pub mod booking_service;
pub use booking_service::{BookingError, BookingService};

pub mod booking_service_impl;
pub use booking_service_impl::SeaOrmBookingService;

pub mod user_service;
pub use user_service::{UserError, UserService};

pub mod user_service_impl;
pub use user_service_impl::SeaOrmUserService;

pub mod failover;
pub use failover::{FailoverBookingService, FailoverPropertyService, FailoverUserService};
