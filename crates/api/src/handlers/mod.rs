pub mod customer;
pub mod rental;
pub mod video;
