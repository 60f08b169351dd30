pub mod client;

pub use client::HttpBookingService;
