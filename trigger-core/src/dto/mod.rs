//! Data Transfer Objects returned by the HTTP host

pub mod trigger;
