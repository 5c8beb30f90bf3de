pub mod calibration;
pub mod device;
pub mod geometry;
pub mod session;
