pub mod handlers;
pub mod router;
pub mod services;
pub mod views;

/// Booking window offered by the wizard, in days from today.
pub const CALENDARIO_DIAS: u32 = 14;

/// Slot length requested from the availability endpoint.
pub const TURNO_DURACION_MINUTOS: i32 = 30;
