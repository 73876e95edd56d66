pub mod turnos;
