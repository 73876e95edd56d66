pub mod especialidades;
