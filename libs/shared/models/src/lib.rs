pub mod calendario;
pub mod error;
pub mod especialidad;
pub mod medico;
pub mod paciente;
pub mod turno;

pub use calendario::{Calendario, DiaCalendario};
pub use error::AppError;
pub use especialidad::{Especialidad, EspecialidadPayload};
pub use medico::Medico;
pub use paciente::Paciente;
pub use turno::{NuevoTurno, Turno};
