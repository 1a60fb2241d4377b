mod builder;
mod compiled;
mod error;
mod io;
mod spec;

pub use builder::MdpBuilder;
pub use compiled::CompiledMdp;
pub use error::MdpError;
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use spec::{ActionSpec, MdpSpec, OutcomeSpec, StateSpec};
