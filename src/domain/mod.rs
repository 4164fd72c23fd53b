// Domain layer: the programmer aggregate, its hobby value type and the copy ports.

pub mod model;
pub mod ports;
pub mod shared;

pub use model::{Hobby, Programmer, ProgrammerSnapshot};
pub use ports::{duplicate, CopyMode, DeepClone, ShallowCopy};
pub use shared::Shared;
