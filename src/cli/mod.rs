pub mod keygen;
pub mod list;
pub mod run;

pub use keygen::*;
pub use list::*;
pub use run::*;
