mod prelude;
mod outcome;
mod guesser;
mod dictionary;
mod oracle;
mod render;
mod session;

pub use prelude::*;
pub use outcome::*;
pub use guesser::*;
pub use dictionary::*;
pub use oracle::*;
pub use render::*;
pub use session::*;
