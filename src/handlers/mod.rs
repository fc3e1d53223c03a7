pub mod health;
pub mod whoami;

pub use health::healthz;
pub use whoami::whoami;
