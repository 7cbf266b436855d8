mod hilo;
#[cfg(feature = "serde_support")]
mod serde;

pub use hilo::HiLo;
