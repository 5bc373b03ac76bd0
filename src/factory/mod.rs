//! Sources that are computed instead of stored.

pub mod generate;
pub mod iota;
pub mod repeat;

pub use {
    generate::{from_iter, generate, FromIter, Generate},
    iota::{iota, iota_to, Countable, Iota, IotaTo},
    repeat::{empty, repeat, single, Empty, Repeat, Single},
};
