pub mod bank;

mod router;
pub use router::get_router;
