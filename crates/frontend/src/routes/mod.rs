pub mod router;
pub mod table;
