//! Database repository layer.
//!
//! Repositories borrow the pooled `DatabaseConnection`; every call checks a connection out
//! of the pool for the duration of the query and returns it afterwards, including on error.

pub mod guild_preference;

#[cfg(test)]
mod test;
