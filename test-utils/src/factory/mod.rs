//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let preference = factory::guild_preference::GuildPreferenceFactory::new(&db)
//!     .guild_id("987654321")
//!     .language("french")
//!     .build()
//!     .await?;
//! ```

pub mod guild_preference;
pub mod helpers;

pub use guild_preference::create_guild_preference;
