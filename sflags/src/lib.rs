//! Derive command-line flag descriptors from configuration structs.
//!
//! A struct deriving [`Describe`] is walked field by field. Each supported
//! terminal field becomes a [`Flag`] whose value handle borrows the field,
//! so a command-line parser that sets the flag writes straight into the
//! configuration. Names, short aliases, environment fallbacks, markers and
//! usage text come from `#[sflags(...)]` field tags and the [`Options`]
//! passed to [`parse_struct`].
//!
//! ```rust
//! use sflags::{Counter, Describe, Options};
//!
//! #[derive(Describe, Default)]
//! struct Database {
//!     #[sflags(desc = "connection string")]
//!     pub url: String,
//!     pub pool_size: u32,
//! }
//!
//! #[derive(Describe, Default)]
//! struct Config {
//!     #[sflags(flag = "verbose v")]
//!     pub verbose: Counter,
//!     pub db: Database,
//! }
//!
//! let mut config = Config::default();
//! let flags = sflags::parse_struct(&mut config, &Options::default().env_prefix("APP_"))?;
//! let names: Vec<_> = flags.iter().map(|flag| flag.name.as_str()).collect();
//! assert_eq!(names, ["verbose", "db-url", "db-pool-size"]);
//! assert_eq!(flags[2].env_names, ["APP_DB_POOL_SIZE"]);
//! # Ok::<(), sflags::ParseError>(())
//! ```
//!
//! Fields whose type has no registry support (closures, function pointers,
//! maps keyed by anything other than text or integers) are omitted without
//! an error.

pub use sflags_macros::Describe;

#[cfg(feature = "clap")]
pub mod cli;
mod describe;
pub mod error;
mod flag;
pub mod naming;
mod options;
mod tag;
pub mod value;
mod walk;

#[doc(hidden)]
pub use describe::__private;
pub use describe::{Describe, Field, FieldMeta, Flaggable, Slot};
#[cfg(feature = "clap")]
pub use error::CliError;
pub use error::{BoxError, ParseError, SetError};
pub use flag::{Flag, FlagSpec, specs};
pub use options::{Options, Validator};
pub use value::{Counter, Kind, Value};
pub use walk::{parse, parse_struct};
