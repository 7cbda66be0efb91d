//! A weather and local time agent.
//!
//! Two lookups, [`lookup_weather`] and [`lookup_time`], are wrapped as tools
//! ([`get_weather_tool`], [`get_current_time_tool`]) and registered on an
//! [`Agent`] that a model-driven host can dispatch tool calls to.
//!
//! ```
//! use weather_time_agent::{lookup_weather, LookupResult};
//!
//! assert!(lookup_weather("New York").is_success());
//! assert_eq!(
//!     lookup_weather("Beijing"),
//!     LookupResult::error("Weather information for 'Beijing' is not available."),
//! );
//! ```
//!
//! [`lookup_time`] needs the IANA timezone database. It is compiled into
//! the crate, so the only way to get an [`EnvironmentError`] is a city
//! table entry naming a zone the database does not know.

pub mod agent;
pub mod lookup;
pub mod notifications;
pub mod observability;
pub mod tools;
mod message;

pub use agent::*;
pub use lookup::{
    lookup_time, lookup_time_with_clock, lookup_weather, CityKey, Clock, EnvironmentError, FixedClock,
    LookupResult, SystemClock,
};
pub use message::{Message, Role};
pub use notifications::{Notification, NotificationContent, NotificationHandler};
pub use observability::init_default_tracing;
pub use tools::*;
