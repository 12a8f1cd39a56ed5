//! Session and conversation thread management.
//!
//! In-memory session storage for managing conversation state across
//! requests. Sessions are identified by UUID and hold the full message
//! history the chat pipeline is replayed with.
//!
//! # Example
//!
//! ```rust
//! use prompt_composer::session::SessionStore;
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! session.add_user_message("hello Value 2 iam rohan Option 1 and Choice C");
//!
//! assert_eq!(session.message_count(), 1);
//! ```

mod thread;

pub use thread::{Session, SessionStore};
