//! # Social Profile Client
//!
//! Client-side session model for the social profile dapp: a wallet
//! session, the contract calls it mediates, and a session-local mirror of
//! the profiles it has created.
//!
//! The wallet itself (popups, signing, transport) lives behind the
//! [`LedgerClient`] trait. [`SessionController`] enforces the one rule
//! everything else hangs off: local state changes only after the ledger
//! has confirmed the corresponding call.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let session = SessionController::new(wallet);
//! let account = session.connect().await?;
//!
//! let draft = DraftProfile::new()
//!     .with_username("alice")
//!     .with_bio("hello");
//! session.create_profile(&draft).await?;
//!
//! session.delete_profile(0).await?;
//! ```

mod cache;
mod draft;
mod error;
mod ledger;
mod session;

pub use cache::{CachedProfile, ProfileCache};
pub use draft::{DraftProfile, PersonalInfo, PictureData};
pub use error::{Result, SessionError};
pub use ledger::{AccountAddress, LedgerClient, PendingTransaction, ProfileData};
pub use session::{SessionConfig, SessionController, SessionState};
