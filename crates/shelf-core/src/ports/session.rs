//! Identity/session port.

use crate::domain::User;

/// Supplies the signed-in user.
///
/// Passed explicitly to whoever builds detail routes instead of being read
/// from global state.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
}
