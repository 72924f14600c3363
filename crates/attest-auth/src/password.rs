//! Client-side checks for the change-password form.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("new password and confirmation do not match")]
    Mismatch,

    #[error("new password must be at least {MIN_PASSWORD_LEN} characters")]
    TooShort,
}

#[derive(Debug, Clone, Default)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirmation: String,
}

impl PasswordChange {
    /// # Errors
    ///
    /// Returns the first failed check: a missing field, a confirmation
    /// mismatch, then the minimum length.
    pub fn validate(&self) -> Result<(), PasswordError> {
        if self.current.is_empty() {
            return Err(PasswordError::Missing("current password"));
        }
        if self.new.is_empty() {
            return Err(PasswordError::Missing("new password"));
        }
        if self.confirmation.is_empty() {
            return Err(PasswordError::Missing("password confirmation"));
        }
        if self.new != self.confirmation {
            return Err(PasswordError::Mismatch);
        }
        if self.new.chars().count() < MIN_PASSWORD_LEN {
            return Err(PasswordError::TooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn change(current: &str, new: &str, confirmation: &str) -> PasswordChange {
        PasswordChange {
            current: current.into(),
            new: new.into(),
            confirmation: confirmation.into(),
        }
    }

    #[rstest]
    #[case(change("", "longenough", "longenough"), Err(PasswordError::Missing("current password")))]
    #[case(change("old", "", ""), Err(PasswordError::Missing("new password")))]
    #[case(change("old", "longenough", ""), Err(PasswordError::Missing("password confirmation")))]
    #[case(change("old", "longenough", "longenougH"), Err(PasswordError::Mismatch))]
    #[case(change("old", "short", "short"), Err(PasswordError::TooShort))]
    #[case(change("old", "exactly8", "exactly8"), Ok(()))]
    fn validation_order(#[case] input: PasswordChange, #[case] expected: Result<(), PasswordError>) {
        assert_eq!(input.validate(), expected);
    }
}
