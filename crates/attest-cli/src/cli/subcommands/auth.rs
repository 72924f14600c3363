use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email/username and password.
    Login(AuthLoginArgs),
    /// Sign out and clear local credentials.
    Logout,
    /// Check the stored session against the backend.
    Status,
    /// Show the locally stored user without contacting the backend.
    Whoami,
    /// Update first name, last name, or email.
    Profile(AuthProfileArgs),
    /// Change your password.
    Password(AuthPasswordArgs),
    /// Print (and open) the Google sign-in URL.
    GoogleUrl {
        /// Do not open a browser.
        #[arg(long)]
        no_browser: bool,
    },
    /// Finish Google sign-in with the code from the redirect.
    GoogleCallback {
        /// Authorization code.
        code: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Email or username.
    #[arg(long)]
    pub email: String,
    /// Password (read from ATTEST_PASSWORD when omitted).
    #[arg(long, env = "ATTEST_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthProfileArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthPasswordArgs {
    #[arg(long, env = "ATTEST_CURRENT_PASSWORD", hide_env_values = true)]
    pub current: String,
    #[arg(long, env = "ATTEST_NEW_PASSWORD", hide_env_values = true)]
    pub new: String,
    /// Repeat the new password.
    #[arg(long, env = "ATTEST_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm: String,
}
