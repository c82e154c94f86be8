
use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};
use payroll_login::config::{BASE_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL};
use payroll_login::net::{AuthEndpoint, AuthError, HttpAuthClient};
use payroll_login::notify::WriterNotifier;
use payroll_login::{LoginOutcome, SessionController, view};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "payroll-login", about = "Log in to the payroll demo API")]
struct Cli {
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "PAYROLL_EMAIL", help = "Prompted for when absent")]
    email: Option<String>,

    #[arg(long, env = "PAYROLL_PASSWORD", hide_env_values = true, help = "Prompted for when absent")]
    password: Option<String>,

    #[arg(long, default_value_t = false, help = "Print the /auth/me profile after logging in")]
    whoami: bool,
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("whoami", &self.whoami)
            .finish()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = ClientConfig::from_base_url(Some(&cli.base_url))?;
    tracing::debug!(base_url = %config.base_url, "payroll-login starting");

    let client = HttpAuthClient::new(config)?;
    let ctrl = SessionController::with_notifier(client, Arc::new(WriterNotifier::new(io::stdout())));
    print_view(&ctrl)?;

    let theme = ColorfulTheme::default();
    let email = match cli.email {
        Some(email) => email,
        None => prompt_email(&theme)?,
    };
    ctrl.set_email(email);
    let password = match cli.password {
        Some(password) => password,
        None => prompt_password(&theme)?,
    };
    ctrl.set_password(password);
    print_view(&ctrl)?;

    let outcome = ctrl.attempt_login().await;
    print_view(&ctrl)?;
    if outcome == LoginOutcome::Failed {
        return Ok(ExitCode::FAILURE);
    }

    if cli.whoami {
        let session = ctrl.session();
        if let Some(token) = session.token() {
            let profile = ctrl.endpoint().fetch_profile(token).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_view<E: AuthEndpoint>(ctrl: &SessionController<E>) -> Result<(), CliError> {
    let state = ctrl.state();
    let mut out = io::stdout().lock();
    writeln!(out, "\n{}", view::render(&state))?;
    out.flush()?;
    Ok(())
}

/// Empty input is accepted and submitted as-is.
fn prompt_email(theme: &ColorfulTheme) -> Result<String, CliError> {
    let email = Input::<String>::with_theme(theme)
        .with_prompt("email")
        .allow_empty(true)
        .interact_text()?;
    Ok(email)
}

/// Reads without echoing, like a `type="password"` input.
fn prompt_password(theme: &ColorfulTheme) -> Result<String, CliError> {
    let password = Password::with_theme(theme)
        .with_prompt("password")
        .allow_empty_password(true)
        .interact()?;
    Ok(password)
}
