//! Command handlers. Each returns the text to print on success.

use clap::Subcommand;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::main_lib::AppState;
use fundledger_core::funds::FundsCatalogTrait;
use fundledger_core::ledger::{ContributionRequest, InvestmentLedgerState, InvestmentServiceTrait};
use fundledger_core::region::{RegionConfig, RegionServiceTrait};
use fundledger_core::session::{
    validate_login_input, Session, SessionServiceTrait, SessionState, UserRole,
};
use fundledger_core::Result;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in as an employee or retail customer
    Login {
        #[arg(long, value_parser = clap::value_parser!(UserRole))]
        role: UserRole,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show who is signed in
    Whoami,
    /// List the funds available for investment
    Funds,
    /// Show the regional investment cap
    Region,
    /// Show the signed-in customer's ledger
    Portfolio,
    /// Invest an amount into a fund
    Invest {
        #[arg(long)]
        fund: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },
    /// Reset the signed-in customer's ledger
    Clear,
}

pub async fn run(state: &AppState, command: Command, json: bool) -> Result<String> {
    match command {
        Command::Login {
            role,
            email,
            password,
        } => login(state, role, &email, &password, json).await,
        Command::Logout => {
            state.session_service.logout().await;
            Ok("Signed out.".to_string())
        }
        Command::Whoami => whoami(state, json).await,
        Command::Funds => funds(state, json),
        Command::Region => region(state, json),
        Command::Portfolio => {
            let session = state.session_service.require_role(UserRole::Retail).await?;
            let summary = state.investment_service.portfolio(&session.email)?;
            if json {
                return to_json(&summary);
            }
            Ok(render_ledger(
                &summary.ledger,
                &summary.region,
                summary.remaining_capacity,
            ))
        }
        Command::Invest { fund, amount } => {
            let session = state.session_service.require_role(UserRole::Retail).await?;
            let receipt = state
                .investment_service
                .invest(&session.email, ContributionRequest::new(fund, amount))
                .await?;
            if json {
                return to_json(&receipt);
            }
            let region = state.region_service.config_or_fallback();
            Ok(format!(
                "Investment recorded.\n{}",
                render_ledger(&receipt.ledger, &region, receipt.remaining_capacity)
            ))
        }
        Command::Clear => {
            let session = state.session_service.require_role(UserRole::Retail).await?;
            state.investment_service.clear(&session.email).await?;
            Ok("Portfolio cleared.".to_string())
        }
    }
}

async fn login(
    state: &AppState,
    role: UserRole,
    email: &str,
    password: &str,
    json: bool,
) -> Result<String> {
    let email = email.trim();
    validate_login_input(email, password)?;
    let session = state.session_service.login(email, password, role).await?;
    if json {
        return to_json(&session);
    }
    Ok(format!("Signed in. {}", describe_session(state, &session)))
}

async fn whoami(state: &AppState, json: bool) -> Result<String> {
    let session_state = state.session_service.state().await;
    if json {
        return to_json(&session_state.session());
    }
    Ok(match session_state {
        SessionState::Anonymous => "Not signed in.".to_string(),
        SessionState::Authenticated(session) => describe_session(state, &session),
    })
}

fn funds(state: &AppState, json: bool) -> Result<String> {
    let funds = state.funds_catalog.list_funds()?;
    if json {
        return to_json(&funds);
    }
    if funds.is_empty() {
        return Ok("No funds available.".to_string());
    }
    Ok(funds
        .iter()
        .map(|f| format!("{}  {}", f.fund_id, f.fund_name))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn region(state: &AppState, json: bool) -> Result<String> {
    let (config, fallback) = match state.region_service.get_config() {
        Ok(config) => (config, false),
        Err(e) => {
            tracing::warn!("Region source unavailable, using default limits: {}", e);
            (RegionConfig::fallback(), true)
        }
    };
    if json {
        return to_json(&config);
    }
    let mut out = format!(
        "{} ({}): up to {} per customer",
        config.country_label,
        config.currency_code,
        config.format_amount(config.max_investment_amount)
    );
    if fallback {
        out.push_str("\nRegion source unavailable, showing default limits.");
    }
    Ok(out)
}

fn describe_session(state: &AppState, session: &Session) -> String {
    let name = state
        .session_service
        .profile_for(session.role)
        .map(|p| p.display_name())
        .unwrap_or_else(|| session.email.clone());
    format!(
        "{} as {} ({}), expires {}",
        name,
        session.role.label(),
        session.email,
        session.expires_at().format("%Y-%m-%d %H:%M UTC")
    )
}

fn render_ledger(
    ledger: &InvestmentLedgerState,
    region: &RegionConfig,
    remaining: Decimal,
) -> String {
    let mut lines = Vec::with_capacity(ledger.funds.len() + 2);
    if ledger.funds.is_empty() {
        lines.push("No investments yet.".to_string());
    }
    for fund in &ledger.funds {
        lines.push(format!(
            "{}  {}",
            fund.fund_name,
            region.format_amount(fund.invested_amount)
        ));
    }
    lines.push(format!(
        "Total invested: {}",
        region.format_amount(ledger.total_investment)
    ));
    lines.push(format!("Remaining allowance: {}", region.format_amount(remaining)));
    lines.join("\n")
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
