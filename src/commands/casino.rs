//! Casino night: verify registrations and issue entrance tickets.

use super::common::CommandContext;
use crate::{
    backend::supabase::SupabaseClient,
    casino::{issue_ticket, CasinoRegistration, CasinoTicket},
    error::ZedError,
    Result,
};

fn client(ctx: &CommandContext) -> Result<SupabaseClient> {
    let (url, key) = ctx.config.supabase()?;
    SupabaseClient::new(url, key)
}

async fn find(client: &SupabaseClient, email: &str) -> Result<CasinoRegistration> {
    client
        .find_registration_by_email(email.trim())
        .await?
        .ok_or_else(|| ZedError::NotFound {
            what: format!("Casino registration for {}", email.trim()),
        })
}

/// Mark the registration verified. Already verified rows are left alone.
pub async fn verify_registration(
    client: &SupabaseClient,
    email: &str,
) -> Result<CasinoRegistration> {
    let registration = find(client, email).await?;
    if registration.is_verified {
        return Ok(registration);
    }
    client.mark_verified(registration.id).await
}

pub async fn ticket_for(client: &SupabaseClient, email: &str) -> Result<CasinoTicket> {
    let registration = find(client, email).await?;
    issue_ticket(&registration)
}

pub async fn handle_verify(ctx: &CommandContext, email: &str) -> Result<()> {
    let registration = verify_registration(&client(ctx)?, email).await?;
    println!(
        "✓ {} <{}> is verified",
        registration.full_name, registration.email
    );
    Ok(())
}

pub async fn handle_ticket(ctx: &CommandContext, email: &str) -> Result<()> {
    let ticket = ticket_for(&client(ctx)?, email).await?;
    println!("Ticket for {}: {}", ticket.holder, ticket.code);
    println!("QR: {}", ticket.qr_payload);
    Ok(())
}
