//! Organiser dashboard: participation listing, verification and export.

use std::path::Path;

use super::common::CommandContext;
use crate::{
    backend::types::ParticipationSummary, export::export_participations, ParticipationId, Result,
};

fn participation_line(p: &ParticipationSummary) -> String {
    let team = p.team.as_ref().map(|t| t.name.as_str()).unwrap_or("-");
    let admin = p
        .team_admin
        .as_ref()
        .map(|a| a.email.as_str())
        .unwrap_or("-");
    format!(
        "{} {:<24} {:<11} {:>2} players  {:<28} {}",
        if p.is_verified { "✓" } else { " " },
        team,
        p.sport_type.as_deref().unwrap_or("-"),
        p.players_count,
        admin,
        p.id
    )
}

pub async fn handle_participations(ctx: &CommandContext, unverified: bool) -> Result<()> {
    let (client, _) = ctx.authenticated_graphql()?;
    let rows = client.participations(unverified).await?;
    if rows.is_empty() {
        println!("No participations");
    }
    for row in &rows {
        println!("{}", participation_line(row));
    }
    Ok(())
}

pub async fn handle_verify(ctx: &CommandContext, participation: &ParticipationId) -> Result<()> {
    let (client, _) = ctx.authenticated_graphql()?;
    let id = client.set_participation_verified(participation, true).await?;
    println!("✓ Participation {} verified", id);
    Ok(())
}

pub async fn handle_export(ctx: &CommandContext, out: &Path, unverified: bool) -> Result<()> {
    let (client, _) = ctx.authenticated_graphql()?;
    let rows = client.participations(unverified).await?;
    let count = export_participations(out, &rows)?;
    println!("✓ Exported {} participations to {}", count, out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::{TeamAdminSummary, TeamRecord};
    use crate::config::AppConfig;
    use crate::storage::RegistrationDatabase;
    use crate::{error::ZedError, TeamId};
    use serde_json::json;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn context(server: &MockServer) -> CommandContext {
        let mut config = AppConfig::default();
        config.backend.graphql_url = format!("{}/api/graphql", server.uri());
        let mut db = RegistrationDatabase::new_in_memory().unwrap();
        db.save_session("admin@zed.example", "tok-admin", "user-1").unwrap();
        CommandContext::with_parts(config, db)
    }

    #[test]
    fn test_participation_line() {
        let line = participation_line(&ParticipationSummary {
            id: ParticipationId::new("participation-1"),
            name: String::new(),
            sport_type: Some("Football".to_string()),
            is_verified: true,
            team: Some(TeamRecord {
                id: TeamId::new("team-1"),
                name: "Golden Eagles".to_string(),
            }),
            team_admin: Some(TeamAdminSummary {
                first_name: "Omar".to_string(),
                last_name: "Hassan".to_string(),
                email: "omar@example.com".to_string(),
            }),
            players_count: 6,
        });
        assert!(line.starts_with("✓ Golden Eagles"));
        assert!(line.contains(" 6 players"));
        assert!(line.ends_with("participation-1"));
    }

    #[tokio::test]
    async fn test_admin_commands_need_login() {
        let server = MockServer::start().await;
        let mut ctx = context(&server);
        ctx.db.clear_session().unwrap();

        let err = handle_participations(&ctx, false).await.unwrap_err();
        assert!(matches!(err, ZedError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_export_writes_csv() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("cookie", "keystonejs-session=tok-admin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "participations": [{
                    "id": "participation-1",
                    "name": "2026 - Golden Eagles - ZED Tournaments - Football Open Cup",
                    "sportType": "Football",
                    "isVerified": false,
                    "team": { "id": "team-1", "name": "Golden Eagles" },
                    "teamAdmin": { "firstName": "Omar", "lastName": "Hassan", "email": "omar@example.com" },
                    "playersCount": 6
                }]}
            })))
            .expect(1)
            .mount(&server)
            .await;
        let ctx = context(&server);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("export.csv");

        handle_export(&ctx, &out, true).await.unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(
            text.starts_with("participation,team,sport,team_admin,admin_email,players,verified")
        );
        assert!(text.contains("Golden Eagles,Football,Omar Hassan,omar@example.com,6,false"));
    }
}
