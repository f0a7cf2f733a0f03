use crate::context::CliContext;
use crate::output;
use taskboard_domain::{LoginPayload, RegisterPayload};

pub async fn login(ctx: &CliContext, email: String, password: String) -> anyhow::Result<()> {
    let user = ctx.state.auth.login(LoginPayload { email, password }).await?;
    let token = ctx
        .session_token()
        .ok_or_else(|| anyhow::anyhow!("login succeeded but no token was issued"))?;
    output::output_success(serde_json::json!({ "token": token, "user": user }));
    Ok(())
}

pub async fn register(
    ctx: &CliContext,
    name: String,
    email: String,
    password: String,
) -> anyhow::Result<()> {
    let user = ctx
        .state
        .auth
        .register(RegisterPayload {
            name,
            email,
            password,
        })
        .await?;
    let token = ctx
        .session_token()
        .ok_or_else(|| anyhow::anyhow!("registration succeeded but no token was issued"))?;
    output::output_success(serde_json::json!({ "token": token, "user": user }));
    Ok(())
}
