//! Replies to the verify button.
//!
//! Each verification outcome, and each way the follow-up role grant can end, has its own
//! reply so members always learn why they did or didn't get the role.

use serenity::all::CreateEmbed;

use crate::{
    bot::menu::{finish_embed, register::community_url, COLOR_DANGER, COLOR_SUCCESS},
    config::VerificationConfig,
    model::{
        roblox::RobloxAccount,
        verification::{RoleGrant, RoleGrantError, VerificationOutcome, VerificationReport},
    },
};

/// Builds the ephemeral reply for a verification report.
///
/// # Arguments
/// - `report` - Outcome of the verification attempt and of the role grant
/// - `config` - Requirements shown to members who failed verification
pub fn verification_reply_embed(
    report: &VerificationReport,
    config: &VerificationConfig,
) -> CreateEmbed {
    let result = &report.result;

    match (&result.outcome, &result.account) {
        (VerificationOutcome::UsernameNotExtractable, _) => username_not_found_embed(),
        (VerificationOutcome::AccountNotFound, _) | (_, None) => {
            account_not_found_embed(result.username.as_deref().unwrap_or_default())
        }
        (VerificationOutcome::Success, Some(account)) => match &report.role_grant {
            Some(Ok(grant)) => success_embed(account, *grant, config),
            Some(Err(RoleGrantError::RoleNotFound(_))) => configuration_error_embed(),
            Some(Err(err @ RoleGrantError::Discord(_))) => role_error_embed(err),
            None => role_error_embed(&RoleGrantError::Discord(
                "role grant was not attempted".to_string(),
            )),
        },
        (outcome, Some(account)) => failed_embed(account, outcome, config),
    }
}

/// Reason line of a failed verification.
pub fn failure_reason(outcome: &VerificationOutcome) -> String {
    match outcome {
        VerificationOutcome::WrongRole(role_name) => format!("Wrong role: {}", role_name),
        VerificationOutcome::NotInGroup => "Not in group".to_string(),
        VerificationOutcome::ApiError => "API Error".to_string(),
        VerificationOutcome::AccountNotFound => "Roblox account not found".to_string(),
        VerificationOutcome::UsernameNotExtractable => "No Roblox username".to_string(),
        VerificationOutcome::Success => "Verified".to_string(),
    }
}

fn username_not_found_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ Cannot Find Roblox Username")
        .description(
            "I couldn't find your Roblox username in your Discord name.\n\n\
             **Please make sure:**\n\
             • You've linked your Roblox account with Bloxlink\n\
             • Your Discord nickname shows your Roblox username\n\
             • Example: `@uppucs` or `uppucs`\n\n\
             💡 Use `/verify` command with Bloxlink to link your account.",
        )
        .color(COLOR_DANGER)
}

fn account_not_found_embed(username: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ Roblox Account Not Found")
        .description(format!(
            "Couldn't find Roblox account: `{}`\n\n\
             **Please check:**\n\
             • Your Discord name matches your Roblox username\n\
             • You've linked with Bloxlink correctly\n\
             • The username is spelled correctly",
            username
        ))
        .color(COLOR_DANGER)
}

fn success_embed(
    account: &RobloxAccount,
    grant: RoleGrant,
    config: &VerificationConfig,
) -> CreateEmbed {
    let granted = match grant {
        RoleGrant::Granted => "You've been verified and given the Attuned Soul role!",
        RoleGrant::AlreadyHeld => "You've been verified and already have the Attuned Soul role!",
    };

    let embed = CreateEmbed::new()
        .title("✅ Verification Successful!")
        .description(format!(
            "**Welcome to SENSE, {}!** 💚\n\n{}",
            account.display_name, granted
        ))
        .color(COLOR_SUCCESS)
        .field(
            "✅ Verified Information:",
            format!(
                "**Roblox Username:** {}\n\
                 **Roblox Display Name:** {}\n\
                 **Group Role:** {}\n\
                 **Discord Role:** <@&{}>",
                account.name,
                account.display_name,
                config.required_role_name,
                config.verified_role_id
            ),
            false,
        )
        .thumbnail(account.headshot_url());

    finish_embed(embed, "Verification completed successfully!")
}

fn failed_embed(
    account: &RobloxAccount,
    outcome: &VerificationOutcome,
    config: &VerificationConfig,
) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("❌ Verification Failed")
        .description(format!(
            "**Roblox Account:** {} (@{})\n\
             **Reason:** {}\n\n\
             **Requirements:**\n\
             ✅ Must join **SENSE of our heart** group\n\
             ✅ Must have role: **{}**\n\n\
             🔗 [Join Group Here]({})",
            account.display_name,
            account.name,
            failure_reason(outcome),
            config.required_role_name,
            community_url(config.group_id)
        ))
        .color(COLOR_DANGER)
        .thumbnail(account.headshot_url());

    finish_embed(embed, "Join the group with correct role and try again!")
}

fn role_error_embed(err: &RoleGrantError) -> CreateEmbed {
    CreateEmbed::new()
        .title("⚠️ Role Error")
        .description(format!(
            "Verification passed but couldn't give role: {}",
            err
        ))
        .color(COLOR_DANGER)
}

fn configuration_error_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("⚠️ Configuration Error")
        .description("Attuned Soul role not found. Please contact staff.")
        .color(COLOR_DANGER)
}
