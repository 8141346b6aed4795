//! Interaction handlers for the `/sense` command and menu buttons.
//!
//! Menu navigation edits the menu message in place. Staff requests are posted publicly
//! so staff see the ping, and verification replies are ephemeral. Any error is logged
//! here and never reaches the gateway loop.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateActionRow, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, GuildId, Interaction, User,
};

use crate::{
    bot::{
        handler::{ready::SENSE_COMMAND, Handler},
        menu::{
            faq::{
                back_to_faq_components, faq_components, faq_embed, registration_schedule_embed,
                server_rules_embed, tutorial_request_embed,
            },
            home::{invalid_channel_embed, main_menu_components, main_menu_embed},
            live_chat::live_chat_embed,
            register::{back_to_main_components, registration_guide_embed},
            role_request::{manual_request_embed, role_request_components, role_request_embed},
            staff_mention,
            verification::verification_reply_embed,
            MenuAction,
        },
    },
    data::discord::{DiscordMemberRepository, MemberRoleManager},
    error::AppError,
    service::{ticket::is_ticket_channel, verification::VerificationService},
};

/// Handles the interaction_create event for commands and buttons.
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let result = match interaction {
        Interaction::Command(command) => handle_command(handler, &ctx, &command).await,
        Interaction::Component(component) => handle_component(handler, &ctx, &component).await,
        _ => Ok(()),
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle interaction: {:?}", e);
    }
}

async fn handle_command(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    if command.data.name != SENSE_COMMAND {
        tracing::debug!("Ignoring unknown command /{}", command.data.name);
        return Ok(());
    }

    let in_ticket = match command.channel_id.to_channel(ctx).await?.guild() {
        Some(channel) => is_ticket_channel(channel.parent_id, &channel.name, &handler.config.ticket),
        None => false,
    };

    let response = if in_ticket {
        CreateInteractionResponseMessage::new()
            .embed(main_menu_embed())
            .components(main_menu_components())
    } else {
        CreateInteractionResponseMessage::new()
            .embed(invalid_channel_embed())
            .ephemeral(true)
    };

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

async fn handle_component(
    handler: &Handler,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(action) = MenuAction::from_custom_id(&component.data.custom_id) else {
        tracing::debug!("Ignoring unknown button {}", component.data.custom_id);
        return Ok(());
    };

    let config = &handler.config;

    match action {
        MenuAction::Register => {
            let embed = registration_guide_embed(config.verification.group_id);
            update_menu(ctx, component, embed, back_to_main_components()).await
        }
        MenuAction::Question | MenuAction::BackToFaq => {
            update_menu(ctx, component, faq_embed(), faq_components()).await
        }
        MenuAction::RequestRole => {
            let embed = role_request_embed(&config.verification.required_role_name);
            update_menu(ctx, component, embed, role_request_components()).await
        }
        MenuAction::BackToMain => {
            update_menu(ctx, component, main_menu_embed(), main_menu_components()).await
        }
        MenuAction::FaqJoin => {
            let embed = registration_schedule_embed();
            update_menu(ctx, component, embed, back_to_faq_components()).await
        }
        MenuAction::FaqRules => {
            update_menu(ctx, component, server_rules_embed(), back_to_faq_components()).await
        }
        MenuAction::FaqTutorial => {
            let staff = staff_role_mention(handler, ctx, component.guild_id).await;
            let embed = tutorial_request_embed(&staff, component.user.id);
            send_public(ctx, component, CreateInteractionResponseMessage::new().embed(embed)).await
        }
        MenuAction::LiveChat => {
            let staff = staff_role_mention(handler, ctx, component.guild_id).await;
            let embed = live_chat_embed(&staff, component.user.id);
            send_public(ctx, component, CreateInteractionResponseMessage::new().embed(embed)).await
        }
        MenuAction::ManualHelp => {
            let staff = staff_role_mention(handler, ctx, component.guild_id).await;
            let requester = requester_display_name(
                component.member.as_ref().map(|m| m.display_name()),
                &component.user,
            );
            let message = CreateInteractionResponseMessage::new()
                .content(staff.clone())
                .embed(manual_request_embed(&staff, &requester));
            send_public(ctx, component, message).await
        }
        MenuAction::Verify => handle_verify(handler, ctx, component).await,
    }
}

const VERIFY_OUTSIDE_GUILD_MESSAGE: &str =
    "Verification only works inside the SENSE server. Open a ticket there and try again.";

/// Runs verification for the clicking member and replies ephemerally.
async fn handle_verify(
    handler: &Handler,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    component
        .create_response(&ctx.http, verify_opening_response(component.guild_id))
        .await?;

    let Some(guild_id) = component.guild_id else {
        tracing::warn!("Verify clicked outside of a guild by {}", component.user.id);
        return Ok(());
    };

    let display_name = requester_display_name(
        component.member.as_ref().map(|m| m.display_name()),
        &component.user,
    );

    let members = DiscordMemberRepository::new(ctx.http.clone());
    let service = VerificationService::new(&handler.roblox, &members, &handler.config.verification);
    let report = service
        .verify_member(&display_name, guild_id, component.user.id)
        .await;

    let embed = verification_reply_embed(&report, &handler.config.verification);
    component
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .embed(embed)
                .ephemeral(true),
        )
        .await?;

    Ok(())
}

/// First response to a Verify click.
///
/// Inside a guild the reply is deferred until verification finishes. Anywhere else
/// there is nothing to verify against, so the member gets an ephemeral notice instead
/// of a deferred reply that never resolves.
fn verify_opening_response(guild_id: Option<GuildId>) -> CreateInteractionResponse {
    match guild_id {
        Some(_) => {
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true))
        }
        None => CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(VERIFY_OUTSIDE_GUILD_MESSAGE)
                .ephemeral(true),
        ),
    }
}

async fn update_menu(
    ctx: &Context,
    component: &ComponentInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(components);

    component
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(message))
        .await?;

    Ok(())
}

async fn send_public(
    ctx: &Context,
    component: &ComponentInteraction,
    message: CreateInteractionResponseMessage,
) -> Result<(), AppError> {
    component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Staff role mention for the guild the interaction came from.
async fn staff_role_mention(handler: &Handler, ctx: &Context, guild_id: Option<GuildId>) -> String {
    let role_id = handler.config.staff_role_id;

    let exists = match guild_id {
        Some(guild_id) => DiscordMemberRepository::new(ctx.http.clone())
            .role_exists(guild_id, role_id)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to look up staff role {}: {}", role_id, e);
                false
            }),
        None => false,
    };

    staff_mention(role_id, exists)
}

/// Name the member is shown under in the guild: nickname, then global name, then username.
fn requester_display_name(member_display_name: Option<&str>, user: &User) -> String {
    member_display_name
        .unwrap_or_else(|| user.display_name())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::verification::extract::extract_roblox_username;
    use test_utils::serenity::create_test_member;

    /// Tests that the guild nickname is what verification reads.
    ///
    /// Expected: handle taken from the nickname, not the username
    #[test]
    fn uses_guild_nickname() {
        let member = create_test_member(1, 2, "discord_user", Some("Uppu | @uppucs"), &[]);

        let name = requester_display_name(Some(member.display_name()), &member.user);

        assert_eq!(name, "Uppu | @uppucs");
        assert_eq!(extract_roblox_username(&name), Some("uppucs".to_string()));
    }

    #[test]
    fn falls_back_to_username_without_member() {
        let member = create_test_member(1, 2, "discord_user", None, &[]);

        let name = requester_display_name(None, &member.user);

        assert_eq!(name, "discord_user");
    }

    /// Tests the first response to a Verify click inside a guild.
    ///
    /// Expected: an ephemeral deferred reply
    #[test]
    fn defers_verify_inside_guild() {
        let response =
            serde_json::to_value(verify_opening_response(Some(GuildId::new(1)))).unwrap();

        assert_eq!(response["type"], 5);
        assert_eq!(response["data"]["flags"], 64);
    }

    /// Tests the first response to a Verify click outside of a guild.
    ///
    /// Expected: an ephemeral message explaining verification needs the server, no defer
    #[test]
    fn answers_verify_outside_guild() {
        let response = serde_json::to_value(verify_opening_response(None)).unwrap();

        assert_eq!(response["type"], 4);
        assert_eq!(response["data"]["flags"], 64);
        assert_eq!(response["data"]["content"], VERIFY_OUTSIDE_GUILD_MESSAGE);
    }
}
