use serenity::all::{ButtonStyle, CreateActionRow, CreateEmbed};

use crate::bot::menu::{
    finish_embed, label_button, text_card, MenuAction, BLANK_FIELD_NAME, COLOR_INFO,
    COLOR_WARNING,
};

/// Explains automatic verification and its requirements.
pub fn role_request_embed(required_role_name: &str) -> CreateEmbed {
    let role_requirement = format!("• Must have role: {}", required_role_name);

    let embed = CreateEmbed::new()
        .title("✨ Request Attuned Soul Role")
        .description("**Choose your verification method:**\n")
        .color(COLOR_WARNING)
        .field(
            BLANK_FIELD_NAME,
            text_card(&[
                "🎮 Automatic Verification",
                "Click 'Request Attuned Soul' to verify automatically.",
                "Bot will check your SENSE Roblox group membership.",
            ]),
            false,
        )
        .field(
            BLANK_FIELD_NAME,
            text_card(&[
                "✅ Requirements:",
                "• Must be in SENSE Roblox group",
                role_requirement.as_str(),
                "• Discord name must show Roblox username (via Bloxlink)",
            ]),
            false,
        )
        .field(
            BLANK_FIELD_NAME,
            text_card(&[
                "❓ Need Help?",
                "Click 'Help!' if you need manual assistance from staff.",
            ]),
            false,
        );

    finish_embed(embed, "Choose your verification method below")
}

pub fn role_request_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        label_button(MenuAction::Verify, "👑 Request Attuned Soul", ButtonStyle::Success),
        label_button(MenuAction::ManualHelp, "❓ Help!", ButtonStyle::Secondary),
        label_button(MenuAction::BackToMain, "⬅️ Back", ButtonStyle::Secondary),
    ])]
}

/// Public request for a staff member to verify by hand.
pub fn manual_request_embed(staff_mention: &str, requester_name: &str) -> CreateEmbed {
    let requested_by = format!("• Requested by: {}", requester_name);

    let embed = CreateEmbed::new()
        .title("❓ Manual Role Request")
        .description("**Staff assistance requested!**\n")
        .color(COLOR_INFO)
        .field(
            BLANK_FIELD_NAME,
            text_card(&[
                "📋 Request Details:",
                requested_by.as_str(),
                "• Type: Manual Role Verification",
                "• Status: 🟡 Pending Staff Review",
            ]),
            false,
        )
        .field(
            BLANK_FIELD_NAME,
            format!(
                "👥 **Staff Notification:**\n{} will assist you shortly.",
                staff_mention
            ),
            false,
        );

    finish_embed(embed, "Thank you for your patience!")
}
