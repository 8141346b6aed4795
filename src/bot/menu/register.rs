use serenity::all::{ButtonStyle, CreateActionRow, CreateEmbed};

use crate::bot::menu::{
    finish_embed, label_button, text_card, MenuAction, BLANK_FIELD_NAME, COLOR_PINK,
};

const TIKTOK_URL: &str = "https://www.tiktok.com/@makeseense?_t=ZS-8vqQi2vaX9c&_r=1";

/// Roblox community page of a group.
pub fn community_url(group_id: u64) -> String {
    format!(
        "https://www.roblox.com/communities/{}/SENSE-of-our-heart#!/about",
        group_id
    )
}

pub fn registration_guide_embed(group_id: u64) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("📝 Member Registration Guide")
        .description("**𝜗𝜚⋆₊˚ HOW TO JOIN SENSE CLAN ⋆₊˚𝜗𝜚**\n")
        .color(COLOR_PINK)
        .field(
            BLANK_FIELD_NAME,
            text_card(&[
                "📌 Step 1: Join Our Roblox Community",
                "• Change your display name to: username+sense",
                "• Example: dipsysense",
            ]),
            false,
        )
        .field(
            BLANK_FIELD_NAME,
            format!("🔗 [Click to Join Community]({})", community_url(group_id)),
            false,
        )
        .field(
            BLANK_FIELD_NAME,
            text_card(&[
                "📸 Step 2: Submit Proof",
                "• Screenshot of Roblox profile with new display name",
                "• Screenshot of community join request",
                "• Send both screenshots in this ticket",
            ]),
            false,
        )
        .field(
            BLANK_FIELD_NAME,
            text_card(&[
                "✨ Step 3: Follow Our TikTok",
                "• Follow SENSE on TikTok",
                "• Send screenshot proof of following",
            ]),
            false,
        )
        .field(
            BLANK_FIELD_NAME,
            format!("🔗 [Follow on TikTok]({})", TIKTOK_URL),
            false,
        );

    finish_embed(embed, "Registration: Weekends only (Sat-Sun)")
}

/// Single Back button returning to the main menu.
pub fn back_to_main_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![label_button(
        MenuAction::BackToMain,
        "⬅️ Back",
        ButtonStyle::Secondary,
    )])]
}
