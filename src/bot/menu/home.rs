use serenity::all::{CreateActionRow, CreateEmbed};

use crate::bot::menu::{
    emoji_button, finish_embed, text_card, MenuAction, BLANK_FIELD_NAME, COLOR_DANGER,
    COLOR_PRIMARY,
};

/// Landing screen of the support center.
pub fn main_menu_embed() -> CreateEmbed {
    let options = [
        text_card(&[
            "📝 Register Member",
            "Join the SENSE community and get registration steps.",
        ]),
        text_card(&[
            "❓ Question",
            "Browse FAQs and get instant answers to common questions.",
        ]),
        text_card(&[
            "✨ Request Role",
            "Verify your membership and get the Attuned Soul role.",
        ]),
        text_card(&[
            "💬 Live Chat",
            "Connect with a staff member for personalized help.",
        ]),
    ]
    .join("\n");

    let embed = CreateEmbed::new()
        .title("✦ SENSE Support Center ✦")
        .description(
            "**Welcome to SENSE Support!** 💫\n\n\
             Thank you for reaching out. Please select one of the options below:",
        )
        .color(COLOR_PRIMARY)
        .field(BLANK_FIELD_NAME, options, false)
        .field(
            BLANK_FIELD_NAME,
            "**Click the button below that matches your need:** ⬇️",
            false,
        );

    finish_embed(embed, "SENSE Community • Support Team Available 24/7")
}

pub fn main_menu_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        emoji_button(MenuAction::Register, "📝"),
        emoji_button(MenuAction::Question, "❓"),
        emoji_button(MenuAction::RequestRole, "✨"),
        emoji_button(MenuAction::LiveChat, "💬"),
    ])]
}

/// Reply to `/sense` outside of a ticket channel.
pub fn invalid_channel_embed() -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ Invalid Channel")
        .description("This command can only be used in ticket channels!")
        .color(COLOR_DANGER)
}
