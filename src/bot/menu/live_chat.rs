use serenity::all::{CreateEmbed, UserId};

use crate::bot::menu::{finish_embed, COLOR_DANGER};

/// Public notice that staff was pinged for a live chat.
pub fn live_chat_embed(staff_mention: &str, requester: UserId) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("💬 Live Chat Support Requested")
        .description("**Support staff has been notified!**\n")
        .color(COLOR_DANGER)
        .field("Staff Notification:", staff_mention, false)
        .field(
            "Request Information:",
            format!(
                "**Request from:** <@{}>\n\
                 **Status:** 🟢 Staff Notified\n\
                 **Average Response:** 5-10 minutes",
                requester
            ),
            false,
        );

    finish_embed(embed, "Thank you for waiting • SENSE Support")
}
