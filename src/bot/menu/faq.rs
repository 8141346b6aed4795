use serenity::all::{ButtonStyle, CreateActionRow, CreateEmbed, UserId};

use crate::bot::menu::{
    emoji_button, finish_embed, label_button, text_card, MenuAction, BLANK_FIELD_NAME,
    COLOR_INFO, COLOR_PRIMARY, COLOR_SUCCESS,
};

pub fn faq_embed() -> CreateEmbed {
    let questions = [
        text_card(&[
            "1️⃣ How do I join SENSE?",
            "Registration schedule and how to become a member",
        ]),
        text_card(&[
            "2️⃣ Server Rules",
            "Community guidelines and policies you must follow",
        ]),
        text_card(&[
            "3️⃣ Game Tutorial",
            "Get help from staff for game tutorials and guidance",
        ]),
    ]
    .join("\n");

    let embed = CreateEmbed::new()
        .title("❓ Frequently Asked Questions")
        .description("Select a question below to get help! 💡\n")
        .color(COLOR_PRIMARY)
        .field(BLANK_FIELD_NAME, questions, false);

    finish_embed(embed, "SENSE Community • Support Available 24/7")
}

pub fn faq_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        emoji_button(MenuAction::FaqJoin, "1️⃣"),
        emoji_button(MenuAction::FaqRules, "2️⃣"),
        emoji_button(MenuAction::FaqTutorial, "3️⃣"),
        label_button(MenuAction::BackToMain, "⬅️ Back", ButtonStyle::Secondary),
    ])]
}

pub fn back_to_faq_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![label_button(
        MenuAction::BackToFaq,
        "⬅️ Back to FAQ",
        ButtonStyle::Secondary,
    )])]
}

pub fn registration_schedule_embed() -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("📅 Registration Schedule")
        .description("**When can I join SENSE?**\n")
        .color(COLOR_SUCCESS)
        .field(
            "Registration Schedule:",
            "• **Open:** Saturdays & Sundays only\n\
             • **Closed:** Monday through Friday",
            false,
        )
        .field(
            "💡 Pro Tips:",
            "• Follow our social media for notifications\n\
             • Watch announcements in this server\n\
             • Registration fills up quickly on weekends!",
            false,
        );

    finish_embed(embed, "Registration • Weekend Only")
}

pub fn server_rules_embed() -> CreateEmbed {
    let rules: [&[&str]; 5] = [
        &[
            "📜 Terms and Conditions",
            "Follow Discord TOS. Must be 15+ years old.",
            "Limited cursing allowed - please be mindful of others.",
        ],
        &[
            "🔞 No NSFW Content",
            "Refrain from posting or discussing explicit content of any kind.",
        ],
        &[
            "🚫 No Controversial Topics",
            "Political or religious discussions are not allowed in this community.",
        ],
        &[
            "⚠️ No Drama",
            "Do not involve SENSE in your personal conflicts.",
            "Drama will result in immediate removal.",
        ],
        &[
            "🤝 Respect Each Other",
            "Show respect to all members, staff, and content creators.",
            "No harassment, doxxing, racism, sexism, or bullying.",
        ],
    ];

    let embed = rules.iter().fold(
        CreateEmbed::new()
            .title("‿̩͙⊱༻ ♱ GUIDELINES & POLICIES ♱ ༺⊰‿̩͙")
            .description("Please follow these rules to maintain a positive community:\n")
            .color(COLOR_INFO),
        |embed, rule| embed.field(BLANK_FIELD_NAME, text_card(rule), false),
    );

    finish_embed(embed, "Breaking rules may result in warnings, kicks, or bans")
}

/// Public staff ping for game tutorial help.
pub fn tutorial_request_embed(staff_mention: &str, requester: UserId) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🎮 Game Tutorial Request")
        .description("**Tutorial assistance requested!**\n")
        .color(COLOR_PRIMARY)
        .field("Staff Notification:", staff_mention, false)
        .field(
            "Request Details:",
            format!(
                "**Request from:** <@{}>\n\
                 **Type:** Game Tutorial Help\n\
                 **Status:** 🟢 Staff Notified",
                requester
            ),
            false,
        );

    finish_embed(embed, "Staff will help you master the game!")
}
