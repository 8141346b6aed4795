//! Support center menu.
//!
//! Every screen of the menu is an embed plus a row of buttons. Navigating replaces the
//! embed of the menu message in place; staff requests and verification replies are sent
//! as new messages. Button custom ids are the `MenuAction` variants, so a click can only
//! map to a screen the bot knows about.

pub mod faq;
pub mod home;
pub mod live_chat;
pub mod register;
pub mod role_request;
pub mod verification;

use serenity::all::{
    ButtonStyle, CreateButton, CreateEmbed, CreateEmbedFooter, ReactionType, RoleId, Timestamp,
};

pub const COLOR_PRIMARY: u32 = 0x5865F2;
pub const COLOR_SUCCESS: u32 = 0x57F287;
pub const COLOR_WARNING: u32 = 0xFFC107;
pub const COLOR_DANGER: u32 = 0xED4245;
pub const COLOR_INFO: u32 = 0x9B59B6;
pub const COLOR_PINK: u32 = 0xFFC0CB;

/// Discord rejects empty field names, a zero width space renders as nothing.
pub const BLANK_FIELD_NAME: &str = "\u{200b}";

/// Shown instead of a mention when the staff role is gone.
const STAFF_ROLE_FALLBACK: &str = "@Attuned Soul";

/// Button actions of the support center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Register,
    Question,
    RequestRole,
    LiveChat,
    BackToMain,
    FaqJoin,
    FaqRules,
    FaqTutorial,
    BackToFaq,
    Verify,
    ManualHelp,
}

impl MenuAction {
    pub const ALL: [MenuAction; 11] = [
        Self::Register,
        Self::Question,
        Self::RequestRole,
        Self::LiveChat,
        Self::BackToMain,
        Self::FaqJoin,
        Self::FaqRules,
        Self::FaqTutorial,
        Self::BackToFaq,
        Self::Verify,
        Self::ManualHelp,
    ];

    pub fn custom_id(self) -> &'static str {
        match self {
            Self::Register => "sense:register",
            Self::Question => "sense:question",
            Self::RequestRole => "sense:request_role",
            Self::LiveChat => "sense:live_chat",
            Self::BackToMain => "sense:back_main",
            Self::FaqJoin => "sense:faq_join",
            Self::FaqRules => "sense:faq_rules",
            Self::FaqTutorial => "sense:faq_tutorial",
            Self::BackToFaq => "sense:back_faq",
            Self::Verify => "sense:verify",
            Self::ManualHelp => "sense:manual_help",
        }
    }

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.custom_id() == custom_id)
    }
}

/// Primary button showing only an emoji.
pub fn emoji_button(action: MenuAction, emoji: &str) -> CreateButton {
    CreateButton::new(action.custom_id())
        .style(ButtonStyle::Primary)
        .emoji(ReactionType::Unicode(emoji.to_string()))
}

pub fn label_button(action: MenuAction, label: &str, style: ButtonStyle) -> CreateButton {
    CreateButton::new(action.custom_id()).style(style).label(label)
}

/// Adds the footer and current timestamp every menu screen carries.
pub fn finish_embed(embed: CreateEmbed, footer: &str) -> CreateEmbed {
    embed
        .footer(CreateEmbedFooter::new(footer))
        .timestamp(Timestamp::now())
}

/// Wraps text in a plain code block, the card style of the menu.
pub fn text_card(lines: &[&str]) -> String {
    format!("```text\n{}\n```", lines.join("\n"))
}

/// Mention of the staff role, or plain text if the role no longer exists.
pub fn staff_mention(role_id: RoleId, role_exists: bool) -> String {
    if role_exists {
        format!("<@&{}>", role_id)
    } else {
        STAFF_ROLE_FALLBACK.to_string()
    }
}
