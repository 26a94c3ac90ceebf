//! Test data helpers for creating test objects
//!
//! This module provides helper functions for creating the inbound Telegram
//! updates the handlers consume: text messages in group and private chats,
//! plus join and leave service messages.

use chrono::Utc;
use teloxide::types::{
    Chat, ChatId, ChatKind, ChatPrivate, ChatPublic, MediaKind, MediaText, Message,
    MessageCommon, MessageId, MessageKind, MessageLeftChatMember, MessageNewChatMembers,
    PublicChatKind, PublicChatSupergroup, User, UserId,
};

/// Helper function to create a test Telegram user
pub fn create_test_user(
    user_id: i64,
    username: Option<&str>,
    first_name: &str,
    last_name: Option<&str>,
) -> User {
    User {
        id: UserId(user_id as u64),
        is_bot: false,
        first_name: first_name.to_string(),
        last_name: last_name.map(|s| s.to_string()),
        username: username.map(|s| s.to_string()),
        language_code: Some("en".to_string()),
        is_premium: false,
        added_to_attachment_menu: false,
    }
}

/// Helper function to create a test private chat
pub fn create_test_private_chat(
    chat_id: i64,
    username: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Chat {
    Chat {
        id: ChatId(chat_id),
        kind: ChatKind::Private(ChatPrivate {
            username: username.map(|s| s.to_string()),
            first_name: first_name.map(|s| s.to_string()),
            last_name: last_name.map(|s| s.to_string()),
        }),
    }
}

/// Helper function to create a test group chat
pub fn create_test_group_chat(chat_id: i64, title: &str) -> Chat {
    Chat {
        id: ChatId(chat_id),
        kind: ChatKind::Public(ChatPublic {
            title: Some(title.to_string()),
            kind: PublicChatKind::Supergroup(PublicChatSupergroup {
                username: None,
                is_forum: false,
            }),
        }),
    }
}

fn build_message(from: Option<User>, chat: Chat, kind: MessageKind) -> Message {
    Message {
        id: MessageId(1),
        thread_id: None,
        from,
        sender_chat: None,
        sender_business_bot: None,
        date: Utc::now(),
        chat,
        is_topic_message: false,
        via_bot: None,
        kind,
    }
}

fn text_kind(text: &str) -> MessageKind {
    MessageKind::Common(MessageCommon {
        author_signature: None,
        forward_origin: None,
        external_reply: None,
        quote: None,
        reply_to_story: None,
        edit_date: None,
        media_kind: MediaKind::Text(MediaText {
            text: text.to_string(),
            entities: vec![],
            link_preview_options: None,
        }),
        reply_markup: None,
        effect_id: None,
        reply_to_message: None,
        sender_boost_count: None,
        is_automatic_forward: false,
        has_protected_content: false,
        is_from_offline: false,
        business_connection_id: None,
    })
}

/// Helper function to create a test Telegram message
pub fn create_test_message(
    user_id: i64,
    chat_id: i64,
    text: &str,
    username: Option<&str>,
    first_name: &str,
    last_name: Option<&str>,
) -> Message {
    let user = create_test_user(user_id, username, first_name, last_name);

    let chat = if chat_id > 0 {
        create_test_private_chat(chat_id, username, Some(first_name), last_name)
    } else {
        create_test_group_chat(chat_id, "Test Group")
    };

    build_message(Some(user), chat, text_kind(text))
}

/// Helper function to create a simple test message with default user data
pub fn create_simple_test_message(user_id: i64, chat_id: i64, text: &str) -> Message {
    create_test_message(
        user_id,
        chat_id,
        text,
        Some("testuser"),
        "TestUser",
        Some("LastName"),
    )
}

/// Helper function to create a join service message
pub fn create_join_message(chat_id: i64, inviter: User, joined: Vec<User>) -> Message {
    build_message(
        Some(inviter),
        create_test_group_chat(chat_id, "Test Group"),
        MessageKind::NewChatMembers(MessageNewChatMembers {
            new_chat_members: joined,
        }),
    )
}

/// Helper function to create a leave service message
pub fn create_leave_message(chat_id: i64, left: User) -> Message {
    build_message(
        Some(left.clone()),
        create_test_group_chat(chat_id, "Test Group"),
        MessageKind::LeftChatMember(MessageLeftChatMember {
            left_chat_member: left,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_user() {
        let user = create_test_user(123, Some("testuser"), "Test", Some("User"));

        assert_eq!(user.id.0, 123);
        assert_eq!(user.username, Some("testuser".to_string()));
        assert_eq!(user.first_name, "Test");
        assert_eq!(user.last_name, Some("User".to_string()));
        assert!(!user.is_bot);
    }

    #[test]
    fn test_create_test_message() {
        let message = create_simple_test_message(123, -100123, "Hello");

        assert_eq!(message.from.as_ref().unwrap().id.0, 123);
        assert_eq!(message.chat.id.0, -100123);
        assert_eq!(message.text(), Some("Hello"));
        assert!(!message.chat.id.is_user());
    }

    #[test]
    fn test_create_join_and_leave_messages() {
        let alice = create_test_user(42, Some("alice"), "Alice", None);

        let join = create_join_message(-100123, alice.clone(), vec![alice.clone()]);
        let members = join.new_chat_members().expect("join message has members");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id.0, 42);

        let leave = create_leave_message(-100123, alice);
        let left = leave.left_chat_member().expect("leave message has member");
        assert_eq!(left.id.0, 42);
    }
}
