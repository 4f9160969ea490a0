//! Resources of the `conversations` domain, version `v1`.

mod completed_conversation;

pub use completed_conversation::{
    CompletedConversation, CompletedConversationReader, ConversationStatus,
};
