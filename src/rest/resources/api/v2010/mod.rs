//! Resources of the `api` domain, version `2010-04-01`.
//!
//! Paths live under `/2010-04-01/Accounts/{AccountSid}/` and end in
//! `.json`. Timestamps are RFC 2822; list envelopes carry a top-level
//! `next_page_uri`.
//!
//! # Available Resources
//!
//! | Resource | Operations |
//! |----------|------------|
//! | [`Recording`] | read, fetch, delete |
//! | [`Transcription`] | read, fetch, delete |
//! | [`RecordingTranscription`] | read, fetch, delete |
//! | [`AvailablePhoneNumberCountry`] | read, fetch |
//! | [`IncomingPhoneNumber`] | fetch, delete |
//! | [`Local`] | read |
//! | [`CallNotification`] | fetch, delete |
//! | [`SipCredentialList`] | fetch, delete |
//! | [`SipCredential`] | read, create, fetch, update, delete |
//! | [`Sandbox`] | fetch |
//! | [`UsageTrigger`] | fetch, update |
//! | [`ConnectApp`] | fetch, update |
//! | [`CallFeedback`] | create, fetch, update |
//! | [`CallFeedbackSummary`] | create, fetch, delete |

mod available_phone_number_country;
mod call_feedback;
mod call_feedback_summary;
mod call_notification;
mod connect_app;
mod incoming_phone_number;
mod incoming_phone_number_local;
mod recording;
mod recording_transcription;
mod sandbox;
mod sip_credential;
mod sip_credential_list;
mod transcription;
mod usage_trigger;

pub use available_phone_number_country::{
    AvailablePhoneNumberCountry, AvailablePhoneNumberCountryFetcher,
    AvailablePhoneNumberCountryReader,
};
pub use call_feedback::{
    CallFeedback, CallFeedbackCreator, CallFeedbackFetcher, CallFeedbackUpdater, FeedbackIssue,
};
pub use call_feedback_summary::{
    CallFeedbackSummary, CallFeedbackSummaryCreator, CallFeedbackSummaryDeleter,
    CallFeedbackSummaryFetcher, FeedbackIssueCount, FeedbackSummaryStatus,
};
pub use call_notification::{CallNotification, CallNotificationDeleter, CallNotificationFetcher};
pub use connect_app::{ConnectApp, ConnectAppFetcher, ConnectAppPermission, ConnectAppUpdater};
pub use incoming_phone_number::{
    IncomingPhoneNumber, IncomingPhoneNumberDeleter, IncomingPhoneNumberFetcher,
    PhoneNumberCapabilities,
};
pub use incoming_phone_number_local::{Local, LocalReader};
pub use recording::{Recording, RecordingDeleter, RecordingFetcher, RecordingReader};
pub use recording_transcription::{
    RecordingTranscription, RecordingTranscriptionDeleter, RecordingTranscriptionFetcher,
    RecordingTranscriptionReader,
};
pub use sandbox::{Sandbox, SandboxFetcher};
pub use sip_credential::{
    SipCredential, SipCredentialCreator, SipCredentialDeleter, SipCredentialFetcher,
    SipCredentialReader, SipCredentialUpdater,
};
pub use sip_credential_list::{SipCredentialList, SipCredentialListDeleter, SipCredentialListFetcher};
pub use transcription::{
    Transcription, TranscriptionDeleter, TranscriptionFetcher, TranscriptionReader,
    TranscriptionStatus,
};
pub use usage_trigger::{
    TriggerField, TriggerRecurring, UsageTrigger, UsageTriggerFetcher, UsageTriggerUpdater,
};
