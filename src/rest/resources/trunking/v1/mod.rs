//! Resources of the `trunking` domain, version `v1`.

mod credential_list;
mod phone_number;

pub use credential_list::{
    TrunkCredentialList, TrunkCredentialListDeleter, TrunkCredentialListFetcher,
};
pub use phone_number::TrunkPhoneNumberDeleter;
