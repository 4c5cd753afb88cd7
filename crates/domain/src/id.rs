//! Typed identifier newtypes backed by opaque hex strings.
//!
//! Identifiers are derived from a per-table sequence number: the decimal
//! sequence is hashed with MD5 and the digest is hex-encoded. The same
//! sequence number always yields the same identifier.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use md5::{Digest, Md5};

fn digest_sequence(sequence: u64) -> String {
    hex::encode(Md5::digest(sequence.to_string().as_bytes()))
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Derive the identifier for the given sequence number.
            #[must_use]
            pub fn from_sequence(sequence: u64) -> Self {
                Self(digest_sequence(sequence))
            }

            /// Access the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Spot`](crate::spot::Spot).
    SpotId
);

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);
