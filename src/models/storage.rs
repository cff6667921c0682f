/// Storage models: canned ACL enumerations
use aws_sdk_s3::types::{BucketCannedAcl, ObjectCannedAcl};
use serde::{Deserialize, Serialize};

/// Canned ACL applied to an uploaded object
///
/// Closed enumeration rather than an open string so callers cannot hand the
/// SDK an ACL it does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectAcl {
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
    BucketOwnerRead,
    BucketOwnerFullControl,
}

impl ObjectAcl {
    pub fn as_canned(&self) -> ObjectCannedAcl {
        match self {
            Self::Private => ObjectCannedAcl::Private,
            Self::PublicRead => ObjectCannedAcl::PublicRead,
            Self::PublicReadWrite => ObjectCannedAcl::PublicReadWrite,
            Self::AuthenticatedRead => ObjectCannedAcl::AuthenticatedRead,
            Self::BucketOwnerRead => ObjectCannedAcl::BucketOwnerRead,
            Self::BucketOwnerFullControl => ObjectCannedAcl::BucketOwnerFullControl,
        }
    }
}

/// Canned ACL applied at bucket creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketAcl {
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
}

impl BucketAcl {
    pub fn as_canned(&self) -> BucketCannedAcl {
        match self {
            Self::Private => BucketCannedAcl::Private,
            Self::PublicRead => BucketCannedAcl::PublicRead,
            Self::PublicReadWrite => BucketCannedAcl::PublicReadWrite,
            Self::AuthenticatedRead => BucketCannedAcl::AuthenticatedRead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_acl_mapping() {
        assert_eq!(ObjectAcl::Private.as_canned(), ObjectCannedAcl::Private);
        assert_eq!(
            ObjectAcl::PublicRead.as_canned(),
            ObjectCannedAcl::PublicRead
        );
    }

    #[test]
    fn test_bucket_acl_mapping() {
        assert_eq!(BucketAcl::Private.as_canned(), BucketCannedAcl::Private);
        assert_eq!(
            BucketAcl::AuthenticatedRead.as_canned(),
            BucketCannedAcl::AuthenticatedRead
        );
    }

    #[test]
    fn test_acl_serde_names() {
        let acl: ObjectAcl = serde_json::from_str(r#""public-read""#).unwrap();
        assert_eq!(acl, ObjectAcl::PublicRead);
    }
}
