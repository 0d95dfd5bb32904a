//! `[author]` configuration.
//!
//! Author identity plus the fixed contacts mapping. Every contact platform
//! key exists on every config; an empty string is the sole "not set"
//! sentinel. Whether an empty handle is omitted from rendering or rendered
//! empty is the external generator's decision, so the sentinel is preserved
//! as-is end to end.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Field paths for [`AuthorConfig`], used in diagnostics.
pub struct AuthorFields {
    pub name: FieldPath,
    pub photo: FieldPath,
    pub bio: FieldPath,
}

/// Author identity and contacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Author display name; feeds the derived title and copyright line.
    pub name: String,

    /// Site-relative path to the author photo.
    pub photo: String,

    /// Short free-text bio.
    pub bio: String,

    /// Social/contact handles, one slot per supported platform.
    pub contacts: ContactsConfig,
}

impl AuthorConfig {
    pub const FIELDS: AuthorFields = AuthorFields {
        name: FieldPath::new("author.name"),
        photo: FieldPath::new("author.photo"),
        bio: FieldPath::new("author.bio"),
    };

    /// Validate author configuration (warning-level only).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.warn_with_hint(
                Self::FIELDS.name,
                "author name is empty; derived title and copyright will carry no name",
                "set author.name",
            );
        }
    }
}

/// Contact handles for the supported platform set.
///
/// The platform set is closed: the generator iterates these exact keys
/// when rendering the contacts block, so all of them are always present
/// in the serialized output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    pub email: String,
    pub facebook: String,
    pub telegram: String,
    pub twitter: String,
    pub github: String,
    pub rss: String,
    pub vkontakte: String,
    pub linkedin: String,
    pub instagram: String,
    pub line: String,
    pub gitlab: String,
    pub weibo: String,
    pub codepen: String,
    pub youtube: String,
    pub soundcloud: String,
}

impl ContactsConfig {
    /// Supported platforms, in declaration (and serialization) order.
    pub const PLATFORMS: [&'static str; 15] = [
        "email",
        "facebook",
        "telegram",
        "twitter",
        "github",
        "rss",
        "vkontakte",
        "linkedin",
        "instagram",
        "line",
        "gitlab",
        "weibo",
        "codepen",
        "youtube",
        "soundcloud",
    ];

    /// Iterate (platform, handle) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("email", self.email.as_str()),
            ("facebook", self.facebook.as_str()),
            ("telegram", self.telegram.as_str()),
            ("twitter", self.twitter.as_str()),
            ("github", self.github.as_str()),
            ("rss", self.rss.as_str()),
            ("vkontakte", self.vkontakte.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("instagram", self.instagram.as_str()),
            ("line", self.line.as_str()),
            ("gitlab", self.gitlab.as_str()),
            ("weibo", self.weibo.as_str()),
            ("codepen", self.codepen.as_str()),
            ("youtube", self.youtube.as_str()),
            ("soundcloud", self.soundcloud.as_str()),
        ]
        .into_iter()
    }

    /// Number of platforms with a non-empty handle.
    pub fn configured(&self) -> usize {
        self.iter().filter(|(_, handle)| !handle.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_covers_all_platforms_in_order() {
        let contacts = ContactsConfig::default();
        let keys: Vec<_> = contacts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ContactsConfig::PLATFORMS);
    }

    #[test]
    fn test_missing_keys_default_to_empty_string() {
        let contacts: ContactsConfig =
            toml::from_str("twitter = \"insane141\"\ngithub = \"jakubhomoly\"").unwrap();

        assert_eq!(contacts.twitter, "insane141");
        assert_eq!(contacts.github, "jakubhomoly");
        assert_eq!(contacts.email, "");
        assert_eq!(contacts.soundcloud, "");
        assert_eq!(contacts.configured(), 2);
    }

    #[test]
    fn test_empty_author_name_warns() {
        let mut diag = ConfigDiagnostics::new();
        AuthorConfig::default().validate(&mut diag);
        assert_eq!(diag.warning_count(), 1);

        let mut diag = ConfigDiagnostics::new();
        AuthorConfig {
            name: "Jakub Homoly".into(),
            ..AuthorConfig::default()
        }
        .validate(&mut diag);
        assert_eq!(diag.warning_count(), 0);
    }
}
