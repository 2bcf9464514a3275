//! Draft profile assembly.
//!
//! Every form field lives in one immutable [`DraftProfile`] value updated
//! through pure transforms, and [`DraftProfile::compose_bio`] flattens the
//! fields into the single string the contract actually stores.

/// Personal information section of a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub gender: String,
    pub nationality: String,
}

impl PersonalInfo {
    pub fn new(
        name: impl Into<String>,
        gender: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            nationality: nationality.into(),
        }
    }
}

/// Profile picture held as an opaque `data:` URL.
///
/// Pictures are session-local: they ride along with cache entries and are
/// never part of any ledger call, so they are gone once the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureData(String);

impl PictureData {
    /// Wrap an already-encoded `data:` URL.
    pub fn new(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    /// Encode raw image bytes as a `data:` URL.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime, base64::encode(bytes)))
    }

    /// The encoded `data:` URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One in-progress profile, as entered in the form.
///
/// The draft is plain data. Nothing here talks to the ledger; the session
/// controller consumes a draft when the user submits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftProfile {
    /// Platform label ("Instagram", "Facebook", ...).
    pub platform: String,
    pub username: String,
    pub bio: String,
    pub personal: PersonalInfo,
    pub education: String,
    pub professional: String,
    pub is_private: bool,
    /// Session-local picture, never submitted on-chain.
    pub picture: Option<PictureData>,
}

impl Default for DraftProfile {
    fn default() -> Self {
        Self {
            // The form's initial platform selection
            platform: "Instagram".to_string(),
            username: String::new(),
            bio: String::new(),
            personal: PersonalInfo::default(),
            education: String::new(),
            professional: String::new(),
            is_private: false,
            picture: None,
        }
    }
}

impl DraftProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_personal(mut self, personal: PersonalInfo) -> Self {
        self.personal = personal;
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }

    pub fn with_professional(mut self, professional: impl Into<String>) -> Self {
        self.professional = professional.into();
        self
    }

    pub fn with_privacy(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn with_picture(mut self, picture: PictureData) -> Self {
        self.picture = Some(picture);
        self
    }

    /// Flatten the draft into the single bio string stored on-chain.
    ///
    /// Field order is fixed: platform, bio, personal info, education,
    /// professional. Equal drafts always compose to the same bytes.
    pub fn compose_bio(&self) -> String {
        format!(
            "Platform: {}\n\
             Bio: {}\n\
             Personal Info - Name: {}, Gender: {}, Nationality: {}\n\
             Education: {}\n\
             Professional: {}",
            self.platform,
            self.bio,
            self.personal.name,
            self.personal.gender,
            self.personal.nationality,
            self.education,
            self.professional,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> DraftProfile {
        DraftProfile::new()
            .with_username("alice")
            .with_bio("hello")
            .with_personal(PersonalInfo::new("Ana", "F", "US"))
            .with_education("BSc")
            .with_professional("Eng")
    }

    #[test]
    fn test_compose_bio_fixed_order() {
        let composed = sample_draft().compose_bio();
        assert_eq!(
            composed,
            "Platform: Instagram\n\
             Bio: hello\n\
             Personal Info - Name: Ana, Gender: F, Nationality: US\n\
             Education: BSc\n\
             Professional: Eng"
        );
    }

    #[test]
    fn test_compose_bio_deterministic() {
        let draft = sample_draft();
        let first = draft.compose_bio();
        for _ in 0..3 {
            assert_eq!(draft.compose_bio().as_bytes(), first.as_bytes());
        }
        // An equal draft built independently composes identically
        assert_eq!(sample_draft().compose_bio(), first);
    }

    #[test]
    fn test_default_platform() {
        assert_eq!(DraftProfile::new().platform, "Instagram");
    }

    #[test]
    fn test_transforms_leave_original_untouched() {
        let base = DraftProfile::new();
        let changed = base.clone().with_username("bob").with_privacy(true);

        assert_eq!(base.username, "");
        assert!(!base.is_private);
        assert_eq!(changed.username, "bob");
        assert!(changed.is_private);
    }

    #[test]
    fn test_picture_from_bytes() {
        let picture = PictureData::from_bytes("image/png", b"abc");
        assert_eq!(picture.as_str(), "data:image/png;base64,YWJj");
    }
}
